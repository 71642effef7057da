use std::sync::{Mutex, MutexGuard};

use chrono::Local;

use crate::document_tags::DocumentTagLink;
use crate::model::error::store_errors::StoreError;
use crate::store::{DocumentTagStore, TagRegistry, TagValueStore};
use crate::tags::{TagDefinition, TagValue, ValueType};

#[derive(Default)]
struct State {
    definitions: Vec<TagDefinition>,
    values: Vec<TagValue>,
    links: Vec<DocumentTagLink>,
    next_id: u32,
}

impl State {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

/// an in memory store for tests. Ids are shared between tables and never reused
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// a store that fails every call with [`StoreError::Unavailable`]
    pub fn unavailable() -> MemoryStore {
        MemoryStore {
            state: Mutex::default(),
            unavailable: true,
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        self.state.lock().map_err(|_| StoreError::Unavailable)
    }
}

impl TagRegistry for MemoryStore {
    fn list_definitions(&self) -> Result<Vec<TagDefinition>, StoreError> {
        Ok(self.state()?.definitions.clone())
    }

    fn get_definition(&self, name: &str) -> Result<Option<TagDefinition>, StoreError> {
        Ok(self
            .state()?
            .definitions
            .iter()
            .find(|it| it.name == name)
            .cloned())
    }

    fn save_definition(
        &self,
        name: &str,
        value_type: ValueType,
        columns: &[String],
    ) -> Result<TagDefinition, StoreError> {
        let mut state = self.state()?;
        if let Some(existing) = state.definitions.iter_mut().find(|it| it.name == name) {
            existing.value_type = value_type;
            existing.columns = columns.to_vec();
            return Ok(existing.clone());
        }
        let definition = TagDefinition {
            id: state.next_id(),
            name: name.to_string(),
            value_type,
            columns: columns.to_vec(),
        };
        state.definitions.push(definition.clone());
        Ok(definition)
    }
}

impl TagValueStore for MemoryStore {
    fn list_values(&self) -> Result<Vec<TagValue>, StoreError> {
        Ok(self.state()?.values.clone())
    }

    fn get_value(&self, tag_name: &str) -> Result<Option<TagValue>, StoreError> {
        Ok(self
            .state()?
            .values
            .iter()
            .find(|it| it.tag_name == tag_name)
            .cloned())
    }

    fn upsert_value(&self, tag_name: &str, raw_value: &str) -> Result<TagValue, StoreError> {
        let mut state = self.state()?;
        let now = Local::now().naive_local();
        if let Some(existing) = state.values.iter_mut().find(|it| it.tag_name == tag_name) {
            existing.raw_value = Some(raw_value.to_string());
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let value = TagValue {
            id: state.next_id(),
            tag_name: tag_name.to_string(),
            raw_value: Some(raw_value.to_string()),
            created_at: now,
            updated_at: now,
        };
        state.values.push(value.clone());
        Ok(value)
    }

    fn delete_value(&self, id: u32) -> Result<(), StoreError> {
        let mut state = self.state()?;
        let before = state.values.len();
        state.values.retain(|it| it.id != id);
        if state.values.len() == before {
            Err(StoreError::NotFound)
        } else {
            Ok(())
        }
    }
}

impl DocumentTagStore for MemoryStore {
    fn links_for_document(
        &self,
        document_name: &str,
    ) -> Result<Vec<DocumentTagLink>, StoreError> {
        Ok(self
            .state()?
            .links
            .iter()
            .filter(|it| it.document_name.as_deref() == Some(document_name))
            .cloned()
            .collect())
    }

    fn links_for_tag(&self, tag_name: &str) -> Result<Vec<DocumentTagLink>, StoreError> {
        Ok(self
            .state()?
            .links
            .iter()
            .filter(|it| it.tag_name == tag_name)
            .cloned()
            .collect())
    }

    fn create_link(
        &self,
        document_name: Option<&str>,
        tag_name: &str,
    ) -> Result<DocumentTagLink, StoreError> {
        let mut state = self.state()?;
        let link = DocumentTagLink {
            id: state.next_id(),
            document_name: document_name.map(str::to_string),
            tag_name: tag_name.to_string(),
            created_at: Local::now().naive_local(),
        };
        state.links.push(link.clone());
        Ok(link)
    }

    fn assign_by_prefix(
        &self,
        document_name: &str,
        prefix: &str,
    ) -> Result<Vec<DocumentTagLink>, StoreError> {
        let mut state = self.state()?;
        let mut updated = Vec::new();
        for link in state
            .links
            .iter_mut()
            .filter(|it| it.tag_name.starts_with(prefix))
        {
            link.document_name = Some(document_name.to_string());
            updated.push(link.clone());
        }
        Ok(updated)
    }
}
