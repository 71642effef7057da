use rocket::serde::Serialize;

use crate::model::error::edit_errors::EditError;
use crate::model::error::store_errors::StoreError;
use crate::resolver::declared_type;
use crate::resolver::models::EditedValue;
use crate::resolver::value::{parse_table, rows_from_cells, TypedValue};
use crate::store::{TagRegistry, TagValueStore};
use crate::tags::{TagDefinition, TagValue, ValueType};

/// how an edit session ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(crate = "rocket::serde", tag = "outcome", rename_all = "camelCase")]
pub enum EditOutcome {
    /// the value was created or updated
    Saved { value: TagValue },
    /// the existing value was removed
    Deleted { id: u32 },
    /// nothing was written
    Discarded,
}

/// An open editor for one tag.
///
/// Opening a session is the move out of "unopened"; it starts clean and becomes dirty on the first edit.
/// [`EditSession::save`] and [`EditSession::dismiss`] consume the session, which puts the tag back in "unopened";
/// dropping it closes the editor without writing anything. Nothing is written to the store before one of those is called,
/// and concurrent sessions for the same tag are not coordinated: the last one saved wins
#[derive(Debug, Clone)]
pub struct EditSession {
    tag_name: String,
    value_type: ValueType,
    columns: Vec<String>,
    existing: Option<TagValue>,
    draft: TypedValue,
    dirty: bool,
}

impl EditSession {
    /// reads the tag's definition and current value, and starts editing from that value
    pub fn open<S: TagRegistry + TagValueStore>(
        store: &S,
        tag_name: &str,
    ) -> Result<EditSession, StoreError> {
        let definition = store.get_definition(tag_name)?;
        let existing = store.get_value(tag_name)?;
        Ok(EditSession::from_parts(
            tag_name,
            definition.as_ref(),
            existing,
        ))
    }

    pub fn from_parts(
        tag_name: &str,
        definition: Option<&TagDefinition>,
        existing: Option<TagValue>,
    ) -> EditSession {
        let (value_type, columns) = declared_type(definition);
        let draft = match existing.as_ref().and_then(TagValue::present_value) {
            Some(raw) => TypedValue::from_raw(value_type, raw),
            None => TypedValue::empty(value_type),
        };
        EditSession {
            tag_name: tag_name.to_string(),
            value_type,
            columns,
            existing,
            draft,
            dirty: false,
        }
    }

    /// replaces the draft of a text, date or rich text tag
    fn set_text(&mut self, value: String) -> Result<(), EditError> {
        self.draft = match self.value_type {
            ValueType::Text => TypedValue::Text(value),
            ValueType::Date => TypedValue::Date(value),
            ValueType::RichText => TypedValue::RichText(value),
            ValueType::Table => return Err(EditError::WrongEditor(ValueType::Table)),
        };
        self.dirty = true;
        Ok(())
    }

    /// replaces the whole draft with what a client submitted. `None` clears the value
    pub fn replace_draft(&mut self, edited: Option<EditedValue>) -> Result<(), EditError> {
        match (edited, self.value_type) {
            (None, value_type) => {
                self.draft = TypedValue::empty(value_type);
                self.dirty = true;
                Ok(())
            }
            (Some(EditedValue::Rows(rows)), ValueType::Table) => {
                self.draft = TypedValue::Table(rows_from_cells(rows)?);
                self.dirty = true;
                Ok(())
            }
            (Some(EditedValue::Text(text)), ValueType::Table) => {
                // a client might post the serialized payload instead of the rows
                let rows = parse_table(&text)?;
                self.draft = TypedValue::Table(rows);
                self.dirty = true;
                Ok(())
            }
            (Some(EditedValue::Text(text)), _) => self.set_text(text),
            (Some(EditedValue::Rows(_)), value_type) => Err(EditError::WrongEditor(value_type)),
        }
    }

    /// Commits the draft.
    ///
    /// - a clean session writes nothing and is discarded
    /// - an invalid draft is rejected before anything is written
    /// - a cleared draft deletes the existing value, or writes nothing if there wasn't one
    /// - anything else is upserted, creating the value if it didn't exist
    pub fn save<S: TagValueStore>(self, store: &S) -> Result<EditOutcome, EditError> {
        if !self.dirty {
            return Ok(EditOutcome::Discarded);
        }
        self.draft.validate(&self.columns)?;
        if self.draft.is_empty() {
            return match self.existing {
                Some(existing) => delete_existing(store, existing),
                None => Ok(EditOutcome::Discarded),
            };
        }
        let value = store.upsert_value(&self.tag_name, &self.draft.serialize())?;
        log::info!("Saved value {} for tag {}", value.id, self.tag_name);
        Ok(EditOutcome::Saved { value })
    }

    /// the secondary action: deletes the existing value if there is one, otherwise drops the draft
    pub fn dismiss<S: TagValueStore>(self, store: &S) -> Result<EditOutcome, EditError> {
        match self.existing {
            Some(existing) => delete_existing(store, existing),
            None => Ok(EditOutcome::Discarded),
        }
    }
}

fn delete_existing<S: TagValueStore>(
    store: &S,
    existing: TagValue,
) -> Result<EditOutcome, EditError> {
    match store.delete_value(existing.id) {
        Ok(()) => {
            log::info!(
                "Deleted value {} for tag {}",
                existing.id,
                existing.tag_name
            );
            Ok(EditOutcome::Deleted { id: existing.id })
        }
        // someone else got there first, the value is gone either way
        Err(StoreError::NotFound) => {
            log::warn!(
                "Value {} for tag {} was already deleted",
                existing.id,
                existing.tag_name
            );
            Ok(EditOutcome::Deleted { id: existing.id })
        }
        Err(e) => Err(e.into()),
    }
}
