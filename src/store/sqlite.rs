use crate::document_tags::{repository as document_tag_repository, DocumentTagLink};
use crate::model::error::store_errors::StoreError;
use crate::repository::SqliteStore;
use crate::store::{DocumentTagStore, TagRegistry, TagValueStore};
use crate::tags::{repository as tag_repository, TagDefinition, TagValue, ValueType};

impl TagRegistry for SqliteStore {
    fn list_definitions(&self) -> Result<Vec<TagDefinition>, StoreError> {
        self.with_connection(
            "retrieve tag definitions",
            tag_repository::get_all_definitions,
        )
    }

    fn get_definition(&self, name: &str) -> Result<Option<TagDefinition>, StoreError> {
        self.with_connection(&format!("retrieve the definition of tag {name}"), |con| {
            tag_repository::get_definition_by_name(name, con)
        })
    }

    fn save_definition(
        &self,
        name: &str,
        value_type: ValueType,
        columns: &[String],
    ) -> Result<TagDefinition, StoreError> {
        self.with_connection(&format!("save the definition of tag {name}"), |con| {
            tag_repository::save_definition(name, value_type, columns, con)
        })
    }
}

impl TagValueStore for SqliteStore {
    fn list_values(&self) -> Result<Vec<TagValue>, StoreError> {
        self.with_connection("retrieve tag values", tag_repository::get_all_values)
    }

    fn get_value(&self, tag_name: &str) -> Result<Option<TagValue>, StoreError> {
        self.with_connection(&format!("retrieve the value of tag {tag_name}"), |con| {
            tag_repository::get_value_by_name(tag_name, con)
        })
    }

    fn upsert_value(&self, tag_name: &str, raw_value: &str) -> Result<TagValue, StoreError> {
        self.with_connection(&format!("save the value of tag {tag_name}"), |con| {
            tag_repository::upsert_value(tag_name, raw_value, con)
        })
    }

    fn delete_value(&self, id: u32) -> Result<(), StoreError> {
        let deleted = self.with_connection(&format!("delete tag value {id}"), |con| {
            tag_repository::delete_value(id, con)
        })?;
        if deleted {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

impl DocumentTagStore for SqliteStore {
    fn links_for_document(
        &self,
        document_name: &str,
    ) -> Result<Vec<DocumentTagLink>, StoreError> {
        self.with_connection(
            &format!("retrieve tag links for document {document_name}"),
            |con| document_tag_repository::get_links_for_document(document_name, con),
        )
    }

    fn links_for_tag(&self, tag_name: &str) -> Result<Vec<DocumentTagLink>, StoreError> {
        self.with_connection(
            &format!("retrieve document links for tag {tag_name}"),
            |con| document_tag_repository::get_links_for_tag(tag_name, con),
        )
    }

    fn create_link(
        &self,
        document_name: Option<&str>,
        tag_name: &str,
    ) -> Result<DocumentTagLink, StoreError> {
        self.with_connection(&format!("link tag {tag_name} to a document"), |con| {
            document_tag_repository::create_link(document_name, tag_name, con)
        })
    }

    fn assign_by_prefix(
        &self,
        document_name: &str,
        prefix: &str,
    ) -> Result<Vec<DocumentTagLink>, StoreError> {
        self.with_connection(
            &format!("assign tags starting with {prefix} to document {document_name}"),
            |con| document_tag_repository::assign_by_prefix(document_name, prefix, con),
        )
    }
}
