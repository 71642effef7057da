//! The seams between the tag logic and wherever tags are actually stored.
//!
//! Request handlers get a [`crate::repository::SqliteStore`] injected through rocket's managed state,
//! services and the resolver are generic over these traits so they can run against [`memory::MemoryStore`] in tests.
//! Each call is one independent round trip, nothing here spans a transaction.

use crate::document_tags::DocumentTagLink;
use crate::model::error::store_errors::StoreError;
use crate::tags::{TagDefinition, TagValue, ValueType};

mod sqlite;

#[cfg(test)]
pub mod memory;

/// the registry of tag names and their declared value types
pub trait TagRegistry {
    fn list_definitions(&self) -> Result<Vec<TagDefinition>, StoreError>;

    /// exact name match. `None` means the tag should be treated as plain text
    fn get_definition(&self, name: &str) -> Result<Option<TagDefinition>, StoreError>;

    /// creates the definition, or replaces the type and columns of the one with the same name
    fn save_definition(
        &self,
        name: &str,
        value_type: ValueType,
        columns: &[String],
    ) -> Result<TagDefinition, StoreError>;
}

/// the current value of each tag, one row per tag name
pub trait TagValueStore {
    fn list_values(&self) -> Result<Vec<TagValue>, StoreError>;

    fn get_value(&self, tag_name: &str) -> Result<Option<TagValue>, StoreError>;

    /// creates the row for `tag_name` if there isn't one, otherwise overwrites its value and refreshes `updated_at`.
    /// There is never more than one row per tag name afterwards
    fn upsert_value(&self, tag_name: &str, raw_value: &str) -> Result<TagValue, StoreError>;

    /// removes the value row entirely. Returns [`StoreError::NotFound`] if no row has that id.
    /// Ids are never handed out again, a later upsert for the same tag gets a new one
    fn delete_value(&self, id: u32) -> Result<(), StoreError>;
}

/// which tag names are relevant to which documents
pub trait DocumentTagStore {
    /// links for the document in id order, duplicates included
    fn links_for_document(&self, document_name: &str)
        -> Result<Vec<DocumentTagLink>, StoreError>;

    fn links_for_tag(&self, tag_name: &str) -> Result<Vec<DocumentTagLink>, StoreError>;

    /// `document_name` may be `None` for a link that hasn't been assigned to a document yet
    fn create_link(
        &self,
        document_name: Option<&str>,
        tag_name: &str,
    ) -> Result<DocumentTagLink, StoreError>;

    /// assigns every link whose tag name starts with `prefix` to `document_name`, returning the updated links
    fn assign_by_prefix(
        &self,
        document_name: &str,
        prefix: &str,
    ) -> Result<Vec<DocumentTagLink>, StoreError>;
}
