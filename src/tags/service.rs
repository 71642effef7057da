use std::collections::HashSet;

use crate::model::error::store_errors::StoreError;
use crate::model::error::tag_errors::{
    DeclareDefinitionError, DeleteTagValueError, GetDefinitionError, GetTagValueError,
};
use crate::store::{TagRegistry, TagValueStore};
use crate::tags::{DeclareDefinitionRequest, TagDefinition, TagValue, ValueType};

pub fn list_definitions<S: TagRegistry>(store: &S) -> Result<Vec<TagDefinition>, GetDefinitionError> {
    store.list_definitions().map_err(|e| {
        log::error!("Failed to list tag definitions: {e:?}");
        GetDefinitionError::DbError
    })
}

/// will return the definition with exactly the passed name
pub fn get_definition<S: TagRegistry>(
    store: &S,
    name: &str,
) -> Result<TagDefinition, GetDefinitionError> {
    match store.get_definition(name) {
        Ok(Some(definition)) => Ok(definition),
        Ok(None) => Err(GetDefinitionError::NotFound),
        Err(e) => {
            log::error!("Could not retrieve the definition of tag {name}! Error is {e:?}");
            Err(GetDefinitionError::DbError)
        }
    }
}

/// declares a tag, or changes the type and columns of a tag that's already declared.
///
/// Columns are only allowed for table tags, and must be non-blank and unique.
/// Values already stored for the tag are left alone, even if they don't parse under the new type
pub fn declare_definition<S: TagRegistry>(
    store: &S,
    request: DeclareDefinitionRequest,
) -> Result<TagDefinition, DeclareDefinitionError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(DeclareDefinitionError::BlankName);
    }
    let columns: Vec<String> = request
        .columns
        .iter()
        .map(|it| it.trim().to_string())
        .collect();
    if !columns.is_empty() && request.value_type != ValueType::Table {
        return Err(DeclareDefinitionError::ColumnsRequireTable);
    }
    let mut seen = HashSet::new();
    for column in &columns {
        if column.is_empty() {
            return Err(DeclareDefinitionError::BlankColumn);
        }
        if !seen.insert(column.as_str()) {
            return Err(DeclareDefinitionError::DuplicateColumn(column.clone()));
        }
    }
    match store.save_definition(name, request.value_type, &columns) {
        Ok(definition) => {
            log::info!(
                "Declared tag {} as {} with {} column(s)",
                definition.name,
                definition.value_type,
                definition.columns.len()
            );
            Ok(definition)
        }
        Err(e) => {
            log::error!("Failed to declare tag {name}! Error is {e:?}");
            Err(DeclareDefinitionError::DbError)
        }
    }
}

pub fn list_values<S: TagValueStore>(store: &S) -> Result<Vec<TagValue>, GetTagValueError> {
    store.list_values().map_err(|e| {
        log::error!("Failed to list tag values: {e:?}");
        GetTagValueError::DbError
    })
}

/// deletes the value with the passed id. The tag's definition is untouched,
/// so the tag simply goes back to having no value
pub fn delete_value<S: TagValueStore>(store: &S, id: u32) -> Result<(), DeleteTagValueError> {
    match store.delete_value(id) {
        Ok(()) => {
            log::info!("Deleted tag value {id}");
            Ok(())
        }
        Err(StoreError::NotFound) => {
            log::warn!("Could not delete tag value {id}, because it does not exist");
            Err(DeleteTagValueError::NotFound)
        }
        Err(e) => {
            log::error!("Could not delete tag value {id}! Error is {e:?}");
            Err(DeleteTagValueError::DbError)
        }
    }
}
