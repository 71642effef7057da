//! Pairs a tag name with its declared type and its stored value, and decides how the value is displayed and edited.
//!
//! Definitions and values are only joined by name. Every read handles the definition being absent
//! (the tag is plain text) and the value being absent (the tag shows as empty and editing it creates the value).

use std::collections::HashMap;

use rocket::serde::Serialize;

use crate::document_tags::service as document_tag_service;
use crate::model::error::document_errors::ResolveError;
use crate::model::error::edit_errors::EditError;
use crate::store::{DocumentTagStore, TagRegistry, TagValueStore};
use crate::tags::{TagDefinition, TagValue, ValueType};

pub mod affordance;
pub mod display;
pub mod handler;
pub mod models;
pub mod session;
pub mod value;


use affordance::{affordance_for, Affordance};
use display::{display_value, DisplayValue};
use models::EditedValue;
use session::{EditOutcome, EditSession};
use value::TypedValue;

/// everything the presentation layer needs to show and edit one tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct Resolution {
    pub tag_name: String,
    pub value_type: ValueType,
    /// `false` when the tag has no definition and fell back to text
    pub defined: bool,
    pub raw_value: Option<String>,
    pub display: DisplayValue,
    /// [`DisplayValue::summary`] of `display`
    pub display_text: String,
    pub affordance: Affordance,
}

/// the value type and columns a definition declares, or plain text without columns if there is no definition
pub fn declared_type(definition: Option<&TagDefinition>) -> (ValueType, Vec<String>) {
    match definition {
        Some(definition) => (definition.value_type, definition.columns.clone()),
        None => (ValueType::Text, Vec::new()),
    }
}

/// resolves a tag from an already fetched definition and value
pub fn resolve_with(
    tag_name: &str,
    definition: Option<&TagDefinition>,
    value: Option<&TagValue>,
) -> Resolution {
    let (value_type, columns) = declared_type(definition);
    let display = match value.and_then(TagValue::present_value) {
        Some(raw) => display_value(&TypedValue::from_raw(value_type, raw), &columns),
        None => DisplayValue::Empty,
    };
    Resolution {
        tag_name: tag_name.to_string(),
        value_type,
        defined: definition.is_some(),
        raw_value: value.and_then(|it| it.raw_value.clone()),
        display_text: display.summary(),
        display,
        affordance: affordance_for(value_type, &columns, value),
    }
}

/// looks up the tag's definition and value, then resolves it.
/// The two reads are independent, so they may observe slightly different moments
pub fn resolve<S: TagRegistry + TagValueStore>(
    store: &S,
    tag_name: &str,
) -> Result<Resolution, ResolveError> {
    let definition = store.get_definition(tag_name).map_err(|e| {
        log::error!("Failed to retrieve the definition of tag {tag_name}: {e:?}");
        ResolveError::DbError
    })?;
    let value = store.get_value(tag_name).map_err(|e| {
        log::error!("Failed to retrieve the value of tag {tag_name}: {e:?}");
        ResolveError::DbError
    })?;
    Ok(resolve_with(tag_name, definition.as_ref(), value.as_ref()))
}

/// resolves every tag linked to the document, in link order
pub fn resolve_document<S: TagRegistry + TagValueStore + DocumentTagStore>(
    store: &S,
    document_name: &str,
) -> Result<Vec<Resolution>, ResolveError> {
    let tag_names = document_tag_service::list_tag_names(store, document_name)
        .map_err(|_| ResolveError::DbError)?;
    if tag_names.is_empty() {
        return Ok(Vec::new());
    }
    let (definitions, values) = load_all(store)?;
    Ok(tag_names
        .iter()
        .map(|name| resolve_with(name, definitions.get(name), values.get(name)))
        .collect())
}

/// Resolves every declared tag in definition order, followed by any tag that has a value but no definition
pub fn resolve_all<S: TagRegistry + TagValueStore>(
    store: &S,
) -> Result<Vec<Resolution>, ResolveError> {
    let definitions = store.list_definitions().map_err(|e| {
        log::error!("Failed to list tag definitions: {e:?}");
        ResolveError::DbError
    })?;
    let values = store.list_values().map_err(|e| {
        log::error!("Failed to list tag values: {e:?}");
        ResolveError::DbError
    })?;
    let values_by_name: HashMap<&str, &TagValue> =
        values.iter().map(|it| (it.tag_name.as_str(), it)).collect();
    let mut resolved: Vec<Resolution> = definitions
        .iter()
        .map(|definition| {
            resolve_with(
                &definition.name,
                Some(definition),
                values_by_name.get(definition.name.as_str()).copied(),
            )
        })
        .collect();
    resolved.extend(
        values
            .iter()
            .filter(|value| !definitions.iter().any(|it| it.name == value.tag_name))
            .map(|value| resolve_with(&value.tag_name, None, Some(value))),
    );
    Ok(resolved)
}

/// Commits a submitted value for the tag: opens a session on the current state, replaces the draft and saves it.
/// Clearing a tag that has a value deletes it
pub fn save_tag_value<S: TagRegistry + TagValueStore>(
    store: &S,
    tag_name: &str,
    edited: Option<EditedValue>,
) -> Result<EditOutcome, EditError> {
    let mut session = EditSession::open(store, tag_name)?;
    session.replace_draft(edited)?;
    session.save(store)
}

/// The editor's secondary action: deletes the tag's value if it has one, otherwise there is nothing to discard.
/// The tag's definition is untouched
pub fn dismiss_tag_value<S: TagRegistry + TagValueStore>(
    store: &S,
    tag_name: &str,
) -> Result<EditOutcome, EditError> {
    EditSession::open(store, tag_name)?.dismiss(store)
}

type DefinitionsByName = HashMap<String, TagDefinition>;
type ValuesByName = HashMap<String, TagValue>;

fn load_all<S: TagRegistry + TagValueStore>(
    store: &S,
) -> Result<(DefinitionsByName, ValuesByName), ResolveError> {
    let definitions = store.list_definitions().map_err(|e| {
        log::error!("Failed to list tag definitions: {e:?}");
        ResolveError::DbError
    })?;
    let values = store.list_values().map_err(|e| {
        log::error!("Failed to list tag values: {e:?}");
        ResolveError::DbError
    })?;
    Ok((
        definitions
            .into_iter()
            .map(|it| (it.name.clone(), it))
            .collect(),
        values
            .into_iter()
            .map(|it| (it.tag_name.clone(), it))
            .collect(),
    ))
}
