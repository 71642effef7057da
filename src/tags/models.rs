use chrono::NaiveDateTime;
use rocket::serde::{Deserialize, Serialize};

use crate::tags::ValueType;

/// represents a row in the GlobalTags table, which declares how the value of a tag is typed
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct TagDefinition {
    pub id: u32,
    /// unique, and what tag values and document links refer to
    pub name: String,
    pub value_type: ValueType,
    /// ordered column names. Always empty unless `value_type` is [`ValueType::Table`]
    pub columns: Vec<String>,
}

/// represents a row in the ProjectTags table. `tag_name` is only a weak reference to a [`TagDefinition`],
/// the definition might not exist
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct TagValue {
    pub id: u32,
    pub tag_name: String,
    /// opaque until paired with the tag's value type. `None` and `""` both mean "no value"
    pub raw_value: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TagValue {
    /// the raw value, unless it is missing or empty
    pub fn present_value(&self) -> Option<&str> {
        self.raw_value.as_deref().filter(|it| !it.is_empty())
    }
}

/// body for declaring a new tag definition, or changing the type of an existing one
#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct DeclareDefinitionRequest {
    pub name: String,
    pub value_type: ValueType,
    #[serde(default)]
    pub columns: Vec<String>,
}
