use rocket::serde::Deserialize;

use crate::resolver::value::RawTableRow;

/// A value submitted from an editor. Table editors submit rows, every other editor submits text.
///
/// Row cells are kept as json until the draft is replaced, so a non-text cell is reported as a malformed table
/// instead of failing the whole body
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde", untagged)]
pub enum EditedValue {
    Text(String),
    Rows(Vec<RawTableRow>),
}

/// body for committing an edit. A missing or `null` value clears the tag
#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "rocket::serde")]
pub struct SaveTagValueRequest {
    #[serde(default)]
    pub value: Option<EditedValue>,
}
