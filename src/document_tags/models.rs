use chrono::NaiveDateTime;
use rocket::serde::{Deserialize, Serialize};

/// represents a row in the DocumentTags table. Declares that a tag name is relevant to a document.
/// Neither name is a foreign key; links are matched to definitions and values by name at query time
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct DocumentTagLink {
    pub id: u32,
    /// `None` until the link is assigned to a document
    pub document_name: Option<String>,
    pub tag_name: String,
    pub created_at: NaiveDateTime,
}

/// body for linking tags to a document
#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct LinkTagsRequest {
    pub tag_names: Vec<String>,
}
