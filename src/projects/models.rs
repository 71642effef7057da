use chrono::NaiveDateTime;
use rocket::serde::{Deserialize, Serialize};

/// represents a row in the Projects table
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// a document attached to a project. The project is referenced by name
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ProjectDocument {
    pub id: u32,
    pub project_name: String,
    pub document_id: String,
    pub document_description: Option<String>,
}

/// a document template that isn't tied to any project
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct GlobalDocument {
    pub id: u32,
    pub title: String,
    pub document_id: String,
    pub document_description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CreateProjectDocumentRequest {
    pub project_name: String,
    pub document_id: String,
    #[serde(default)]
    pub document_description: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CreateGlobalDocumentRequest {
    /// falls back to `document_id` when missing or blank
    #[serde(default)]
    pub title: Option<String>,
    pub document_id: String,
    #[serde(default)]
    pub document_description: Option<String>,
}

/// query string for listing project documents
#[derive(FromForm, Debug)]
pub struct ProjectDocumentQuery {
    #[field(name = "projectName")]
    pub project_name: Option<String>,
}
