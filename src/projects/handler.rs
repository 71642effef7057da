use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::project_errors::{CreateProjectError, UpdateProjectError};
use crate::model::response::project_responses::{
    CreateGlobalDocumentResponse, CreateProjectDocumentResponse, CreateProjectResponse,
    ListGlobalDocumentsResponse, ListProjectDocumentsResponse, ListProjectsResponse,
    UpdateProjectResponse,
};
use crate::model::response::BasicMessage;
use crate::projects::service;
use crate::projects::{
    CreateGlobalDocumentRequest, CreateProjectDocumentRequest, CreateProjectRequest,
    ProjectDocumentQuery, UpdateProjectRequest,
};
use crate::repository::SqliteStore;

#[get("/")]
pub fn list_projects(store: &State<SqliteStore>) -> ListProjectsResponse {
    match service::list_projects(store.inner()) {
        Ok(projects) => ListProjectsResponse::Success(Json::from(projects)),
        Err(_) => ListProjectsResponse::DbError(BasicMessage::new(
            "Failed to pull projects from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<request>")]
pub fn create_project(
    request: Json<CreateProjectRequest>,
    store: &State<SqliteStore>,
) -> CreateProjectResponse {
    match service::create_project(store.inner(), request.into_inner()) {
        Ok(project) => CreateProjectResponse::Success(Json::from(project)),
        Err(CreateProjectError::BlankName) => {
            CreateProjectResponse::BadRequest(BasicMessage::new("Project name cannot be empty"))
        }
        Err(CreateProjectError::DbError) => CreateProjectResponse::DbError(BasicMessage::new(
            "Failed to create project. Check server logs for details",
        )),
    }
}

#[put("/", data = "<request>")]
pub fn update_project(
    request: Json<UpdateProjectRequest>,
    store: &State<SqliteStore>,
) -> UpdateProjectResponse {
    match service::update_project(store.inner(), request.into_inner()) {
        Ok(project) => UpdateProjectResponse::Success(Json::from(project)),
        Err(UpdateProjectError::NotFound) => UpdateProjectResponse::ProjectNotFound(
            BasicMessage::new("The project with the passed id could not be found."),
        ),
        Err(UpdateProjectError::BlankName) => {
            UpdateProjectResponse::BadRequest(BasicMessage::new("Project name cannot be empty"))
        }
        Err(UpdateProjectError::DbError) => UpdateProjectResponse::DbError(BasicMessage::new(
            "Failed to update project. Check server logs for details",
        )),
    }
}

#[get("/?<query..>")]
pub fn list_project_documents(
    query: ProjectDocumentQuery,
    store: &State<SqliteStore>,
) -> ListProjectDocumentsResponse {
    match service::list_project_documents(store.inner(), query.project_name.as_deref()) {
        Ok(documents) => ListProjectDocumentsResponse::Success(Json::from(documents)),
        Err(_) => ListProjectDocumentsResponse::DbError(BasicMessage::new(
            "Failed to pull project documents from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<request>")]
pub fn create_project_document(
    request: Json<CreateProjectDocumentRequest>,
    store: &State<SqliteStore>,
) -> CreateProjectDocumentResponse {
    match service::create_project_document(store.inner(), request.into_inner()) {
        Ok(document) => CreateProjectDocumentResponse::Success(Json::from(document)),
        Err(CreateProjectError::BlankName) => CreateProjectDocumentResponse::BadRequest(
            BasicMessage::new("Project name and document id cannot be empty"),
        ),
        Err(CreateProjectError::DbError) => CreateProjectDocumentResponse::DbError(
            BasicMessage::new("Failed to create project document. Check server logs for details"),
        ),
    }
}

#[get("/")]
pub fn list_global_documents(store: &State<SqliteStore>) -> ListGlobalDocumentsResponse {
    match service::list_global_documents(store.inner()) {
        Ok(documents) => ListGlobalDocumentsResponse::Success(Json::from(documents)),
        Err(_) => ListGlobalDocumentsResponse::DbError(BasicMessage::new(
            "Failed to pull documents from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<request>")]
pub fn create_global_document(
    request: Json<CreateGlobalDocumentRequest>,
    store: &State<SqliteStore>,
) -> CreateGlobalDocumentResponse {
    match service::create_global_document(store.inner(), request.into_inner()) {
        Ok(document) => CreateGlobalDocumentResponse::Success(Json::from(document)),
        Err(CreateProjectError::BlankName) => CreateGlobalDocumentResponse::BadRequest(
            BasicMessage::new("Document id cannot be empty"),
        ),
        Err(CreateProjectError::DbError) => CreateGlobalDocumentResponse::DbError(
            BasicMessage::new("Failed to create document. Check server logs for details"),
        ),
    }
}
