use rocket::serde::json::Json;

use crate::model::response::BasicMessage;
use crate::projects::{GlobalDocument, Project, ProjectDocument};

#[derive(Responder)]
pub enum ListProjectsResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<Project>>),
}

#[derive(Responder)]
pub enum CreateProjectResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<Project>),
}

#[derive(Responder)]
pub enum UpdateProjectResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    ProjectNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Project>),
}

#[derive(Responder)]
pub enum ListProjectDocumentsResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<ProjectDocument>>),
}

#[derive(Responder)]
pub enum CreateProjectDocumentResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<ProjectDocument>),
}

#[derive(Responder)]
pub enum ListGlobalDocumentsResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<GlobalDocument>>),
}

#[derive(Responder)]
pub enum CreateGlobalDocumentResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<GlobalDocument>),
}
