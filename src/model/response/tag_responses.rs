use rocket::serde::json::Json;

use crate::model::response::BasicMessage;
use crate::resolver::session::EditOutcome;
use crate::resolver::Resolution;
use crate::tags::{TagDefinition, TagValue};

pub type NoContent = ();

#[derive(Responder)]
pub enum ListDefinitionsResponse {
    #[response(status = 200)]
    Success(Json<Vec<TagDefinition>>),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetDefinitionResponse {
    #[response(status = 404, content_type = "json")]
    TagNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<TagDefinition>),
}

#[derive(Responder)]
pub enum DeclareDefinitionResponse {
    #[response(status = 400, content_type = "json")]
    InvalidDefinition(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<TagDefinition>),
}

#[derive(Responder)]
pub enum ListValuesResponse {
    #[response(status = 200)]
    Success(Json<Vec<TagValue>>),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteTagValueResponse {
    #[response(status = 404, content_type = "json")]
    TagNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
}

#[derive(Responder)]
pub enum SaveTagValueResponse {
    /// the submitted value doesn't fit the tag's type
    #[response(status = 400, content_type = "json")]
    MalformedValue(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<EditOutcome>),
}

#[derive(Responder)]
pub enum ResolveTagResponse {
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Resolution>),
}

#[derive(Responder)]
pub enum ResolveTagsResponse {
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<Resolution>>),
}
