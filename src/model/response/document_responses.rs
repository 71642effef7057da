use rocket::serde::json::Json;

use crate::document_tags::DocumentTagLink;
use crate::model::response::BasicMessage;

#[derive(Responder)]
pub enum ListTagNamesResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<String>>),
}

#[derive(Responder)]
pub enum ListLinksResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<DocumentTagLink>>),
}

#[derive(Responder)]
pub enum LinkTagsResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Created(Json<Vec<DocumentTagLink>>),
    #[response(status = 200)]
    Success(Json<Vec<DocumentTagLink>>),
}
