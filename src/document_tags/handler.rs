use rocket::serde::json::Json;
use rocket::State;

use crate::document_tags::service;
use crate::document_tags::LinkTagsRequest;
use crate::model::error::document_errors::{DocumentTagError, ResolveError};
use crate::model::response::document_responses::{
    LinkTagsResponse, ListLinksResponse, ListTagNamesResponse,
};
use crate::model::response::tag_responses::ResolveTagsResponse;
use crate::model::response::BasicMessage;
use crate::repository::SqliteStore;
use crate::resolver;

/// resolves every tag linked to the document
#[get("/<name>/tags")]
pub fn get_document_tags(name: &str, store: &State<SqliteStore>) -> ResolveTagsResponse {
    match resolver::resolve_document(store.inner(), name) {
        Ok(resolved) => ResolveTagsResponse::Success(Json::from(resolved)),
        Err(ResolveError::DbError) => ResolveTagsResponse::TagDbError(BasicMessage::new(
            "Failed to resolve the tags of the document. Check server logs for details",
        )),
    }
}

#[get("/<name>/tag-names")]
pub fn get_document_tag_names(name: &str, store: &State<SqliteStore>) -> ListTagNamesResponse {
    match service::list_tag_names(store.inner(), name) {
        Ok(names) => ListTagNamesResponse::Success(Json::from(names)),
        Err(_) => ListTagNamesResponse::DbError(BasicMessage::new(
            "Failed to pull document tags from database. Check server logs for details",
        )),
    }
}

#[post("/<name>/tags", data = "<request>")]
pub fn link_document_tags(
    name: &str,
    request: Json<LinkTagsRequest>,
    store: &State<SqliteStore>,
) -> LinkTagsResponse {
    match service::link_tags(store.inner(), name, request.into_inner().tag_names) {
        Ok(created) => LinkTagsResponse::Created(Json::from(created)),
        Err(e) => link_error_response(e),
    }
}

/// assigns every tag starting with `prefix` to the document
#[put("/<name>/tags/prefix/<prefix>")]
pub fn assign_tags_by_prefix(
    name: &str,
    prefix: &str,
    store: &State<SqliteStore>,
) -> LinkTagsResponse {
    match service::assign_by_prefix(store.inner(), name, prefix) {
        Ok(updated) => LinkTagsResponse::Success(Json::from(updated)),
        Err(e) => link_error_response(e),
    }
}

#[get("/<tag_name>")]
pub fn get_tag_links(tag_name: &str, store: &State<SqliteStore>) -> ListLinksResponse {
    match service::links_for_tag(store.inner(), tag_name) {
        Ok(links) => ListLinksResponse::Success(Json::from(links)),
        Err(_) => ListLinksResponse::DbError(BasicMessage::new(
            "Failed to pull document tags from database. Check server logs for details",
        )),
    }
}

/// creates an unassigned link for every declared tag
#[post("/seed")]
pub fn seed_document_tags(store: &State<SqliteStore>) -> LinkTagsResponse {
    match service::seed_from_registry(store.inner()) {
        Ok(created) => LinkTagsResponse::Created(Json::from(created)),
        Err(e) => link_error_response(e),
    }
}

fn link_error_response(error: DocumentTagError) -> LinkTagsResponse {
    match error {
        DocumentTagError::BlankName => LinkTagsResponse::BadRequest(BasicMessage::new(
            "Document names, tag names and prefixes cannot be empty",
        )),
        DocumentTagError::DbError => LinkTagsResponse::DbError(BasicMessage::new(
            "Failed to save document tags. Check server logs for details",
        )),
    }
}
