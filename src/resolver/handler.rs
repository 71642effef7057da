use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::document_errors::ResolveError;
use crate::model::error::edit_errors::{EditError, MalformedValue};
use crate::model::response::tag_responses::{
    ResolveTagResponse, ResolveTagsResponse, SaveTagValueResponse,
};
use crate::model::response::BasicMessage;
use crate::repository::SqliteStore;
use crate::resolver;
use crate::resolver::models::SaveTagValueRequest;

#[get("/resolve")]
pub fn resolve_all_tags(store: &State<SqliteStore>) -> ResolveTagsResponse {
    match resolver::resolve_all(store.inner()) {
        Ok(resolved) => ResolveTagsResponse::Success(Json::from(resolved)),
        Err(ResolveError::DbError) => ResolveTagsResponse::TagDbError(BasicMessage::new(
            "Failed to resolve tags. Check server logs for details",
        )),
    }
}

#[get("/resolve/<name>")]
pub fn resolve_tag(name: &str, store: &State<SqliteStore>) -> ResolveTagResponse {
    match resolver::resolve(store.inner(), name) {
        Ok(resolution) => ResolveTagResponse::Success(Json::from(resolution)),
        Err(ResolveError::DbError) => ResolveTagResponse::TagDbError(BasicMessage::new(
            "Failed to resolve tag. Check server logs for details",
        )),
    }
}

/// creates, updates, or (with an empty value) deletes the value of a tag
#[put("/values/<name>", data = "<request>")]
pub fn save_tag_value(
    name: &str,
    request: Json<SaveTagValueRequest>,
    store: &State<SqliteStore>,
) -> SaveTagValueResponse {
    match resolver::save_tag_value(store.inner(), name, request.into_inner().value) {
        Ok(outcome) => SaveTagValueResponse::Success(Json::from(outcome)),
        Err(EditError::Store(_)) => SaveTagValueResponse::TagDbError(BasicMessage::new(
            "Failed to save tag value. Check server logs for details",
        )),
        Err(e) => SaveTagValueResponse::MalformedValue(BasicMessage::new(&edit_error_message(&e))),
    }
}

/// the editor's "Delete" or "Discard" action
#[post("/values/<name>/dismiss")]
pub fn dismiss_tag_value(name: &str, store: &State<SqliteStore>) -> SaveTagValueResponse {
    match resolver::dismiss_tag_value(store.inner(), name) {
        Ok(outcome) => SaveTagValueResponse::Success(Json::from(outcome)),
        // dismissing never looks at a draft, so only the store can fail
        Err(_) => SaveTagValueResponse::TagDbError(BasicMessage::new(
            "Failed to delete tag value. Check server logs for details",
        )),
    }
}

fn edit_error_message(error: &EditError) -> String {
    match error {
        EditError::Malformed(MalformedValue::InvalidDate(raw)) => {
            format!("{raw} is not a date. Dates must be formatted as YYYY-MM-DD")
        }
        EditError::Malformed(MalformedValue::InvalidTable(reason)) => {
            format!("The value is not a list of table rows: {reason}")
        }
        EditError::Malformed(MalformedValue::UnknownColumn(column)) => {
            format!("The tag does not declare a column named {column}")
        }
        EditError::WrongEditor(value_type) => {
            format!("That value can't be stored in a {value_type} tag")
        }
        EditError::Store(_) => "Failed to save tag value".to_string(),
    }
}
