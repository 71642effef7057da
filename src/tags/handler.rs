use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::tag_errors::{
    DeclareDefinitionError, DeleteTagValueError, GetDefinitionError, GetTagValueError,
};
use crate::model::response::tag_responses::{
    DeclareDefinitionResponse, DeleteTagValueResponse, GetDefinitionResponse,
    ListDefinitionsResponse, ListValuesResponse,
};
use crate::model::response::BasicMessage;
use crate::repository::SqliteStore;
use crate::tags::service;
use crate::tags::DeclareDefinitionRequest;

#[get("/definitions")]
pub fn list_definitions(store: &State<SqliteStore>) -> ListDefinitionsResponse {
    match service::list_definitions(store.inner()) {
        Ok(definitions) => ListDefinitionsResponse::Success(Json::from(definitions)),
        Err(_) => ListDefinitionsResponse::TagDbError(BasicMessage::new(
            "Failed to pull tag definitions from database. Check server logs for details",
        )),
    }
}

#[get("/definitions/<name>")]
pub fn get_definition(name: &str, store: &State<SqliteStore>) -> GetDefinitionResponse {
    match service::get_definition(store.inner(), name) {
        Ok(definition) => GetDefinitionResponse::Success(Json::from(definition)),
        Err(GetDefinitionError::NotFound) => GetDefinitionResponse::TagNotFound(
            BasicMessage::new("No tag with the passed name has been declared."),
        ),
        Err(GetDefinitionError::DbError) => GetDefinitionResponse::TagDbError(BasicMessage::new(
            "Failed to pull tag definition from database. Check server logs for details",
        )),
    }
}

/// declares a tag, or changes the value type of an existing one
#[put("/definitions", data = "<request>")]
pub fn declare_definition(
    request: Json<DeclareDefinitionRequest>,
    store: &State<SqliteStore>,
) -> DeclareDefinitionResponse {
    match service::declare_definition(store.inner(), request.into_inner()) {
        Ok(definition) => DeclareDefinitionResponse::Success(Json::from(definition)),
        Err(DeclareDefinitionError::DbError) => DeclareDefinitionResponse::TagDbError(
            BasicMessage::new("Failed to save tag definition. Check server logs for details"),
        ),
        Err(DeclareDefinitionError::BlankName) => DeclareDefinitionResponse::InvalidDefinition(
            BasicMessage::new("Tag name cannot be empty"),
        ),
        Err(DeclareDefinitionError::ColumnsRequireTable) => {
            DeclareDefinitionResponse::InvalidDefinition(BasicMessage::new(
                "Only table tags can declare columns",
            ))
        }
        Err(DeclareDefinitionError::BlankColumn) => DeclareDefinitionResponse::InvalidDefinition(
            BasicMessage::new("Column names cannot be empty"),
        ),
        Err(DeclareDefinitionError::DuplicateColumn(column)) => {
            DeclareDefinitionResponse::InvalidDefinition(BasicMessage::new(&format!(
                "Column {column} is declared more than once"
            )))
        }
    }
}

#[get("/values")]
pub fn list_values(store: &State<SqliteStore>) -> ListValuesResponse {
    match service::list_values(store.inner()) {
        Ok(values) => ListValuesResponse::Success(Json::from(values)),
        Err(GetTagValueError::DbError) => ListValuesResponse::TagDbError(BasicMessage::new(
            "Failed to pull tag values from database. Check server logs for details",
        )),
    }
}

#[delete("/values/<id>")]
pub fn delete_value(id: u32, store: &State<SqliteStore>) -> DeleteTagValueResponse {
    match service::delete_value(store.inner(), id) {
        Ok(()) => DeleteTagValueResponse::Success(()),
        Err(DeleteTagValueError::NotFound) => DeleteTagValueResponse::TagNotFound(
            BasicMessage::new("The tag value with the passed id could not be found."),
        ),
        Err(DeleteTagValueError::DbError) => DeleteTagValueResponse::TagDbError(
            BasicMessage::new("Failed to delete tag value. Check server logs for details"),
        ),
    }
}
