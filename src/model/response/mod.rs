use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

pub mod api_responses;
pub mod document_responses;
pub mod project_responses;
pub mod tag_responses;

/// represents a basic json message
#[derive(Responder, Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}
