use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct HealthStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

#[derive(Responder)]
pub enum HealthResponse {
    #[response(status = 200)]
    Healthy(Json<HealthStatus>),
    #[response(status = 500)]
    Unhealthy(Json<HealthStatus>),
}
