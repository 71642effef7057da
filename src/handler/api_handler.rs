use rocket::serde::{json::Json, Serialize};
use rocket::State;

use crate::model::response::api_responses::{HealthResponse, HealthStatus};
use crate::repository::SqliteStore;

static API_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiVersion {
    version: &'static str,
}

#[get("/version")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion {
        version: API_VERSION,
    })
}

/// checks that the database can be reached
#[get("/health")]
pub fn health(store: &State<SqliteStore>) -> HealthResponse {
    match store.ping() {
        Ok(()) => HealthResponse::Healthy(Json(HealthStatus {
            status: "ok".to_string(),
            error: None,
        })),
        Err(e) => HealthResponse::Unhealthy(Json(HealthStatus {
            status: "error".to_string(),
            error: Some(format!("{e:?}")),
        })),
    }
}
