use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

pub mod search;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/people", get(search::search_people))
}

/// The single failure class callers see: any error raised while building or
/// executing the repository query collapses into a 500 with a message string.
/// No sub-kind is surfaced and nothing is rethrown past this boundary.
pub enum ServiceError {
    Search(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ServiceError::Search(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}
