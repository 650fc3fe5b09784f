use axum::response::{IntoResponse, Response};
use serde_json::json;
use verdict_core::StatusError;

/// Health check handler
pub async fn health_handler() -> Response {
    StatusError::ok(json!({ "status": "ok" })).into_response()
}
