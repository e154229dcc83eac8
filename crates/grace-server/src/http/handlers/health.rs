//! Liveness handlers.

use axum::{response::IntoResponse, Json};
use grace_core::persona;

/// Plain-text liveness message.
pub async fn home() -> &'static str {
    persona::LIVENESS_MESSAGE
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
