//! HTTP server for the chat backend.
//!
//! Provides endpoints for:
//! - Chat (`POST /api/chat`)
//! - Grace's introduction (`GET /api/intro`)
//! - Liveness text (`GET /`)
//! - Health check (`GET /health`)

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod handlers;
pub mod responses;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Browser frontends are served from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/chat", post(handlers::chat))
        .route("/api/intro", get(handlers::intro))
        // Liveness routes
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
