//! Route table.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{ai, security};

/// Creates the API router.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/ai/glossary", post(ai::glossary))
        .route("/ai/summary", post(ai::summary))
        .route("/ai/tags", post(ai::tags))
        .route("/ai/grammar", post(ai::grammar))
        .route("/ai/translate", post(ai::translate))
        .route("/security/encrypt", post(security::encrypt))
        .route("/security/decrypt", post(security::decrypt))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "AI Notes Backend is running" }))
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
