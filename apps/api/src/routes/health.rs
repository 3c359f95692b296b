use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": state.config.app_name,
        "version": state.config.app_version,
        "status": "running"
    }))
}

/// GET /health
/// Liveness only; never touches the gateway or row store.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "app": state.config.app_name,
        "version": state.config.app_version
    }))
}

/// GET /health/ready
/// Reports which outbound services are configured. No calls are made, so a
/// missing key shows up here rather than as a failed request later.
pub async fn ready_handler(State(state): State<AppState>) -> Json<Value> {
    let gemini = if state.config.gemini.api_key.is_empty() {
        "missing_api_key"
    } else {
        "configured"
    };
    let row_store = if state.catalog.has_remote() {
        "configured"
    } else {
        "disabled"
    };

    Json(json!({
        "status": "ready",
        "gemini_model": state.llm.model(),
        "services": {
            "api": "up",
            "gemini": gemini,
            "row_store": row_store
        },
        "rate_limit": {
            "requests": state.config.rate_limit_requests,
            "window_secs": state.config.rate_limit_window_secs
        }
    }))
}
