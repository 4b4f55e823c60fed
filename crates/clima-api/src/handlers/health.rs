//! Liveness endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use crate::constants;
use crate::state::AppState;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "Healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": constants::HEALTH_SERVICE_NAME,
        "version": state.config.app_version(),
    }))
}
