use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use super::AppState;

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "roi-calculator",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
/// Reports which lead sink is active; the lead store itself is not contacted
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "ready",
        "service": "roi-calculator",
        "lead_sink": state.sink().name(),
    })))
}
