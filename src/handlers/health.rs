//! Health and Infrastructure Handlers

use axum::{extract::State, http::StatusCode, response::Json};

use super::router::AppState;
use crate::metrics;

/// Health response for main health endpoint
#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub todos_count: usize,
}

/// Main health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        todos_count: state.len(),
    })
}

/// Liveness check - always 200 while the process can answer
pub async fn health_live() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "alive",
            "timestamp": chrono::Utc::now().to_rfc3339()
        })),
    )
}

/// Readiness check - the collection is in memory, so ready as soon as we serve
pub async fn health_ready(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ready",
            "version": env!("CARGO_PKG_VERSION"),
            "todos_count": state.len(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        })),
    )
}

/// Prometheus text exposition
pub async fn metrics_endpoint(State(state): State<AppState>) -> Result<String, StatusCode> {
    metrics::TODO_RECORDS.set(state.len() as i64);

    metrics::gather_text().map_err(|e| {
        tracing::error!("Failed to encode metrics: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
