//! Router Configuration - Centralized route definitions
//!
//! API and health routes are matched first; every other path falls through to
//! the static file directory.

use axum::{http::StatusCode, middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{services::ServeDir, timeout::TimeoutLayer};

use super::state::TodoController;
use super::{health, todos};

/// Application state type alias
pub type AppState = Arc<TodoController>;

/// Build the API and health routes, without static files or middleware
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        // =================================================================
        // TODOS
        // =================================================================
        .route(
            "/todos/",
            get(todos::list_todos).post(todos::create_todo),
        )
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            get(todos::show_todo)
                .post(todos::update_todo)
                .delete(todos::delete_todo),
        )
        // =================================================================
        // HEALTH & METRICS
        // =================================================================
        .route("/health", get(health::health))
        .route("/health/live", get(health::health_live))
        .route("/health/ready", get(health::health_ready))
        .route("/metrics", get(health::metrics_endpoint))
        .with_state(state)
}

/// API routes plus the static file fallback
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.server_config().static_dir.clone();
    build_api_routes(state).fallback_service(ServeDir::new(static_dir))
}

/// Complete application: router wrapped in the middleware stack from config
pub fn build_app(state: AppState) -> Router {
    let config = state.server_config().clone();

    build_router(state)
        .layer(middleware::from_fn(crate::middleware::track_metrics))
        .layer(ConcurrencyLimitLayer::new(config.max_concurrent_requests))
        .layer(timeout_layer(config.request_timeout_secs))
        .layer(config.cors.to_layer())
}

/// Requests running longer than `secs` are answered with 408
fn timeout_layer(secs: u64) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(secs))
}
