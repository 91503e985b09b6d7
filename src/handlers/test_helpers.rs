//! Shared test utilities for handler unit tests.
//!
//! [`TestHarness`] owns a fresh controller and a temp static directory;
//! the helpers build requests and read JSON response bodies.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot()

use super::router::build_router;
use super::state::TodoController;
use crate::config::ServerConfig;

/// A self-contained test environment.
///
/// Holds `TempDir` so the static directory lives as long as the harness.
pub struct TestHarness {
    pub controller: Arc<TodoController>,
    _static_dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        let static_dir = TempDir::new().expect("failed to create temp dir");
        let config = ServerConfig {
            static_dir: static_dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        Self {
            controller: Arc::new(TodoController::new(config)),
            _static_dir: static_dir,
        }
    }

    /// Shared state, as handlers receive it via `State(..)`
    pub fn state(&self) -> Arc<TodoController> {
        self.controller.clone()
    }

    pub fn router(&self) -> Router {
        build_router(self.controller.clone())
    }
}

// ---------- Request builders ----------

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// POST with a JSON body and content type
pub fn post_json<T: serde::Serialize>(uri: &str, body: &T) -> Request<Body> {
    let json = serde_json::to_string(body).unwrap();
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json))
        .unwrap()
}

/// POST an arbitrary body with no content type
pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// ---------- Response helpers ----------

/// Send a request through the router and return (status, JSON body).
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body_bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&body_bytes).to_string())
        })
    };
    (status, json)
}
