//! HTTP request tracking middleware

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Endpoint label for requests no route matched (static files, 404s)
pub const FALLBACK_ENDPOINT: &str = "static";

/// Record latency and count for every request
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    // Route templates only: a raw path would mint a series per client-chosen URL
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_ENDPOINT.to_string());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    crate::metrics::HTTP_REQUEST_DURATION
        .with_label_values(&[&method, &endpoint, &status])
        .observe(duration);

    crate::metrics::HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &endpoint, &status])
        .inc();

    tracing::debug!(
        method = %method,
        path = %path,
        endpoint = %endpoint,
        status = %status,
        elapsed_ms = duration * 1000.0,
        "Handled request"
    );

    response
}
