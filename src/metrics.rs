//! Prometheus metrics
//!
//! The `endpoint` label is a route template (`/todos/{id}`) or `static`,
//! never a raw request path.

use lazy_static::lazy_static;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry};

lazy_static! {
    /// Global metrics registry
    pub static ref METRICS_REGISTRY: Registry = Registry::new();

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "todo_http_request_duration_seconds",
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
        &["method", "endpoint", "status"]
    ).unwrap();

    /// Total HTTP requests
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("todo_http_requests_total", "Total HTTP requests"),
        &["method", "endpoint", "status"]
    ).unwrap();

    /// Collection operations by kind and outcome
    pub static ref TODO_OPERATIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("todo_operations_total", "Total todo collection operations"),
        &["operation", "result"]
    ).unwrap();

    /// Records currently held in memory
    pub static ref TODO_RECORDS: IntGauge = IntGauge::new(
        "todo_records",
        "Number of todo records in the collection"
    ).unwrap();
}

/// Register all metrics with the global registry.
///
/// Call once at startup; a second call fails with `AlreadyReg`.
pub fn register_metrics() -> Result<(), prometheus::Error> {
    METRICS_REGISTRY.register(Box::new(HTTP_REQUEST_DURATION.clone()))?;
    METRICS_REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()))?;
    METRICS_REGISTRY.register(Box::new(TODO_OPERATIONS_TOTAL.clone()))?;
    METRICS_REGISTRY.register(Box::new(TODO_RECORDS.clone()))?;
    Ok(())
}

/// Count one collection operation
pub fn record_operation(operation: &str, ok: bool) {
    TODO_OPERATIONS_TOTAL
        .with_label_values(&[operation, if ok { "ok" } else { "error" }])
        .inc();
}

/// Render the registry in Prometheus text format
pub fn gather_text() -> Result<String, prometheus::Error> {
    use prometheus::Encoder;

    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&METRICS_REGISTRY.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
