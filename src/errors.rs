//! Structured error types for the HTTP layer
//!
//! Every error renders as a JSON [`ErrorResponse`] with a machine-readable code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::TodoId;

/// Error body returned to API clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    // Validation Errors (400)
    InvalidInput { field: String, reason: String },
    InvalidTodoId(String),
    InvalidJson(String),

    // Not Found Errors (404)
    TodoNotFound(TodoId),

    // Internal Errors (500)
    ConcurrencyError(String),
}

impl AppError {
    /// Get error code for client identification
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::InvalidTodoId(_) => "INVALID_TODO_ID",
            Self::InvalidJson(_) => "INVALID_JSON",
            Self::TodoNotFound(_) => "TODO_NOT_FOUND",
            Self::ConcurrencyError(_) => "CONCURRENCY_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } | Self::InvalidTodoId(_) | Self::InvalidJson(_) => {
                StatusCode::BAD_REQUEST
            }

            Self::TodoNotFound(_) => StatusCode::NOT_FOUND,

            Self::ConcurrencyError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get detailed error message
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { field, reason } => {
                format!("Invalid input for field '{field}': {reason}")
            }
            Self::InvalidTodoId(msg) => format!("Invalid todo ID: {msg}"),
            Self::InvalidJson(msg) => format!("Invalid JSON body: {msg}"),
            Self::TodoNotFound(id) => format!("Todo not found id={id}"),
            Self::ConcurrencyError(msg) => format!("Concurrency error: {msg}"),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.message(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", self.message());
        } else {
            tracing::warn!(code = self.code(), "{}", self.message());
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Lift `anyhow` validation failures into [`AppError::InvalidInput`]
pub trait ValidationErrorExt<T> {
    fn map_validation_err(self, field: &str) -> Result<T>;
}

impl<T> ValidationErrorExt<T> for anyhow::Result<T> {
    fn map_validation_err(self, field: &str) -> Result<T> {
        self.map_err(|e| AppError::InvalidInput {
            field: field.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
