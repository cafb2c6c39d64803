//! Unified error types for the API service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::schemas::ErrorResponse;

/// Process-level error: anything that stops the service from starting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Settings loaded but failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Metrics exporter could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP-level error carrying a status code and a detail message.
///
/// Rendered as `{"detail": ..., "status_code": ...}` with the same status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{status}: {detail}")]
pub struct ApiError {
    /// Response status.
    pub status: StatusCode,
    /// Human-readable detail.
    pub detail: String,
}

impl ApiError {
    /// Create an error with an explicit status and detail.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Create an error whose detail is the status' canonical reason phrase.
    pub fn from_status(status: StatusCode) -> Self {
        Self::new(status, status.canonical_reason().unwrap_or("Unknown Error"))
    }

    /// 404 with the standard "Not Found" detail.
    pub fn not_found() -> Self {
        Self::from_status(StatusCode::NOT_FOUND)
    }

    /// Serializable body for this error.
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            detail: self.detail.clone(),
            status_code: self.status.as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body())).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
