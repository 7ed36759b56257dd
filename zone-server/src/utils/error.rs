//! Unified request-scoped error handling
//!
//! [`AppError`] is what handlers return; its [`IntoResponse`] impl maps
//! each variant to an HTTP status and the `{"error": <message>}` body the
//! existing API consumers expect.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::store::StoreError;

/// Application error enumeration
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Lookup miss (404)
    #[error("{0}")]
    NotFound(String),

    /// Request validation failure (400)
    #[error("{0}")]
    Validation(String),

    /// Anything unexpected (500); detail is logged, not exposed
    #[error("internal server error: {0}")]
    Internal(String),
}

/// Error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                error!(error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound(err.to_string()),
            StoreError::InvalidGeometry => AppError::Validation(err.to_string()),
            StoreError::Io(_) | StoreError::Parse(_) => AppError::Internal(err.to_string()),
        }
    }
}
