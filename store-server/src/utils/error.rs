//! Unified error handling
//!
//! Application error type and API response envelope:
//! - [`AppError`] — application error enum, maps to HTTP via
//!   `IntoResponse`
//! - [`AppResponse`] — error envelope `{ code, message }`
//!
//! # Error codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | E0002 | Validation failed (400) |
//! | E0003 | Resource not found (404) |
//! | E0004 | Concurrent update conflict (409) |
//! | E0005 | Insufficient stock (409) |
//! | E9001 | Internal error (500) |
//! | E9002 | Database error (500) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Error response envelope. Success responses are plain JSON bodies;
/// only failures carry the envelope.
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Business errors (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Insufficient stock for {name}. Available: {available}, Requested: {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    #[error("Concurrent update conflict: {0}")]
    Conflict(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the failed operation is worth retrying as a whole.
    ///
    /// Covers reservation races and SQLite lock contention; business
    /// rejections (validation, not found, insufficient stock) are
    /// final.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Conflict(_) => true,
            AppError::Database(msg) => msg.contains("locked") || msg.contains("busy"),
            _ => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "E0003"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "E0002"),
            AppError::InsufficientStock { .. } => (StatusCode::CONFLICT, "E0005"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "E0004"),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002")
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9001")
            }
        };

        // 5xx details stay in the log, not the response body
        let message = match &self {
            AppError::Database(_) => "Database error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message,
            data: None,
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
