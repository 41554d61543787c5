//! Unified Result Types

use crate::utils::AppError;

/// Application-level Result type, used in HTTP handlers and
/// application logic.
pub type AppResult<T> = Result<T, AppError>;
