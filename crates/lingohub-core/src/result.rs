//! Result alias used across all LingoHub crates.

use crate::error::AppError;

/// Convenience alias for `Result<T, AppError>`.
pub type AppResult<T> = Result<T, AppError>;
