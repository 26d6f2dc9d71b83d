//! Convenience result type alias for DocBook.

use crate::error::AppError;

/// A specialized `Result` type for DocBook operations.
pub type AppResult<T> = Result<T, AppError>;
