//! Result type aliases for Taskboard.

use crate::BoardError;

/// A specialized `Result` type for Taskboard operations.
pub type BoardResult<T> = Result<T, BoardError>;
