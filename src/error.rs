//! Error types for the collectools library.

use thiserror::Error;

/// Result type alias for collectools operations
pub type Result<T> = std::result::Result<T, CollectoolsError>;

/// Main error type for collectools
///
/// Only [`combine`](crate::map::combine) can fail; every other operation is
/// total over its documented input domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectoolsError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CollectoolsError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }

    /// True if this is an `InvalidArgument` error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
