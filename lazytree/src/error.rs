//! Error types for child loading.

use thiserror::Error;

/// Error type for child-load failures.
///
/// A failed load never mutates the node that requested it: `children` and
/// `page` stay as they were and the loading flag is cleared, so the same
/// user action can be retried.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LoadError {
    /// Error message
    pub message: String,
}

impl LoadError {
    /// Create a new load error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for LoadError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for LoadError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
