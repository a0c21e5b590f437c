//! Error types for the Turnstile ecosystem.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the Turnstile ecosystem.
#[derive(Error, Debug)]
pub enum Error {
    /// No unserved entry holds the requested position.
    #[error("No client at position {position}.")]
    NotFound {
        /// The requested 1-based position.
        position: u32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Creates a not-found error for the given position.
    #[must_use]
    pub fn not_found(position: u32) -> Self {
        Self::NotFound { position }
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
