//! Error types for anonboard.

use thiserror::Error;

/// Common error type for anonboard.
#[derive(Error, Debug)]
pub enum AnonboardError {
    /// Database error.
    ///
    /// Wraps errors from the document store as well as failures to
    /// encode or decode a stored board document.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Password hashing failure.
    ///
    /// A failed verification is not an error (see `DeleteOutcome`);
    /// this variant covers broken hashes and hasher failures only.
    #[error("password error: {0}")]
    Password(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found. Carries the entity name ("Board", "Thread", "Reply").
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for AnonboardError {
    fn from(e: sqlx::Error) -> Self {
        AnonboardError::Database(e.to_string())
    }
}

// Conversion from document encode/decode errors
impl From<serde_json::Error> for AnonboardError {
    fn from(e: serde_json::Error) -> Self {
        AnonboardError::Database(format!("board document: {e}"))
    }
}

/// Result type alias for anonboard operations.
pub type Result<T> = std::result::Result<T, AnonboardError>;
