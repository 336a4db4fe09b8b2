//! Error handling for the Emojic substitution engine
//!
//! Substitution is total over strings, so the only caller-visible
//! failure is missing input. Lines that almost look like `#define`
//! statements are treated as content and never reach this module.

use thiserror::Error;

/// Main error type for the Emojic operations
#[derive(Error, Debug)]
pub enum EmojicError {
    /// A required text field was missing or empty
    #[error("No {field} provided")]
    InvalidInput { field: &'static str },

    /// A configuration value could not be interpreted
    #[error("Invalid configuration for '{key}': {message}")]
    Config { key: String, message: String },

    /// A key could not be turned into a match pattern
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl EmojicError {
    /// The error raised when the `code` field is empty or absent
    pub fn missing_code() -> Self {
        EmojicError::InvalidInput { field: "code" }
    }

    /// Whether the error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, EmojicError::InvalidInput { .. })
    }
}

/// Result type alias for Emojic operations
pub type Result<T> = std::result::Result<T, EmojicError>;
