// src/error.rs

//! Unified error handling for the sentiboard application.

use std::fmt;

use thiserror::Error;

/// Result type alias for sentiboard operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client failed before a response was obtained
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error, tied to a named request field
    #[error("Validation error for '{field}': {message}")]
    Validation { field: String, message: String },

    /// The external classifier answered with a non-success status
    #[error("Classifier error ({status}): {message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// The external classifier could not be reached (or timed out)
    #[error("Classification service unreachable")]
    Unavailable,

    /// Anything else that went wrong while talking to the classifier
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an upstream classifier error with a propagated status code.
    pub fn upstream(
        status: u16,
        message: impl Into<String>,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            details,
        }
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl fmt::Display) -> Self {
        Self::Unexpected(message.to_string())
    }

    /// True for errors caused by bad caller input rather than a failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = AppError::validation("review_text", "must be at least 3 characters");
        assert!(err.to_string().contains("review_text"));
        assert!(err.is_validation());
    }

    #[test]
    fn upstream_error_keeps_status() {
        let err = AppError::upstream(422, "too short", None);
        match err {
            AppError::Upstream { status, .. } => assert_eq!(status, 422),
            _ => panic!("expected upstream error"),
        }
    }
}
