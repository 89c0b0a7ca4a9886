//! Error handling module for the poll and form stores.
//!
//! Provides one centralized error type with stable error codes so callers can
//! tell a rejected vote or submission apart from a successful one.

use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INVALID_INDEX: &str = "INVALID_INDEX";
    pub const INVALID_REFERENCE: &str = "INVALID_REFERENCE";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Poll or form not found
    NotFound(String),
    /// Vote index outside the poll's option range
    InvalidIndex {
        poll_id: String,
        index: usize,
        len: usize,
    },
    /// Reference to an option that does not belong to the poll
    InvalidReference(String),
    /// Submission failed opt-in validation
    Validation(String),
    /// Bad configuration value
    Config(String),
    /// Snapshot export failed
    Serialization(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::InvalidIndex { .. } => codes::INVALID_INDEX,
            AppError::InvalidReference(_) => codes::INVALID_REFERENCE,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::Serialization(_) => codes::SERIALIZATION_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::InvalidIndex {
                poll_id,
                index,
                len,
            } => format!(
                "Option index {} out of range for poll {} ({} options)",
                index, poll_id, len
            ),
            AppError::InvalidReference(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
            AppError::Serialization(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

/// Serializable error details for hosts that forward rejections to a UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorDetails {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.message(),
        }
    }
}
