//! Error types for ssmlkit

use thiserror::Error;

/// Main error type for ssmlkit
#[derive(Error, Debug)]
pub enum SsmlError {
    #[error("Markup parse error: {0}")]
    Parse(String),

    #[error("Annotation target not found: {0}")]
    TargetNotFound(String),

    #[error("Document contains no sentences")]
    EmptyInput,

    #[error("{0}")]
    Other(String),
}

/// Result type alias for ssmlkit operations
pub type Result<T> = std::result::Result<T, SsmlError>;

impl From<String> for SsmlError {
    fn from(s: String) -> Self {
        SsmlError::Other(s)
    }
}

impl From<&str> for SsmlError {
    fn from(s: &str) -> Self {
        SsmlError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for SsmlError {
    fn from(e: serde_json::Error) -> Self {
        SsmlError::Other(format!("JSON error: {}", e))
    }
}
