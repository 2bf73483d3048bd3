//! Configuration loading errors.

use thiserror::Error;

/// Errors raised while parsing or loading a node configuration.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("Node config parse error: {0}")]
    ConfigParseError(String),
    #[error("Duplicate parameter: {0}")]
    DuplicateParameter(String),
    #[error("Invalid validator for parameter '{name}': {reason}")]
    InvalidValidator { name: String, reason: String },
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ParameterError {
    fn from(e: serde_json::Error) -> Self {
        ParameterError::Serialization(e.to_string())
    }
}
