//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Pattern '{name}' does not compile: {message}")]
    InvalidPattern { name: String, message: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
