//! Top-level error for a redaction run.

use super::error_code::ErrorCode;
use super::{ConfigError, DetectionError, SpanError};

/// Errors that can occur while redacting a document.
/// Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum RedactionError {
    #[error("Invalid candidate span: {0}")]
    Span(#[from] SpanError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),
}

impl ErrorCode for RedactionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Span(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Detection(e) => e.error_code(),
        }
    }
}

pub type RedactionResult<T> = Result<T, RedactionError>;
