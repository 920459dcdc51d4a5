//! Caller contract violations in detector output.

use super::error_code::{self, ErrorCode};

/// A candidate span that does not fit the document it was reported for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpanError {
    #[error("span start {start} is after its end {end}")]
    Inverted { start: usize, end: usize },

    #[error("span at {start} is empty")]
    Empty { start: usize },

    #[error("span end {end} exceeds document length {len}")]
    OutOfBounds { end: usize, len: usize },

    #[error("span offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary { offset: usize },

    #[error("{entity_type} span has score {score}, expected a value in [0, 1]")]
    InvalidScore { entity_type: String, score: f64 },
}

impl ErrorCode for SpanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidScore { .. } => error_code::INVALID_SCORE,
            _ => error_code::INVALID_SPAN,
        }
    }
}
