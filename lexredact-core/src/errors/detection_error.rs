//! Detection errors.

use super::error_code::{self, ErrorCode};

/// Errors reported by a detector while analyzing a chunk.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("Detector {detector} failed on chunk at offset {offset}: {message}")]
    Failed {
        detector: String,
        offset: usize,
        message: String,
    },
}

impl DetectionError {
    /// Convenience constructor for detectors that do not know their chunk offset.
    pub fn failed(detector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            detector: detector.into(),
            offset: 0,
            message: message.into(),
        }
    }

    /// The same error, attributed to the chunk starting at `offset`.
    pub fn at_offset(self, offset: usize) -> Self {
        match self {
            Self::Failed {
                detector, message, ..
            } => Self::Failed {
                detector,
                offset,
                message,
            },
        }
    }
}

impl ErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
