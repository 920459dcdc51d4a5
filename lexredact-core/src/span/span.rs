use serde::{Deserialize, Serialize};

use super::EntityType;
use crate::constants::{MAX_SCORE, MIN_SCORE};
use crate::errors::SpanError;

/// An annotated byte range of the document.
///
/// Offsets are half-open and index the original, unmodified document text.
/// Spans are values: every pipeline stage builds new spans instead of
/// editing the ones it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub entity_type: EntityType,
    /// Detector confidence in `[0.0, 1.0]`.
    pub score: f64,
}

impl Span {
    pub fn new(start: usize, end: usize, entity_type: impl Into<EntityType>, score: f64) -> Self {
        Self {
            start,
            end,
            entity_type: entity_type.into(),
            score,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the two half-open ranges share at least one byte.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Same span moved `offset` bytes to the right.
    pub fn shifted(&self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            ..self.clone()
        }
    }

    /// Same span with a different score.
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }

    /// The covered substring.
    ///
    /// # Panics
    /// Panics if the span was not validated against `document`.
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }

    /// Check the span against the document it claims to annotate.
    pub fn validate(&self, document: &str) -> Result<(), SpanError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(SpanError::InvalidScore {
                entity_type: self.entity_type.to_string(),
                score: self.score,
            });
        }
        if self.start > self.end {
            return Err(SpanError::Inverted {
                start: self.start,
                end: self.end,
            });
        }
        if self.start == self.end {
            return Err(SpanError::Empty { start: self.start });
        }
        if self.end > document.len() {
            return Err(SpanError::OutOfBounds {
                end: self.end,
                len: document.len(),
            });
        }
        for offset in [self.start, self.end] {
            if !document.is_char_boundary(offset) {
                return Err(SpanError::NotCharBoundary { offset });
            }
        }
        Ok(())
    }
}
