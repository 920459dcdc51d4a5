use serde::{Deserialize, Serialize};

use crate::operator::Operator;
use crate::span::EntityType;

/// Result of a redaction run with metadata about every rendered span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactionReport {
    pub text: String,
    pub redactions: Vec<AppliedRedaction>,
    pub counts: StageCounts,
}

impl RedactionReport {
    /// Spans whose operator changed the document text.
    pub fn altered(&self) -> impl Iterator<Item = &AppliedRedaction> {
        self.redactions.iter().filter(|r| r.operator.alters_text())
    }
}

/// One final span and how it was rendered. Offsets index the original document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedRedaction {
    pub entity_type: EntityType,
    pub start: usize,
    pub end: usize,
    pub score: f64,
    pub operator: Operator,
    /// Text emitted in place of the original substring.
    pub replacement: String,
}

/// How many spans each stage saw or removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    pub candidates: usize,
    pub below_threshold: usize,
    pub suppressed: usize,
    pub downgraded: usize,
    pub discarded_overlaps: usize,
    pub policy_removed: usize,
    pub rendered: usize,
}
