use serde::{Deserialize, Serialize};

use super::defaults;

/// How candidate spans are collected from detectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Candidates scoring below this are dropped before any other stage.
    pub min_score: f64,
    /// Analyze chunks on the rayon pool instead of sequentially.
    pub parallel_chunks: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_score: defaults::DEFAULT_MIN_SCORE,
            parallel_chunks: defaults::DEFAULT_PARALLEL_CHUNKS,
        }
    }
}
