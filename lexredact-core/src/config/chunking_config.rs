use serde::{Deserialize, Serialize};

use super::defaults;

/// Window sizes used when a document is split for detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Largest chunk handed to a detector, in bytes.
    pub max_chars: usize,
    /// Bytes shared by consecutive chunks.
    pub overlap: usize,
    /// A paragraph break is only used as a cut point when it lies more than
    /// this many bytes into the window.
    pub min_break_offset: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: defaults::DEFAULT_MAX_CHARS,
            overlap: defaults::DEFAULT_OVERLAP,
            min_break_offset: defaults::DEFAULT_MIN_BREAK_OFFSET,
        }
    }
}
