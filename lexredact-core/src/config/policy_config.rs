use serde::{Deserialize, Serialize};

use super::defaults;
use crate::span::EntityType;

/// Document-level suppression rules applied after conflict resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// When false, addresses near an organization mention are treated as the
    /// institution's own address and left in the clear.
    pub anonymize_institutional_addresses: bool,
    /// Proximity window for the institutional-address rule, in bytes.
    pub institutional_window: usize,
    /// Additional proximity rules.
    pub extra_rules: Vec<ProximityRuleConfig>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            anonymize_institutional_addresses: defaults::DEFAULT_ANONYMIZE_INSTITUTIONAL_ADDRESSES,
            institutional_window: defaults::DEFAULT_INSTITUTIONAL_WINDOW,
            extra_rules: Vec::new(),
        }
    }
}

/// Drop `target` spans lying within `window` bytes of any `anchor` span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximityRuleConfig {
    pub target: EntityType,
    pub anchor: EntityType,
    pub window: usize,
}
