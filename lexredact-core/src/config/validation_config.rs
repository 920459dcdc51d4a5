use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::RULE_CPF;
use crate::span::EntityType;

/// Structural checks applied to specific entity types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Score cap for spans that fail their rule.
    pub downgrade_ceiling: f64,
    /// Entity type -> rule name.
    pub rules: BTreeMap<EntityType, String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            downgrade_ceiling: defaults::DEFAULT_DOWNGRADE_CEILING,
            rules: BTreeMap::from([(EntityType::NationalId, RULE_CPF.to_string())]),
        }
    }
}
