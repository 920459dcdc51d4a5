use std::path::Path;

use serde::{Deserialize, Serialize};

use lexredact_core::errors::ConfigError;
use lexredact_core::EntityType;

/// Pattern and deny-list definitions for one [`PatternDetector`](super::PatternDetector).
///
/// ```toml
/// [[patterns]]
/// name = "cep"
/// entity_type = "POSTAL_CODE"
/// regex = '\b\d{5}\s*-\s*\d{3}\b'
/// score = 0.88
///
/// [[deny_lists]]
/// name = "orgaos"
/// entity_type = "ORGANIZATION"
/// terms = ["INSS", "Justiça Federal"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSet {
    pub patterns: Vec<PatternDef>,
    pub deny_lists: Vec<DenyListDef>,
}

/// A regular expression tagged with an entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDef {
    pub name: String,
    pub entity_type: EntityType,
    pub regex: String,
    pub score: f64,
}

/// Literal terms matched case-insensitively on word boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenyListDef {
    pub name: String,
    pub entity_type: EntityType,
    pub terms: Vec<String>,
    #[serde(default = "default_deny_list_score")]
    pub score: f64,
}

fn default_deny_list_score() -> f64 {
    0.99
}

impl PatternSet {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.deny_lists.is_empty()
    }
}
