use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::span::EntityType;

/// "Never redact" vocabularies for generically-typed detectors.
///
/// Terms can be listed inline or loaded from files holding one term per
/// line; blank lines and lines starting with `#` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Court headers, honorifics and other legal boilerplate.
    pub legal_terms: Vec<String>,
    /// Public place names and other safe common words.
    pub common_terms: Vec<String>,
    pub legal_terms_file: Option<PathBuf>,
    pub common_terms_file: Option<PathBuf>,
    /// Entity types the vocabularies apply to.
    pub suppressible_types: Vec<EntityType>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            legal_terms: Vec::new(),
            common_terms: Vec::new(),
            legal_terms_file: None,
            common_terms_file: None,
            suppressible_types: vec![EntityType::Person, EntityType::Location],
        }
    }
}
