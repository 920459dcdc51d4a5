//! Deny-vocabulary suppression for generically-typed detectors.
//!
//! A PERSON or LOCATION candidate whose text is known legal boilerplate or
//! an explicitly public term is dropped. Every other entity type passes
//! through untouched.

use std::collections::HashSet;
use std::path::Path;

use lexredact_core::config::VocabularyConfig;
use lexredact_core::errors::ConfigError;
use lexredact_core::{EntityType, Span};

/// Case-folded "never redact" terms and the entity types they apply to.
#[derive(Debug, Clone, Default)]
pub struct DenyVocabulary {
    legal_terms: HashSet<String>,
    common_terms: HashSet<String>,
    suppressible_types: HashSet<EntityType>,
}

impl DenyVocabulary {
    pub fn new<L, C, T>(legal_terms: L, common_terms: C, suppressible_types: T) -> Self
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
        T: IntoIterator<Item = EntityType>,
    {
        Self {
            legal_terms: fold_all(legal_terms),
            common_terms: fold_all(common_terms),
            suppressible_types: suppressible_types.into_iter().collect(),
        }
    }

    /// Build from inline terms plus the configured term files.
    pub fn from_config(config: &VocabularyConfig) -> Result<Self, ConfigError> {
        let mut legal: Vec<String> = config.legal_terms.clone();
        let mut common: Vec<String> = config.common_terms.clone();
        if let Some(path) = &config.legal_terms_file {
            legal.extend(load_term_file(path)?);
        }
        if let Some(path) = &config.common_terms_file {
            common.extend(load_term_file(path)?);
        }
        Ok(Self::new(
            legal,
            common,
            config.suppressible_types.iter().cloned(),
        ))
    }

    pub fn len(&self) -> usize {
        self.legal_terms.len() + self.common_terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legal_terms.is_empty() && self.common_terms.is_empty()
    }

    /// True when `term` (trimmed, case-folded) is in either vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        let folded = fold(term);
        self.legal_terms.contains(&folded) || self.common_terms.contains(&folded)
    }

    /// Whether this span would be dropped.
    pub fn suppresses(&self, document: &str, span: &Span) -> bool {
        self.suppressible_types.contains(&span.entity_type) && self.contains(span.text(document))
    }

    /// Spans that survive suppression, in input order.
    pub fn filter(&self, document: &str, spans: &[Span]) -> Vec<Span> {
        spans
            .iter()
            .filter(|span| !self.suppresses(document, span))
            .cloned()
            .collect()
    }
}

/// Read one term per line. Blank lines and `#` comments are skipped.
pub fn load_term_file(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    let terms = parse_terms(&content);
    if terms.is_empty() {
        tracing::warn!(path = %path.display(), "vocabulary file has no terms");
    }
    Ok(terms)
}

fn parse_terms(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Full Unicode case folding, so `ß` matches `SS` and `ﬁ` matches `fi`.
fn fold(term: &str) -> String {
    caseless::default_case_fold_str(term.trim())
}

fn fold_all<I>(terms: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    terms.into_iter().map(|t| fold(t.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_lines_skip_blanks_and_comments() {
        let terms = parse_terms("# estados\nGoiás\n\n  Brasília  \n#fim\n");
        assert_eq!(terms, vec!["Goiás", "Brasília"]);
    }

    #[test]
    fn contains_folds_case_and_whitespace() {
        let vocab = DenyVocabulary::new(["Justiça Federal"], ["GOIÁS"], [EntityType::Location]);
        assert!(vocab.contains("  justiça federal "));
        assert!(vocab.contains("Goiás"));
        assert!(!vocab.contains("Goiânia"));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn fold_handles_sharp_s_and_ligatures() {
        assert_eq!(fold("Straße"), fold("STRASSE"));
        assert_eq!(fold("ﬁm"), "fim");
        assert_eq!(fold("ΣΊΣΥΦΟΣ"), fold("σίσυφος"));
    }
}
