use regex::{Regex, RegexBuilder};

use lexredact_core::errors::{ConfigError, DetectionError};
use lexredact_core::{Detector, EntityType, Span};

use super::pattern_set::{DenyListDef, PatternDef, PatternSet};

/// A compiled detection pattern.
#[derive(Debug, Clone)]
struct CompiledPattern {
    name: String,
    entity_type: EntityType,
    regex: Regex,
    score: f64,
}

/// Regex and deny-list detector compiled from a [`PatternSet`].
#[derive(Debug, Clone)]
pub struct PatternDetector {
    name: String,
    patterns: Vec<CompiledPattern>,
}

impl PatternDetector {
    /// Compile every definition. The first bad regex or score is reported.
    pub fn new(name: impl Into<String>, set: &PatternSet) -> Result<Self, ConfigError> {
        let mut patterns = Vec::with_capacity(set.patterns.len() + set.deny_lists.len());
        for def in &set.patterns {
            patterns.push(compile_pattern(def)?);
        }
        for def in set.deny_lists.iter().filter(|d| !d.terms.is_empty()) {
            patterns.push(compile_deny_list(def)?);
        }
        Ok(Self {
            name: name.into(),
            patterns,
        })
    }

    /// Names of the compiled patterns, in match order.
    pub fn pattern_names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name.as_str())
    }
}

impl Detector for PatternDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, chunk: &str) -> Result<Vec<Span>, DetectionError> {
        let mut spans = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(chunk) {
                if m.is_empty() {
                    continue;
                }
                spans.push(Span::new(
                    m.start(),
                    m.end(),
                    pattern.entity_type.clone(),
                    pattern.score,
                ));
            }
        }
        tracing::trace!(detector = %self.name, matches = spans.len(), "chunk analyzed");
        Ok(spans)
    }
}

fn compile_pattern(def: &PatternDef) -> Result<CompiledPattern, ConfigError> {
    check_score(&def.name, def.score)?;
    let regex = Regex::new(&def.regex).map_err(|e| ConfigError::InvalidPattern {
        name: def.name.clone(),
        message: e.to_string(),
    })?;
    Ok(CompiledPattern {
        name: def.name.clone(),
        entity_type: def.entity_type.clone(),
        regex,
        score: def.score,
    })
}

fn compile_deny_list(def: &DenyListDef) -> Result<CompiledPattern, ConfigError> {
    check_score(&def.name, def.score)?;
    // Longest first so "Justiça Federal da 1ª Região" wins over "Justiça Federal".
    let mut terms: Vec<&str> = def
        .terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let regex = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            name: def.name.clone(),
            message: e.to_string(),
        })?;
    Ok(CompiledPattern {
        name: def.name.clone(),
        entity_type: def.entity_type.clone(),
        regex,
        score: def.score,
    })
}

fn check_score(name: &str, score: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: format!("patterns.{name}.score"),
            message: "must be between 0.0 and 1.0".to_string(),
        })
    }
}
