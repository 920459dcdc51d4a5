//! Structural validation of identifier spans.
//!
//! A span that fails its rule is never dropped. Its score is capped at the
//! configured ceiling so downstream stages see it as low confidence.

pub mod cpf;

use std::collections::HashMap;

use lexredact_core::config::ValidationConfig;
use lexredact_core::constants::RULE_CPF;
use lexredact_core::errors::ConfigError;
use lexredact_core::{EntityType, Span};

/// Check-digit rules the validator can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckRule {
    /// Brazilian taxpayer number, two mod-11 check digits.
    Cpf,
}

impl CheckRule {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            RULE_CPF => Some(Self::Cpf),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cpf => RULE_CPF,
        }
    }

    pub fn is_valid(self, text: &str) -> bool {
        match self {
            Self::Cpf => cpf::is_valid_cpf(text),
        }
    }
}

/// Applies per-entity-type check rules and downgrades failures.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: HashMap<EntityType, CheckRule>,
    ceiling: f64,
}

impl Validator {
    pub fn new(rules: HashMap<EntityType, CheckRule>, ceiling: f64) -> Self {
        Self { rules, ceiling }
    }

    pub fn from_config(config: &ValidationConfig) -> Result<Self, ConfigError> {
        let mut rules = HashMap::with_capacity(config.rules.len());
        for (entity_type, name) in &config.rules {
            let rule = CheckRule::from_name(name).ok_or_else(|| ConfigError::ValidationFailed {
                field: format!("validation.rules.{entity_type}"),
                message: format!("unknown rule '{name}'"),
            })?;
            rules.insert(entity_type.clone(), rule);
        }
        Ok(Self::new(rules, config.downgrade_ceiling))
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// True when the span has a rule and its text fails it.
    pub fn fails(&self, document: &str, span: &Span) -> bool {
        self.rules
            .get(&span.entity_type)
            .is_some_and(|rule| !rule.is_valid(span.text(document)))
    }

    /// Same spans, same order; failures carry `min(score, ceiling)`.
    pub fn validate(&self, document: &str, spans: &[Span]) -> Vec<Span> {
        spans
            .iter()
            .map(|span| {
                if self.fails(document, span) {
                    span.with_score(span.score.min(self.ceiling))
                } else {
                    span.clone()
                }
            })
            .collect()
    }
}
