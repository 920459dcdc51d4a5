//! Top-level lexredact configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ChunkingConfig, DetectionConfig, OperatorConfig, PolicyConfig, ResolutionConfig,
    ValidationConfig, VocabularyConfig,
};
use crate::constants::KNOWN_RULES;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LEXREDACT_*`)
/// 2. Config file passed to [`RedactionConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RedactionConfig {
    pub chunking: ChunkingConfig,
    pub detection: DetectionConfig,
    pub vocabulary: VocabularyConfig,
    pub validation: ValidationConfig,
    pub resolution: ResolutionConfig,
    pub policy: PolicyConfig,
    pub operators: OperatorConfig,
}

impl RedactionConfig {
    /// Load a TOML config file, apply `LEXREDACT_*` overrides and validate.
    ///
    /// Relative vocabulary paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: RedactionConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if let Some(base) = path.parent() {
            config.resolve_relative_paths(base);
        }
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded redaction config");
        Ok(config)
    }

    /// Load configuration from a TOML string. No env overrides are applied.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RedactionConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunking.max_chars == 0 {
            return Err(invalid("chunking.max_chars", "must be greater than 0"));
        }
        if self.chunking.overlap >= self.chunking.max_chars {
            return Err(invalid(
                "chunking.overlap",
                "must be smaller than chunking.max_chars",
            ));
        }
        if !(0.0..=1.0).contains(&self.detection.min_score) {
            return Err(invalid("detection.min_score", "must be between 0.0 and 1.0"));
        }
        if !(0.0..=1.0).contains(&self.validation.downgrade_ceiling) {
            return Err(invalid(
                "validation.downgrade_ceiling",
                "must be between 0.0 and 1.0",
            ));
        }
        for (entity_type, rule) in &self.validation.rules {
            if !KNOWN_RULES.contains(&rule.as_str()) {
                return Err(invalid(
                    &format!("validation.rules.{entity_type}"),
                    &format!("unknown rule '{rule}', expected one of {KNOWN_RULES:?}"),
                ));
            }
        }
        Ok(())
    }

    /// Apply environment overrides read through `lookup`.
    /// Pattern: `LEXREDACT_CHUNK_MAX_CHARS`, `LEXREDACT_POLICY_WINDOW`, etc.
    /// Unparseable values are ignored with a warning.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = parse_env(&lookup, "LEXREDACT_CHUNK_MAX_CHARS") {
            self.chunking.max_chars = v;
        }
        if let Some(v) = parse_env(&lookup, "LEXREDACT_CHUNK_OVERLAP") {
            self.chunking.overlap = v;
        }
        if let Some(v) = parse_env(&lookup, "LEXREDACT_POLICY_WINDOW") {
            self.policy.institutional_window = v;
        }
        if let Some(v) = parse_env(&lookup, "LEXREDACT_ANONYMIZE_INSTITUTIONAL_ADDRESSES") {
            self.policy.anonymize_institutional_addresses = v;
        }
        if let Some(v) = parse_env(&lookup, "LEXREDACT_MIN_SCORE") {
            self.detection.min_score = v;
        }
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        for file in [
            &mut self.vocabulary.legal_terms_file,
            &mut self.vocabulary.common_terms_file,
        ]
        .into_iter()
        .flatten()
        {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn parse_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
