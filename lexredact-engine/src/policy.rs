//! Document-level proximity suppression, run on resolved spans.
//!
//! The built-in rule keeps an institution's own address in the clear: an
//! ADDRESS lying within a window of any ORGANIZATION mention is removed from
//! the redaction set unless institutional addresses are configured to be
//! anonymized.

use lexredact_core::config::{PolicyConfig, ProximityRuleConfig};
use lexredact_core::{EntityType, Span};

/// Drop `target` spans whose range meets `[anchor.start - window, anchor.end + window]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProximityRule {
    pub target: EntityType,
    pub anchor: EntityType,
    pub window: usize,
}

impl ProximityRule {
    pub fn institutional_address(window: usize) -> Self {
        Self {
            target: EntityType::Address,
            anchor: EntityType::Organization,
            window,
        }
    }

    /// Closed-interval intersection of `span` with the widened anchor.
    pub fn is_near(&self, anchor: &Span, span: &Span) -> bool {
        anchor.start.saturating_sub(self.window) <= span.end
            && span.start <= anchor.end.saturating_add(self.window)
    }

    /// True when `span` is a target near any anchor in `spans`.
    pub fn matches(&self, span: &Span, spans: &[Span]) -> bool {
        span.entity_type == self.target
            && spans
                .iter()
                .filter(|other| other.entity_type == self.anchor)
                .any(|anchor| self.is_near(anchor, span))
    }
}

impl From<&ProximityRuleConfig> for ProximityRule {
    fn from(config: &ProximityRuleConfig) -> Self {
        Self {
            target: config.target.clone(),
            anchor: config.anchor.clone(),
            window: config.window,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyFilter {
    rules: Vec<ProximityRule>,
}

impl PolicyFilter {
    pub fn new(rules: Vec<ProximityRule>) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &PolicyConfig) -> Self {
        let mut rules = Vec::with_capacity(config.extra_rules.len() + 1);
        if !config.anonymize_institutional_addresses {
            rules.push(ProximityRule::institutional_address(
                config.institutional_window,
            ));
        }
        rules.extend(config.extra_rules.iter().map(ProximityRule::from));
        Self::new(rules)
    }

    pub fn rules(&self) -> &[ProximityRule] {
        &self.rules
    }

    /// Every rule looks at the same input, so rule order does not matter.
    pub fn apply(&self, spans: &[Span]) -> Vec<Span> {
        if self.rules.is_empty() {
            return spans.to_vec();
        }
        spans
            .iter()
            .filter(|span| !self.rules.iter().any(|rule| rule.matches(span, spans)))
            .cloned()
            .collect()
    }
}
