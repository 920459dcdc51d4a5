use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::span::EntityType;

/// Entity priorities used to break ties between overlapping spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Priority of any type missing from the table.
    pub default_priority: i32,
    /// Start from the built-in table before applying `priorities`.
    pub builtin_priorities: bool,
    /// Per-type overrides. Higher wins.
    pub priorities: BTreeMap<EntityType, i32>,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            default_priority: defaults::DEFAULT_PRIORITY,
            builtin_priorities: defaults::DEFAULT_BUILTIN_PRIORITIES,
            priorities: BTreeMap::new(),
        }
    }
}

impl ResolutionConfig {
    /// Structured identifiers outrank contact data, which outranks names.
    pub fn builtin_table() -> BTreeMap<EntityType, i32> {
        BTreeMap::from([
            (EntityType::NationalId, 100),
            (EntityType::IdentityCard, 95),
            (EntityType::EmployeeId, 93),
            (EntityType::Email, 90),
            (EntityType::Phone, 88),
            (EntityType::Address, 80),
            (EntityType::PostalCode, 78),
            (EntityType::Location, 70),
            (EntityType::Person, 65),
            (EntityType::Organization, 60),
            (EntityType::DateTime, 40),
            (EntityType::LegalTerm, 10),
            (EntityType::CommonTerm, 10),
        ])
    }

    /// Built-in table (when enabled) with the configured overrides on top.
    pub fn effective_priorities(&self) -> BTreeMap<EntityType, i32> {
        let mut table = if self.builtin_priorities {
            Self::builtin_table()
        } else {
            BTreeMap::new()
        };
        table.extend(self.priorities.iter().map(|(k, v)| (k.clone(), *v)));
        table
    }
}
