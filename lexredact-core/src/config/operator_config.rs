use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::operator::Operator;
use crate::span::EntityType;

/// Per-entity-type rendering policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorConfig {
    /// Operator for any type missing from the table.
    pub default: Operator,
    /// Start from the built-in table before applying `by_type`.
    pub builtin_operators: bool,
    /// Per-type overrides.
    pub by_type: BTreeMap<EntityType, Operator>,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            default: Operator::replace(defaults::DEFAULT_REPLACEMENT),
            builtin_operators: defaults::DEFAULT_BUILTIN_OPERATORS,
            by_type: BTreeMap::new(),
        }
    }
}

impl OperatorConfig {
    /// Placeholder tokens for identifiers, masked phones, public data kept.
    pub fn builtin_table() -> BTreeMap<EntityType, Operator> {
        BTreeMap::from([
            (EntityType::Person, Operator::replace("<NOME>")),
            (EntityType::Location, Operator::replace("<LOCAL>")),
            (EntityType::Organization, Operator::Keep),
            (EntityType::Address, Operator::replace("<ENDERECO>")),
            (EntityType::PostalCode, Operator::replace("<CEP>")),
            (EntityType::Email, Operator::replace("<EMAIL>")),
            (EntityType::Phone, Operator::mask('*', 4, true)),
            (EntityType::NationalId, Operator::replace("<CPF>")),
            (EntityType::IdentityCard, Operator::replace("<RG>")),
            (EntityType::EmployeeId, Operator::replace("<SIAPE>")),
            (EntityType::ProfessionalRegistration, Operator::replace("<OAB>")),
            (EntityType::LegalTerm, Operator::Keep),
            (EntityType::CommonTerm, Operator::Keep),
            (EntityType::DateTime, Operator::Keep),
        ])
    }

    /// Built-in table (when enabled) with the configured overrides on top.
    pub fn effective_operators(&self) -> BTreeMap<EntityType, Operator> {
        let mut table = if self.builtin_operators {
            Self::builtin_table()
        } else {
            BTreeMap::new()
        };
        table.extend(self.by_type.iter().map(|(k, v)| (k.clone(), v.clone())));
        table
    }
}
