use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category a span is tagged with.
///
/// Known tags have their own variant. Anything else a detector emits is kept
/// in `Other`, upper-cased, so new detectors need no change here. The
/// canonical text form is SCREAMING_SNAKE_CASE and is what config files use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    Person,
    Location,
    Organization,
    /// 11-digit taxpayer number (CPF).
    NationalId,
    /// State-issued identity card (RG).
    IdentityCard,
    /// Civil-servant registration (SIAPE matrícula).
    EmployeeId,
    Email,
    Phone,
    Address,
    PostalCode,
    /// Bar / medical council registrations (OAB, CRM, ...).
    ProfessionalRegistration,
    DateTime,
    LegalTerm,
    CommonTerm,
    Other(String),
}

impl EntityType {
    /// Every known variant, in declaration order.
    pub const KNOWN: [EntityType; 14] = [
        EntityType::Person,
        EntityType::Location,
        EntityType::Organization,
        EntityType::NationalId,
        EntityType::IdentityCard,
        EntityType::EmployeeId,
        EntityType::Email,
        EntityType::Phone,
        EntityType::Address,
        EntityType::PostalCode,
        EntityType::ProfessionalRegistration,
        EntityType::DateTime,
        EntityType::LegalTerm,
        EntityType::CommonTerm,
    ];

    /// Canonical tag string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Person => "PERSON",
            Self::Location => "LOCATION",
            Self::Organization => "ORGANIZATION",
            Self::NationalId => "NATIONAL_ID",
            Self::IdentityCard => "IDENTITY_CARD",
            Self::EmployeeId => "EMPLOYEE_ID",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Address => "ADDRESS",
            Self::PostalCode => "POSTAL_CODE",
            Self::ProfessionalRegistration => "PROFESSIONAL_REGISTRATION",
            Self::DateTime => "DATE_TIME",
            Self::LegalTerm => "LEGAL_TERM",
            Self::CommonTerm => "COMMON_TERM",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for EntityType {
    fn from(raw: &str) -> Self {
        let tag = raw.trim().to_ascii_uppercase();
        match tag.as_str() {
            "PERSON" => Self::Person,
            "LOCATION" => Self::Location,
            "ORGANIZATION" => Self::Organization,
            // Presidio recognizers for Brazil tag with the local names.
            "NATIONAL_ID" | "CPF" => Self::NationalId,
            "IDENTITY_CARD" | "RG" | "RG_NUMBER" => Self::IdentityCard,
            "EMPLOYEE_ID" | "SIAPE" | "MATRICULA_SIAPE" => Self::EmployeeId,
            "EMAIL" | "EMAIL_ADDRESS" => Self::Email,
            "PHONE" | "PHONE_NUMBER" | "PHONE_NUMBER_BR" => Self::Phone,
            "ADDRESS" | "ENDERECO_POSTAL" => Self::Address,
            "POSTAL_CODE" | "CEP_BR" | "CEP_NUMBER" => Self::PostalCode,
            "PROFESSIONAL_REGISTRATION" | "OAB_NUMBER" => Self::ProfessionalRegistration,
            "DATE_TIME" => Self::DateTime,
            "LEGAL_TERM" => Self::LegalTerm,
            "COMMON_TERM" => Self::CommonTerm,
            _ => Self::Other(tag),
        }
    }
}

impl From<String> for EntityType {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<EntityType> for String {
    fn from(entity_type: EntityType) -> Self {
        match entity_type {
            EntityType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for EntityType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_roundtrip_through_strings() {
        for entity_type in EntityType::KNOWN {
            let tag = entity_type.to_string();
            assert_eq!(EntityType::from(tag.as_str()), entity_type);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(EntityType::from("  person "), EntityType::Person);
        assert_eq!(EntityType::from("email_address"), EntityType::Email);
    }

    #[test]
    fn brazilian_recognizer_tags_map_to_known_types() {
        let cases = [
            ("CPF", EntityType::NationalId),
            ("RG_NUMBER", EntityType::IdentityCard),
            ("SIAPE", EntityType::EmployeeId),
            ("MATRICULA_SIAPE", EntityType::EmployeeId),
            ("ENDERECO_POSTAL", EntityType::Address),
            ("CEP_BR", EntityType::PostalCode),
            ("cep_number", EntityType::PostalCode),
            ("PHONE_NUMBER_BR", EntityType::Phone),
            ("OAB_NUMBER", EntityType::ProfessionalRegistration),
        ];
        for (tag, expected) in cases {
            assert_eq!(EntityType::from(tag), expected, "{tag}");
        }
        // Aliases serialize under the canonical tag.
        assert_eq!(String::from(EntityType::from("PHONE_NUMBER_BR")), "PHONE");
    }

    #[test]
    fn unknown_tags_are_kept_upper_cased() {
        let entity_type = EntityType::from("crm_number");
        assert_eq!(entity_type, EntityType::Other("CRM_NUMBER".into()));
        assert!(!entity_type.is_known());
        assert_eq!(entity_type.as_str(), "CRM_NUMBER");
    }
}
