//! Configuration system for lexredact.
//! TOML-based, layered resolution: env > file > compiled defaults.

pub mod chunking_config;
pub mod defaults;
pub mod detection_config;
pub mod operator_config;
pub mod policy_config;
pub mod redaction_config;
pub mod resolution_config;
pub mod validation_config;
pub mod vocabulary_config;

pub use chunking_config::ChunkingConfig;
pub use detection_config::DetectionConfig;
pub use operator_config::OperatorConfig;
pub use policy_config::{PolicyConfig, ProximityRuleConfig};
pub use redaction_config::RedactionConfig;
pub use resolution_config::ResolutionConfig;
pub use validation_config::ValidationConfig;
pub use vocabulary_config::VocabularyConfig;
