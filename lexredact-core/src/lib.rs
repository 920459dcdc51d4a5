//! # lexredact-core
//!
//! Foundation crate for the lexredact pipeline.
//! Defines spans, entity types, operators, errors, config, and the detector trait.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod operator;
pub mod span;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::RedactionConfig;
pub use errors::{RedactionError, RedactionResult};
pub use models::{AppliedRedaction, RedactionReport, StageCounts};
pub use operator::Operator;
pub use span::{EntityType, Span};
pub use traits::Detector;
