//! # lexredact-engine
//!
//! Reconciles candidate PII spans from independent detectors into one
//! non-overlapping annotation of a document and renders the redacted text.
//!
//! Stages, in order: [`chunker`] → detector (external) → [`offsets`] →
//! [`suppression`] → [`validation`] → [`resolver`] → [`policy`] →
//! [`renderer`]. [`Redactor`] wires them together.

pub mod chunker;
pub mod engine;
pub mod offsets;
pub mod patterns;
pub mod policy;
pub mod renderer;
pub mod resolver;
pub mod suppression;
pub mod validation;

pub use engine::{redact, Redactor};
pub use patterns::{CompositeDetector, PatternDetector, PatternSet};
