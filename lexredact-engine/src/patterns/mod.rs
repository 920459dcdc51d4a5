//! Configuration-driven pattern detection.
//!
//! Pattern and deny-list definitions are data: they are read from a TOML
//! [`PatternSet`] and compiled into a [`PatternDetector`]. Nothing here knows
//! what a CPF or a court header looks like.

pub mod composite;
pub mod detector;
pub mod pattern_set;

pub use composite::CompositeDetector;
pub use detector::PatternDetector;
pub use pattern_set::{DenyListDef, PatternDef, PatternSet};
