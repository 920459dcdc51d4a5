/// lexredact version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator searched for when a chunk boundary has to be chosen.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Lowest valid span score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest valid span score.
pub const MAX_SCORE: f64 = 1.0;

/// Check-digit rule for the 11-digit Brazilian taxpayer number.
pub const RULE_CPF: &str = "cpf";

/// All validation rule names the engine knows how to run.
pub const KNOWN_RULES: &[&str] = &[RULE_CPF];
