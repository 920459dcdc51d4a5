// Single source of truth for all default values.

// --- Chunking ---
pub const DEFAULT_MAX_CHARS: usize = 10_000;
pub const DEFAULT_OVERLAP: usize = 200;
pub const DEFAULT_MIN_BREAK_OFFSET: usize = 1_000;

// --- Detection ---
pub const DEFAULT_MIN_SCORE: f64 = 0.0;
pub const DEFAULT_PARALLEL_CHUNKS: bool = true;

// --- Validation ---
pub const DEFAULT_DOWNGRADE_CEILING: f64 = 0.4;

// --- Resolution ---
pub const DEFAULT_PRIORITY: i32 = 1;
pub const DEFAULT_BUILTIN_PRIORITIES: bool = true;

// --- Policy ---
pub const DEFAULT_ANONYMIZE_INSTITUTIONAL_ADDRESSES: bool = false;
pub const DEFAULT_INSTITUTIONAL_WINDOW: usize = 160;

// --- Operators ---
pub const DEFAULT_REPLACEMENT: &str = "<DADO_SENSIVEL>";
pub const DEFAULT_BUILTIN_OPERATORS: bool = true;
