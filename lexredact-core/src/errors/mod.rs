//! Error handling for lexredact.
//! One error enum per concern, `thiserror` only, aggregated by `RedactionError`.

pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod redaction_error;
pub mod span_error;

pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::ErrorCode;
pub use redaction_error::{RedactionError, RedactionResult};
pub use span_error::SpanError;
