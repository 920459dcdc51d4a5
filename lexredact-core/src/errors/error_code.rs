//! Stable error codes for callers that log or route on error kind.

/// Every error enum implements this to expose a machine-readable code.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_SPAN").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_SPAN: &str = "INVALID_SPAN";
pub const INVALID_SCORE: &str = "INVALID_SCORE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
