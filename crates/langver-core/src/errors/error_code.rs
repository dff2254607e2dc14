//! LangverErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so result consumers can group failures
/// without matching on message text.
pub trait LangverErrorCode {
    /// Returns the error code string (e.g., "UNPARSEABLE").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNREADABLE_SOURCE: &str = "UNREADABLE_SOURCE";
pub const UNPARSEABLE: &str = "UNPARSEABLE";
pub const PARSER_INIT: &str = "PARSER_INIT";
pub const INVARIANT_VIOLATION: &str = "INVARIANT_VIOLATION";
pub const GRAMMAR_PROFILE_ERROR: &str = "GRAMMAR_PROFILE_ERROR";
pub const RECOVERY_ERROR: &str = "RECOVERY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
