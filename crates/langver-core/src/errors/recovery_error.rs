//! Recovery scanner setup errors.

use super::error_code::{self, LangverErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    #[error("Invalid recovery pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl LangverErrorCode for RecoveryError {
    fn error_code(&self) -> &'static str {
        error_code::RECOVERY_ERROR
    }
}
