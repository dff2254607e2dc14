//! Engine invariant violations.

use super::error_code::{self, LangverErrorCode};

/// A result record would be internally inconsistent. This is a defect in the
/// engine or its rule data, never an input problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error(
        "required release {required} does not match the highest detected feature release {expected}"
    )]
    ReleaseMismatch { required: i32, expected: i32 },
}

impl LangverErrorCode for InvariantError {
    fn error_code(&self) -> &'static str {
        error_code::INVARIANT_VIOLATION
    }
}
