//! Grammar profile list self-check errors.

use super::error_code::{self, LangverErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarProfileError {
    #[error("Grammar profile list is empty")]
    Empty,

    #[error("Grammar profile {release} does not follow {previous} in ascending order")]
    NotAscending { previous: i32, release: i32 },

    #[error("Grammar profile {release} rejects {construct}, which profile {previous} already accepts")]
    NotMonotonic {
        previous: i32,
        release: i32,
        construct: &'static str,
    },
}

impl LangverErrorCode for GrammarProfileError {
    fn error_code(&self) -> &'static str {
        error_code::GRAMMAR_PROFILE_ERROR
    }
}
