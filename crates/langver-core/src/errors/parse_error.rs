//! Parser errors.
//!
//! Every variant except `LanguageInit` means the file is unparseable, which is
//! a per-file outcome distinct from "parsed, zero features".

use super::error_code::{self, LangverErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load the Java grammar: {message}")]
    LanguageInit { message: String },

    #[error("Parser produced no tree")]
    NoTree,

    #[error("Syntax errors: {error_count} error node(s), first at line {first_line}")]
    Syntax { error_count: u32, first_line: u32 },

    #[error("Tree depth exceeds limit of {limit}")]
    TooDeep { limit: usize },

    #[error("{construct} is not accepted by a release {parser_release} parser")]
    Rejected {
        construct: &'static str,
        parser_release: i32,
    },
}

impl ParseError {
    /// True when the failure belongs to the input rather than the parser setup.
    pub fn is_unparseable(&self) -> bool {
        !matches!(self, Self::LanguageInit { .. })
    }
}

impl LangverErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LanguageInit { .. } => error_code::PARSER_INIT,
            _ => error_code::UNPARSEABLE,
        }
    }
}
