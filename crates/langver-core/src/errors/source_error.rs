//! Source reading errors.

use std::path::PathBuf;

use super::error_code::{self, LangverErrorCode};

/// The source file could not be read. Reported per file; a batch continues.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Cannot read {path}: {message}")]
    Unreadable { path: PathBuf, message: String },
}

impl LangverErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::UNREADABLE_SOURCE
    }
}
