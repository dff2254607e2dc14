//! Pipeline errors and non-fatal error collection.

use super::error_code::LangverErrorCode;
use super::{
    ConfigError, GrammarProfileError, InvariantError, ParseError, RecoveryError, SourceError,
};

/// Errors that can occur while analyzing a file or a batch.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invariant violation: {0}")]
    Invariant(#[from] InvariantError),

    #[error("Recovery error: {0}")]
    Recovery(#[from] RecoveryError),

    #[error("Grammar profile error: {0}")]
    Profile(#[from] GrammarProfileError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// True for the "both parse attempts failed" outcome.
    pub fn is_unparseable(&self) -> bool {
        matches!(self, Self::Parse(e) if e.is_unparseable())
    }
}

impl LangverErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Source(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Invariant(e) => e.error_code(),
            Self::Recovery(e) => e.error_code(),
            Self::Profile(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result of a pipeline run that accumulates non-fatal errors.
/// Allows partial results to be returned even when some files fail.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
