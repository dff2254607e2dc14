//! Error handling for langver.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod invariant_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod profile_error;
pub mod recovery_error;
pub mod source_error;

pub use config_error::ConfigError;
pub use error_code::LangverErrorCode;
pub use invariant_error::InvariantError;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use profile_error::GrammarProfileError;
pub use recovery_error::RecoveryError;
pub use source_error::SourceError;
