//! Detection engine: result record, per-file pipeline, batch driver.

pub mod batch;
pub mod pipeline;
pub mod result;

pub use batch::{BatchReport, FileFailure};
pub use pipeline::{DetectionPipeline, FileReport};
pub use result::DetectionResult;
