//! Configuration system for langver.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod batch_config;
pub mod langver_config;

pub use analysis_config::AnalysisConfig;
pub use batch_config::BatchConfig;
pub use langver_config::{CliOverrides, LangverConfig};
