//! Feature catalog: every named Java capability and the release that introduced it.

pub mod features;
pub mod macros;

pub use features::{Feature, FeatureCategory};
