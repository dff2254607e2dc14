//! Type-feature rule table: maps packages and type names to catalog features.

pub mod builtin;
pub mod entry_points;
pub mod rule;
pub mod table;

pub use entry_points::{entry_point_feature, StaticEntryPoint};
pub use rule::{RuleScope, TypeFeatureRule};
pub use table::RuleTable;
