//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec for rule-table query results (usually <4 features per name).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec for per-file recovery actions (usually 0-2).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
