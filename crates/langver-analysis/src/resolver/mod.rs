//! Minimum release resolution.
//!
//! Two independent answers: the newest feature the file uses, and the oldest
//! grammar that accepts it. Neither overrides the other.

pub mod feature_max;
pub mod grammar_search;

pub use feature_max::required_release;
pub use grammar_search::minimum_release;

use serde::Serialize;

/// Outcome of the grammar search. `Unparseable` is reported as such, never
/// as a guessed release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseVerdict {
    Release(i32),
    Unparseable,
}

impl ReleaseVerdict {
    pub fn release(self) -> Option<i32> {
        match self {
            Self::Release(release) => Some(release),
            Self::Unparseable => None,
        }
    }
}

impl std::fmt::Display for ReleaseVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Release(release) => write!(f, "{release}"),
            Self::Unparseable => f.write_str("unparseable"),
        }
    }
}
