//! Per-file analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_TREE_DEPTH, DEFAULT_MIN_RELEASE_FLOOR, LATEST_RELEASE};

/// Configuration for the detection pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Release reported for files with no detected features, and the floor
    /// below which features are left out of the reported list. Default: 1.
    pub min_release_floor: Option<i32>,
    /// Upper-bound grammar release the parser accepts. Default: latest.
    pub parser_release: Option<i32>,
    /// Maximum syntax tree depth before a file is reported unparseable.
    pub max_tree_depth: Option<usize>,
    /// Rewrite `yield` statements before the first parse. Default: true.
    pub keyword_substitution: Option<bool>,
    /// Relocate local type declarations after a failed parse. Default: true.
    pub relocation: Option<bool>,
}

impl AnalysisConfig {
    pub fn effective_min_release_floor(&self) -> i32 {
        self.min_release_floor.unwrap_or(DEFAULT_MIN_RELEASE_FLOOR)
    }

    pub fn effective_parser_release(&self) -> i32 {
        self.parser_release.unwrap_or(LATEST_RELEASE)
    }

    pub fn effective_max_tree_depth(&self) -> usize {
        self.max_tree_depth.unwrap_or(DEFAULT_MAX_TREE_DEPTH)
    }

    pub fn effective_keyword_substitution(&self) -> bool {
        self.keyword_substitution.unwrap_or(true)
    }

    pub fn effective_relocation(&self) -> bool {
        self.relocation.unwrap_or(true)
    }
}
