//! Recovery scanner: text rewrites that let the parser accept sources it
//! would otherwise reject, while recording the features the rewrites hide.

pub mod keyword;
pub(crate) mod lexer;
pub mod relocation;

pub use keyword::{yield_statement_starts, KeywordSubstitution, Substitution};
pub use relocation::{relocate_local_declarations, LocalKind, RelocatedDeclaration, Relocation};

use std::borrow::Cow;

use langver_core::config::AnalysisConfig;
use langver_core::errors::RecoveryError;
use langver_core::types::collections::{SmallVec2, SmallVec4};
use serde::Serialize;

use crate::catalog::Feature;
use crate::parsers::{JavaParser, SyntaxParser};

/// What the scanner did to one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecoveryTrace {
    pub keyword_substituted: bool,
    pub relocated: SmallVec2<RelocatedDeclaration>,
}

impl RecoveryTrace {
    pub fn is_empty(&self) -> bool {
        !self.keyword_substituted && self.relocated.is_empty()
    }

    /// Features the rewritten text no longer shows.
    pub fn features(&self) -> SmallVec4<Feature> {
        let mut out = SmallVec4::new();
        if self.keyword_substituted {
            out.push(Feature::Yield);
        }
        for decl in &self.relocated {
            let feature = decl.kind.feature();
            if !out.contains(&feature) {
                out.push(feature);
            }
        }
        out
    }
}

/// Both recovery passes, each switchable by configuration.
#[derive(Debug, Clone)]
pub struct RecoveryScanner {
    keyword: KeywordSubstitution,
    /// Full-grammar parser that confirms keyword candidates.
    parser: JavaParser,
    keyword_enabled: bool,
    relocation_enabled: bool,
}

impl RecoveryScanner {
    pub fn new(keyword_enabled: bool, relocation_enabled: bool) -> Result<Self, RecoveryError> {
        Ok(Self {
            keyword: KeywordSubstitution::new()?,
            parser: JavaParser::default(),
            keyword_enabled,
            relocation_enabled,
        })
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self, RecoveryError> {
        Ok(Self {
            parser: JavaParser::new(config.effective_max_tree_depth()),
            ..Self::new(
                config.effective_keyword_substitution(),
                config.effective_relocation(),
            )?
        })
    }

    /// Keyword pass, run before the first parse. Only candidates the full
    /// grammar reads as `yield` statements are rewritten; text that does not
    /// parse at all is left alone.
    pub fn substitute_keywords<'a>(&self, source: &'a str, trace: &mut RecoveryTrace) -> Cow<'a, str> {
        if !self.keyword_enabled || self.keyword.candidates(source).is_empty() {
            return Cow::Borrowed(source);
        }
        let statements = match self.parser.parse_tree(source) {
            Ok(tree) => yield_statement_starts(&tree),
            Err(e) => {
                tracing::debug!(error = %e, "keyword candidates left unconfirmed");
                return Cow::Borrowed(source);
            }
        };
        let substitution = self.keyword.apply(source, |offset| statements.contains(&offset));
        trace.keyword_substituted |= substitution.substituted();
        substitution.text
    }

    /// Relocation pass, run after a failed parse. `None` when disabled or
    /// when nothing was moved, since a retry would fail the same way.
    pub fn relocate(&self, source: &str, trace: &mut RecoveryTrace) -> Option<String> {
        if !self.relocation_enabled {
            return None;
        }
        let relocation = relocate_local_declarations(source);
        if relocation.relocated.is_empty() {
            return None;
        }
        trace.relocated.extend(relocation.relocated);
        Some(relocation.text)
    }

    /// Runs both passes unconditionally and returns the rewritten text with
    /// its trace.
    pub fn scan(&self, source: &str) -> (String, RecoveryTrace) {
        let mut trace = RecoveryTrace::default();
        let substituted = self.substitute_keywords(source, &mut trace).into_owned();
        match self.relocate(&substituted, &mut trace) {
            Some(relocated) => (relocated, trace),
            None => (substituted, trace),
        }
    }
}
