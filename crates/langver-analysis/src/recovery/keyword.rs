//! `yield` statement substitution.
//!
//! `yield <expr>;` becomes `return <expr>;`. The rewritten statement needs
//! strictly less context to be valid, and the pass records that it fired so
//! the YIELD feature survives the rewrite.
//!
//! The text pattern only proposes candidates. A candidate is rewritten when
//! the full grammar parses a `yield_statement` starting at that offset, so
//! a variable named `yield` is never mistaken for the statement.

use std::borrow::Cow;
use std::ops::ControlFlow;

use langver_core::errors::RecoveryError;
use langver_core::types::collections::{FxHashSet, SmallVec4};
use regex::Regex;

use super::lexer::{in_spans, opaque_spans};
use crate::parsers::SyntaxTree;
use crate::syntax::walk_nodes;

/// `yield` at statement start (after `;`, a brace, a case colon, or a line
/// start), followed by whitespace and something that is not an assignment
/// or member access. A switch rule body after `->` is an expression, block
/// or throw, never a bare `yield`.
const YIELD_STATEMENT: &str =
    r"(?m)(?P<lead>^|[;{}:])(?P<ws>\s*)yield(?P<gap>\s+)(?P<next>[^\s=.])";

const REPLACEMENT: &str = "return";

/// Result of one substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution<'a> {
    pub text: Cow<'a, str>,
    pub count: usize,
    /// Byte offsets of the rewritten keywords in the input text.
    pub offsets: SmallVec4<usize>,
}

impl Substitution<'_> {
    pub fn substituted(&self) -> bool {
        self.count > 0
    }
}

#[derive(Debug, Clone)]
pub struct KeywordSubstitution {
    pattern: Regex,
}

impl KeywordSubstitution {
    pub fn new() -> Result<Self, RecoveryError> {
        let pattern = Regex::new(YIELD_STATEMENT).map_err(|e| RecoveryError::InvalidPattern {
            pattern: YIELD_STATEMENT.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Offsets of every `yield` the text pattern proposes, outside literals
    /// and comments.
    pub fn candidates(&self, source: &str) -> SmallVec4<usize> {
        let mut out = SmallVec4::new();
        if !source.contains("yield") {
            return out;
        }
        let opaque = opaque_spans(source);
        let bytes = source.as_bytes();
        for caps in self.pattern.captures_iter(source) {
            let (Some(ws), Some(next)) = (caps.name("ws"), caps.name("next")) else {
                continue;
            };
            let keyword_start = ws.end();
            if in_spans(&opaque, keyword_start) {
                continue;
            }
            // `yield += 1` is a compound assignment to a variable named yield.
            let next_byte = bytes[next.start()];
            if b"+-*/%&|^".contains(&next_byte) && bytes.get(next.start() + 1) == Some(&b'=') {
                continue;
            }
            out.push(keyword_start);
        }
        out
    }

    /// Rewrites the candidates `keep` accepts.
    pub fn apply<'a>(&self, source: &'a str, keep: impl Fn(usize) -> bool) -> Substitution<'a> {
        let offsets: SmallVec4<usize> = self
            .candidates(source)
            .into_iter()
            .filter(|offset| keep(*offset))
            .collect();
        if offsets.is_empty() {
            return Substitution {
                text: Cow::Borrowed(source),
                count: 0,
                offsets,
            };
        }

        let mut out = String::with_capacity(source.len() + offsets.len());
        let mut copied = 0usize;
        for &keyword_start in &offsets {
            out.push_str(&source[copied..keyword_start]);
            out.push_str(REPLACEMENT);
            copied = keyword_start + "yield".len();
        }
        out.push_str(&source[copied..]);
        Substitution {
            text: Cow::Owned(out),
            count: offsets.len(),
            offsets,
        }
    }
}

/// Start offsets of the `yield_statement` nodes in `tree`.
pub fn yield_statement_starts(tree: &SyntaxTree) -> FxHashSet<usize> {
    let mut starts = FxHashSet::default();
    // Depth was bounded when the tree was built.
    let _ = walk_nodes(tree.root(), usize::MAX, |node| {
        if node.kind() == "yield_statement" {
            starts.insert(node.start_byte());
        }
        ControlFlow::Continue(())
    });
    starts
}
