//! Java parser over tree-sitter-java.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::time::Instant;

use langver_core::constants::DEFAULT_MAX_TREE_DEPTH;
use langver_core::errors::ParseError;
use tree_sitter::Parser;

use super::error_tolerant;
use super::traits::SyntaxParser;
use super::tree::SyntaxTree;
use crate::syntax::walk_nodes;

thread_local! {
    /// One tree-sitter parser per worker thread; `Parser` is not `Sync`.
    static PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Stateless handle; the actual parser lives in thread-local storage, so one
/// `JavaParser` can be shared by every rayon worker.
#[derive(Debug, Clone)]
pub struct JavaParser {
    max_tree_depth: usize,
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TREE_DEPTH)
    }
}

impl JavaParser {
    pub fn new(max_tree_depth: usize) -> Self {
        Self { max_tree_depth }
    }

    pub fn max_tree_depth(&self) -> usize {
        self.max_tree_depth
    }

    fn with_parser<T>(f: impl FnOnce(&mut Parser) -> T) -> Result<T, ParseError> {
        PARSER.with(|cell| {
            let mut slot = cell.borrow_mut();
            if slot.is_none() {
                let mut parser = Parser::new();
                parser
                    .set_language(&tree_sitter_java::LANGUAGE.into())
                    .map_err(|e| ParseError::LanguageInit {
                        message: e.to_string(),
                    })?;
                *slot = Some(parser);
            }
            match slot.as_mut() {
                Some(parser) => Ok(f(parser)),
                None => Err(ParseError::LanguageInit {
                    message: "parser slot empty after initialization".to_string(),
                }),
            }
        })
    }
}

impl SyntaxParser for JavaParser {
    fn parse_tree(&self, source: &str) -> Result<SyntaxTree, ParseError> {
        let start = Instant::now();
        let tree = Self::with_parser(|parser| {
            let tree = parser.parse(source, None);
            if tree.is_none() {
                parser.reset();
            }
            tree
        })?
        .ok_or(ParseError::NoTree)?;

        let root = tree.root_node();
        if root.has_error() {
            let (error_count, first_line) = error_tolerant::count_errors(root);
            return Err(ParseError::Syntax {
                error_count,
                first_line: first_line.unwrap_or(1),
            });
        }

        walk_nodes(root, self.max_tree_depth, |_| ControlFlow::Continue(()))
            .map_err(|e| ParseError::TooDeep { limit: e.limit })?;

        tracing::trace!(
            parse_time_us = start.elapsed().as_micros() as u64,
            bytes = source.len(),
            "parsed java source"
        );
        Ok(SyntaxTree::new(tree, source.to_owned()))
    }
}
