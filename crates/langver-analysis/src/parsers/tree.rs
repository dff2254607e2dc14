//! Parsed tree plus the text it was parsed from.

use tree_sitter::{Node, Tree};

use super::error_tolerant;

/// A successfully parsed source text. Node text is only meaningful against
/// the exact source the tree came from, so both travel together.
pub struct SyntaxTree {
    tree: Tree,
    source: String,
}

impl SyntaxTree {
    pub(crate) fn new(tree: Tree, source: String) -> Self {
        Self { tree, source }
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source_bytes()).unwrap_or("")
    }

    pub fn node_count(&self) -> usize {
        self.root().descendant_count()
    }

    pub fn error_count(&self) -> u32 {
        error_tolerant::count_errors(self.root()).0
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("root", &self.root().kind())
            .field("bytes", &self.source.len())
            .finish()
    }
}
