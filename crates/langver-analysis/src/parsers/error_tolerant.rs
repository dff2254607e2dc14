//! Summaries of ERROR and MISSING nodes in a failed parse.

use std::ops::ControlFlow;

use tree_sitter::Node;

use crate::syntax::walk_nodes;

/// Count ERROR/MISSING nodes and report the 1-based line of the first one.
pub fn count_errors(root: Node<'_>) -> (u32, Option<u32>) {
    if !root.has_error() {
        return (0, None);
    }
    let mut count = 0u32;
    let mut first_line = None;
    // Iterative walk without a depth limit: this runs on trees that already failed.
    let _ = walk_nodes(root, usize::MAX, |node| {
        if node.is_error() || node.is_missing() {
            count += 1;
            first_line.get_or_insert(node.start_position().row as u32 + 1);
        }
        ControlFlow::Continue(())
    });
    (count, first_line)
}
