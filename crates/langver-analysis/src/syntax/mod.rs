//! Structural helpers over tree-sitter-java nodes.
//!
//! The feature visitor and the grammar profiles both ask the same questions
//! of the tree ("is this switch an expression?", "is this enum local?"), so
//! the answers live here once.

pub mod shapes;
pub mod walk;

pub use walk::{walk_nodes, DepthExceeded};
