//! Tree-sitter parsing collaborator: Java grammar, thread_local parser instances.

pub mod error_tolerant;
pub mod java;
pub mod traits;
pub mod tree;

pub use java::JavaParser;
pub use traits::SyntaxParser;
pub use tree::SyntaxTree;
