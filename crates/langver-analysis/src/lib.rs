//! langver-analysis: minimum Java release detection
//!
//! - Catalog: named language and library features with their releases
//! - Rules: package/type rule table and static entry points
//! - Syntax: iterative tree walk and node-shape predicates
//! - Grammar: per-release rejection profiles with a monotonicity check
//! - Parsers: tree-sitter-java behind the `SyntaxParser` trait
//! - Recovery: keyword substitution and local declaration relocation
//! - Visitor: single-pass feature detection over a parsed tree
//! - Resolver: feature-maximum and grammar-search release resolution
//! - Engine: per-file pipeline, result record, parallel batch driver

pub mod catalog;
pub mod engine;
pub mod grammar;
pub mod parsers;
pub mod recovery;
pub mod resolver;
pub mod rules;
pub mod syntax;
pub mod visitor;

// Re-exports for convenience
pub use catalog::{Feature, FeatureCategory};
pub use engine::{BatchReport, DetectionPipeline, DetectionResult, FileFailure, FileReport};
pub use grammar::{GrammarConstruct, GrammarProfile, GrammarProfiles};
pub use parsers::{JavaParser, SyntaxParser, SyntaxTree};
pub use recovery::{RecoveryScanner, RecoveryTrace};
pub use resolver::ReleaseVerdict;
pub use rules::{RuleTable, TypeFeatureRule};
pub use visitor::FeatureVisitor;
