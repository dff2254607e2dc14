//! Syntax-tree feature visitor.
//!
//! One iterative walk over the tree. Imports are read up front so that bare
//! names resolve the same way wherever they appear in the file.

pub mod imports;
mod syntax;
mod usage;

pub use imports::ImportScope;

use std::ops::ControlFlow;

use langver_core::types::collections::FxHashSet;

use crate::catalog::Feature;
use crate::parsers::SyntaxTree;
use crate::rules::RuleTable;
use crate::syntax::walk_nodes;
use usage::UsageContext;

#[derive(Debug, Clone, Copy)]
pub struct FeatureVisitor<'r> {
    rules: &'r RuleTable,
}

impl<'r> FeatureVisitor<'r> {
    pub fn new(rules: &'r RuleTable) -> Self {
        Self { rules }
    }

    /// Every catalog feature the tree shows evidence of.
    pub fn visit(&self, tree: &SyntaxTree) -> FxHashSet<Feature> {
        let source = tree.source_bytes();
        let root = tree.root();
        let mut features = FxHashSet::default();
        let mut scope = ImportScope::collect(root, source, self.rules, &mut features);

        let mut syntax_features = FxHashSet::default();
        let mut usage = UsageContext {
            rules: self.rules,
            scope: &mut scope,
            out: &mut features,
        };
        // Depth was bounded when the tree was built.
        let _ = walk_nodes(root, usize::MAX, |node| {
            syntax::check(node, source, &mut syntax_features);
            usage.check(node, source);
            ControlFlow::Continue(())
        });

        features.extend(syntax_features);
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{JavaParser, SyntaxParser};

    fn detect(source: &str) -> FxHashSet<Feature> {
        let tree = JavaParser::default().parse_tree(source).unwrap();
        FeatureVisitor::new(RuleTable::builtin()).visit(&tree)
    }

    fn sorted(features: FxHashSet<Feature>) -> Vec<Feature> {
        let mut out: Vec<Feature> = features.into_iter().collect();
        out.sort();
        out
    }

    #[test]
    fn test_enhanced_for_alone() {
        let source = "class A { void f(int[] xs) { for (int x : xs) { } } }";
        assert_eq!(sorted(detect(source)), vec![Feature::ForEach]);
    }

    #[test]
    fn test_explicit_import_fires_type_rule() {
        let source = "import java.util.Optional;\nclass A { }";
        assert!(detect(source).contains(&Feature::Optional));
    }

    #[test]
    fn test_bare_name_needs_an_import() {
        let source = "class A { Optional o; }";
        assert!(detect(source).is_empty());
    }

    #[test]
    fn test_wildcard_import_resolves_bare_names() {
        let source = "import java.util.*;\nclass A { Optional o; }";
        let found = detect(source);
        assert!(found.contains(&Feature::Optional));
        assert!(!found.contains(&Feature::Scanner));
    }

    #[test]
    fn test_implicit_java_lang() {
        let source = "class A { void f() { StackWalker w = null; } }";
        assert!(detect(source).contains(&Feature::StackWalking));
    }

    #[test]
    fn test_fully_qualified_name_in_body() {
        let source = "class A { java.time.LocalDate d = java.time.LocalDate.now(); }";
        assert!(detect(source).contains(&Feature::DateTimeApi));
    }

    #[test]
    fn test_static_entry_points() {
        let source = "class A { void f() { var xs = List.of(1, 2); Thread.ofVirtual(); } }";
        let found = detect(source);
        assert!(found.contains(&Feature::CollectionFactoryMethods));
        assert!(found.contains(&Feature::VirtualThreads));
        assert!(found.contains(&Feature::Var));
    }

    #[test]
    fn test_interface_method_modifiers() {
        let source = "interface I {
    default void a() { }
    static void b() { }
    private void c() { }
}";
        let found = detect(source);
        assert!(found.contains(&Feature::DefaultInterfaceMethods));
        assert!(found.contains(&Feature::StaticInterfaceMethods));
        assert!(found.contains(&Feature::PrivateInterfaceMethods));
    }

    #[test]
    fn test_switch_statement_is_not_an_expression() {
        let statement = "class A { void f(int x) { switch (x) { case 1: break; default: break; } } }";
        assert!(!detect(statement).contains(&Feature::SwitchExpressions));

        let expression = "class A { int f(int x) { return switch (x) { case 1 -> 2; default -> 3; }; } }";
        assert!(detect(expression).contains(&Feature::SwitchExpressions));
    }

    #[test]
    fn test_diamond_and_diamond_with_anonymous_body() {
        let plain = "class A { java.util.List<String> xs = new java.util.ArrayList<>(); }";
        let found = detect(plain);
        assert!(found.contains(&Feature::DiamondOperator));
        assert!(!found.contains(&Feature::DiamondWithAnonymous));

        let anonymous = "class A { Comparable<String> c = new Comparable<>() { public int compareTo(String o) { return 0; } }; }";
        let found = detect(anonymous);
        assert!(found.contains(&Feature::DiamondWithAnonymous));
        assert!(found.contains(&Feature::InnerClasses));
    }

    #[test]
    fn test_literals_and_comments() {
        let source = "class A {
    /// Markdown docs.
    int mask = 0b1010_1010;
    String s = \"\"\"
        block
        \"\"\";
}";
        let found = detect(source);
        assert!(found.contains(&Feature::BinaryLiterals));
        assert!(found.contains(&Feature::UnderscoresInLiterals));
        assert!(found.contains(&Feature::TextBlocks));
        assert!(found.contains(&Feature::MarkdownDocComments));
    }

    #[test]
    fn test_pattern_matching() {
        let source = "class A {
    record P(int x, int y) { }
    String f(Object o) {
        if (o instanceof String s) { return s; }
        return switch (o) {
            case P(int x, int y) when x > y -> \"p\";
            case null -> \"none\";
            default -> \"other\";
        };
    }
}";
        let found = detect(source);
        assert!(found.contains(&Feature::Records));
        assert!(found.contains(&Feature::PatternMatchingInstanceof));
        assert!(found.contains(&Feature::RecordPatterns));
        assert!(found.contains(&Feature::SwitchPatternMatching));
        assert!(found.contains(&Feature::SwitchNullDefault));
    }

    #[test]
    fn test_unknown_constructs_add_nothing() {
        assert!(detect("class A { int x; void f() { x = x + 1; } }").is_empty());
    }
}
