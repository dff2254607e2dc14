//! Property tests for the grammar profile ordering and result invariant.

use langver_analysis::grammar::{GrammarConstruct, GrammarProfiles};
use langver_analysis::{DetectionResult, Feature, JavaParser, SyntaxParser};
use langver_core::types::collections::FxHashSet;
use proptest::prelude::*;

/// Statements that each exercise one or more grammar constructs.
const SNIPPETS: &[&str] = &[
    "int a = 1;",
    "var b = 2;",
    "for (int c : new int[0]) { }",
    "Object d = switch (1) { case 1, 2 -> 3; default -> 4; };",
    "String e = \"\"\"\n  text\n  \"\"\";",
    "record R(int x) { }",
    "enum E { A }",
    "interface I { }",
    "if (this instanceof Object o) { }",
    "java.util.function.Function<Integer, Integer> f = (var x) -> x;",
    "Runnable g = () -> { };",
];

fn snippet_body() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SNIPPETS), 0..5).prop_map(|parts| parts.join("\n"))
}

proptest! {
    /// A construct rejected at some profile is rejected by every older one,
    /// and acceptance never flips back to rejection in newer profiles.
    #[test]
    fn test_prop_rejection_is_monotonic(body in snippet_body()) {
        let source = format!("class A {{ void f() {{\n{body}\n}} }}");
        let tree = JavaParser::default().parse_tree(&source).unwrap();
        let profiles = GrammarProfiles::builtin().unwrap();
        let verdicts: Vec<bool> = profiles.profiles().iter().map(|p| p.accepts(&tree)).collect();
        for pair in verdicts.windows(2) {
            prop_assert!(!pair[0] || pair[1]);
        }
        prop_assert!(verdicts.last().copied().unwrap_or(false));
    }

    /// The result constructor accepts exactly the feature-maximum release.
    #[test]
    fn test_prop_result_invariant(
        indices in prop::collection::vec(0..Feature::ALL.len(), 0..8),
        floor in 1i32..10,
        offset in 1i32..5,
    ) {
        let features: FxHashSet<Feature> = indices.iter().map(|i| Feature::ALL[*i]).collect();
        let expected = features.iter().map(|f| f.introduced_in()).max().unwrap_or(floor);

        let result = DetectionResult::new("P.java", features.clone(), expected, floor);
        prop_assert!(result.is_ok());
        prop_assert!(DetectionResult::new("P.java", features.clone(), expected + offset, floor).is_err());
        prop_assert!(DetectionResult::new("P.java", features, expected - offset, floor).is_err());
    }
}

#[test]
fn test_every_construct_is_rejected_by_the_baseline() {
    let profiles = GrammarProfiles::builtin().unwrap();
    let baseline = &profiles.profiles()[0];
    for construct in GrammarConstruct::ALL {
        assert!(baseline.rejects(*construct), "{construct}");
    }
}
