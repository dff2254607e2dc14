//! Rule table matching properties and release resolution.

use langver_analysis::grammar::{GrammarConstruct, GrammarProfile, GrammarProfiles};
use langver_analysis::resolver::{minimum_release, required_release};
use langver_analysis::rules::RuleScope;
use langver_analysis::{Feature, JavaParser, ReleaseVerdict, RuleTable, SyntaxParser};
use langver_core::errors::GrammarProfileError;
use langver_core::types::collections::FxHashSet;

#[test]
fn test_every_type_rule_matches_its_qualified_names() {
    let table = RuleTable::builtin();
    assert!(!table.is_empty());
    for rule in table.rules() {
        let package = rule.package_name();
        match rule.scope() {
            RuleScope::Package => {
                assert!(rule.matches_direct_import(package));
                assert!(rule.matches_direct_import(&format!("{package}.Anything")));
                assert!(table.direct_import_features(package).contains(&rule.feature()));
            }
            RuleScope::Types(types) => {
                for ty in types {
                    let fqn = format!("{package}.{ty}");
                    assert!(rule.matches_direct_import(&fqn), "{fqn}");
                    assert!(rule.matches_fully_qualified_name(&fqn), "{fqn}");
                    assert!(table.direct_import_features(&fqn).contains(&rule.feature()));
                    assert!(table.fully_qualified_features(&fqn).contains(&rule.feature()));
                    assert!(rule.matches_direct_import(&format!("{fqn}.member")));
                    assert!(rule.matches_direct_import(&format!("{fqn}$Nested")));
                }
                let sibling = format!("{package}.NoSuchTypeInThisPackage");
                assert!(!rule.matches_direct_import(&sibling), "{sibling}");
            }
        }
    }
}

#[test]
fn test_simple_type_needs_exact_wildcard() {
    let table = RuleTable::builtin();
    let mut wildcards: FxHashSet<String> = FxHashSet::default();
    wildcards.insert("java".to_string());
    assert!(table.simple_type_features("Optional", &wildcards).is_empty());

    wildcards.insert("java.util".to_string());
    assert!(table
        .simple_type_features("Optional", &wildcards)
        .contains(&Feature::Optional));
}

#[test]
fn test_wildcard_import_reaches_child_packages() {
    let table = RuleTable::builtin();
    let features: Vec<Feature> = table
        .rules()
        .iter()
        .filter(|rule| rule.matches_wildcard_import("java.util"))
        .map(|rule| rule.feature())
        .collect();
    assert!(features.contains(&Feature::StreamApi));
    assert!(features.contains(&Feature::Optional));
    assert!(table.wildcard_package_features("java.util").is_empty());
}

#[test]
fn test_feature_max() {
    let features = [Feature::ForEach, Feature::Records, Feature::Assert];
    assert_eq!(required_release(&features, 1), 16);
    let none: [Feature; 0] = [];
    assert_eq!(required_release(&none, 3), 3);
}

#[test]
fn test_builtin_profiles_pass_the_self_check() {
    let profiles = GrammarProfiles::builtin().unwrap();
    let all = profiles.profiles();
    for (i, later) in all.iter().enumerate() {
        for earlier in &all[..i] {
            for construct in later.rejections() {
                assert!(
                    earlier.rejects(*construct),
                    "{construct} rejected at {} but accepted at {}",
                    later.release(),
                    earlier.release()
                );
            }
        }
    }
}

#[test]
fn test_non_monotonic_profiles_are_refused() {
    let err = GrammarProfiles::new(vec![
        GrammarProfile::new(8, vec![GrammarConstruct::Records]),
        GrammarProfile::new(9, vec![GrammarConstruct::Records, GrammarConstruct::TextBlocks]),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        GrammarProfileError::NotMonotonic {
            previous: 8,
            release: 9,
            ..
        }
    ));
    assert_eq!(GrammarProfiles::new(Vec::new()).unwrap_err(), GrammarProfileError::Empty);
}

#[test]
fn test_grammar_search_returns_smallest_acceptor() {
    let profiles = GrammarProfiles::builtin().unwrap();
    let parser = JavaParser::default();
    let cases = [
        ("class A { }", 8),
        ("module m { requires java.sql; }", 9),
        ("class A { void f() { var x = 1; } }", 10),
        ("class A { String s = \"\"\"\n  x\n  \"\"\"; }", 15),
        ("class A { void f(Object o) { if (o instanceof String s) { } } }", 16),
    ];
    for (source, expected) in cases {
        let tree = parser.parse_tree(source).unwrap();
        assert_eq!(
            minimum_release(&profiles, &tree),
            ReleaseVerdict::Release(expected),
            "{source}"
        );
    }
}

#[test]
fn test_upper_bound_profile() {
    let profiles = GrammarProfiles::builtin().unwrap();
    assert_eq!(profiles.upper_bound(25).release(), 25);
    assert_eq!(profiles.upper_bound(13).release(), 11);
    assert_eq!(profiles.upper_bound(1).release(), 8);
}
