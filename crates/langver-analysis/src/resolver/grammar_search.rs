//! Grammar-validator strategy.

use super::ReleaseVerdict;
use crate::grammar::GrammarProfiles;
use crate::parsers::SyntaxTree;

/// Oldest profile that accepts `tree`, searched in ascending order.
///
/// `tree` must come from an unrestricted parse of the original text.
pub fn minimum_release(profiles: &GrammarProfiles, tree: &SyntaxTree) -> ReleaseVerdict {
    profiles
        .profiles()
        .iter()
        .find(|profile| profile.accepts(tree))
        .map_or(ReleaseVerdict::Unparseable, |profile| {
            ReleaseVerdict::Release(profile.release())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarProfile;
    use crate::parsers::{JavaParser, SyntaxParser};

    fn verdict(source: &str) -> ReleaseVerdict {
        let tree = JavaParser::default().parse_tree(source).unwrap();
        minimum_release(&GrammarProfiles::builtin().unwrap(), &tree)
    }

    #[test]
    fn test_plain_source_needs_the_baseline() {
        assert_eq!(verdict("class A { int f() { return 1; } }"), ReleaseVerdict::Release(8));
    }

    #[test]
    fn test_smallest_accepting_release() {
        assert_eq!(
            verdict("class A { void f() { var x = 1; } }"),
            ReleaseVerdict::Release(10)
        );
        assert_eq!(verdict("record P(int x) { }"), ReleaseVerdict::Release(16));
        assert_eq!(
            verdict("sealed interface S permits T { }\nfinal class T implements S { }"),
            ReleaseVerdict::Release(17)
        );
    }

    #[test]
    fn test_no_acceptor_is_unparseable() {
        let tree = JavaParser::default()
            .parse_tree("class A { void f() { var x = 1; } }")
            .unwrap();
        let strict = GrammarProfiles::new(vec![GrammarProfile::new(
            8,
            vec![crate::grammar::GrammarConstruct::LocalVariableTypeInference],
        )])
        .unwrap();
        assert_eq!(minimum_release(&strict, &tree), ReleaseVerdict::Unparseable);
    }
}
