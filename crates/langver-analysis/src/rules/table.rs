//! Indexed rule table.

use std::sync::OnceLock;

use langver_core::types::collections::{FxHashMap, FxHashSet, SmallVec4};

use super::builtin::BUILTIN_RULES;
use super::rule::{RuleScope, TypeFeatureRule};
use crate::catalog::Feature;

/// Immutable rule table, indexed by package and by simple type name.
///
/// Built once and shared by reference; queries never mutate it, so any number
/// of threads can consult the same table.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<TypeFeatureRule>,
    by_package: FxHashMap<&'static str, SmallVec4<usize>>,
    by_type_name: FxHashMap<&'static str, SmallVec4<usize>>,
}

static BUILTIN: OnceLock<RuleTable> = OnceLock::new();

impl RuleTable {
    pub fn new(rules: Vec<TypeFeatureRule>) -> Self {
        let mut by_package: FxHashMap<&'static str, SmallVec4<usize>> = FxHashMap::default();
        let mut by_type_name: FxHashMap<&'static str, SmallVec4<usize>> = FxHashMap::default();
        for (idx, rule) in rules.iter().enumerate() {
            by_package.entry(rule.package_name()).or_default().push(idx);
            if let RuleScope::Types(types) = rule.scope() {
                for ty in types {
                    by_type_name.entry(*ty).or_default().push(idx);
                }
            }
        }
        Self {
            rules,
            by_package,
            by_type_name,
        }
    }

    /// The built-in Java rule table.
    pub fn builtin() -> &'static RuleTable {
        BUILTIN.get_or_init(|| RuleTable::new(BUILTIN_RULES.to_vec()))
    }

    pub fn rules(&self) -> &[TypeFeatureRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Features for an explicit single-type or package import.
    pub fn direct_import_features(&self, import_name: &str) -> SmallVec4<Feature> {
        self.collect_by_prefix(import_name, |rule| rule.matches_direct_import(import_name))
    }

    /// Features for a qualified name built from a member-access chain.
    pub fn fully_qualified_features(&self, fqn: &str) -> SmallVec4<Feature> {
        self.collect_by_prefix(fqn, |rule| rule.matches_fully_qualified_name(fqn))
    }

    /// Package-level features fired by the wildcard import itself: only rules
    /// for exactly that package. Type rules wait for a simple-name usage.
    pub fn wildcard_package_features(&self, package_name: &str) -> SmallVec4<Feature> {
        let mut out = SmallVec4::new();
        if let Some(indices) = self.by_package.get(package_name) {
            for &idx in indices {
                let rule = &self.rules[idx];
                if rule.is_package_level() && rule.matches_wildcard_import(package_name) {
                    push_unique(&mut out, rule.feature());
                }
            }
        }
        out
    }

    /// Features for a bare type name, given the file's wildcard imports.
    pub fn simple_type_features(
        &self,
        simple_name: &str,
        wildcard_imports: &FxHashSet<String>,
    ) -> SmallVec4<Feature> {
        let mut out = SmallVec4::new();
        if let Some(indices) = self.by_type_name.get(simple_name) {
            for &idx in indices {
                let rule = &self.rules[idx];
                if rule.matches_simple_type(simple_name, wildcard_imports) {
                    push_unique(&mut out, rule.feature());
                }
            }
        }
        out
    }

    /// Checks every rule whose package is a dotted prefix of `name`.
    fn collect_by_prefix(
        &self,
        name: &str,
        accept: impl Fn(&TypeFeatureRule) -> bool,
    ) -> SmallVec4<Feature> {
        let mut out = SmallVec4::new();
        let prefixes = name
            .match_indices('.')
            .map(|(i, _)| &name[..i])
            .chain(std::iter::once(name));
        for prefix in prefixes {
            let Some(indices) = self.by_package.get(prefix) else {
                continue;
            };
            for &idx in indices {
                let rule = &self.rules[idx];
                if accept(rule) {
                    push_unique(&mut out, rule.feature());
                }
            }
        }
        out
    }
}

fn push_unique(out: &mut SmallVec4<Feature>, feature: Feature) {
    if !out.contains(&feature) {
        out.push(feature);
    }
}
