//! A single package or type rule and its four matching modes.

use rustc_hash::FxHashSet;

use crate::catalog::Feature;

/// Which symbols under the rule's package the rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Any symbol under the package, sub-packages included.
    Package,
    /// Only the listed simple type names directly under the package.
    Types(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeFeatureRule {
    package: &'static str,
    scope: RuleScope,
    feature: Feature,
}

impl TypeFeatureRule {
    pub const fn package(package: &'static str, feature: Feature) -> Self {
        Self {
            package,
            scope: RuleScope::Package,
            feature,
        }
    }

    pub const fn types(
        package: &'static str,
        types: &'static [&'static str],
        feature: Feature,
    ) -> Self {
        Self {
            package,
            scope: RuleScope::Types(types),
            feature,
        }
    }

    pub fn package_name(&self) -> &'static str {
        self.package
    }

    pub fn scope(&self) -> RuleScope {
        self.scope
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn is_package_level(&self) -> bool {
        matches!(self.scope, RuleScope::Package)
    }

    pub fn type_names(&self) -> &'static [&'static str] {
        match self.scope {
            RuleScope::Package => &[],
            RuleScope::Types(types) => types,
        }
    }

    /// `import a.b.C;` style match.
    ///
    /// Package rules accept the package itself or anything below it. Type rules
    /// accept `pkg.Type`, a member `pkg.Type.x`, or a nested type `pkg.Type$X`.
    pub fn matches_direct_import(&self, import_name: &str) -> bool {
        let Some(rest) = import_name.strip_prefix(self.package) else {
            return false;
        };
        match self.scope {
            RuleScope::Package => rest.is_empty() || rest.starts_with('.'),
            RuleScope::Types(types) => {
                let Some(member) = rest.strip_prefix('.') else {
                    return false;
                };
                types.iter().any(|ty| match member.strip_prefix(ty) {
                    Some(tail) => tail.is_empty() || tail.starts_with(['.', '$']),
                    None => false,
                })
            }
        }
    }

    /// `import a.b.*;` style match: the imported package equals the rule's
    /// package or is one of its ancestors.
    pub fn matches_wildcard_import(&self, package_name: &str) -> bool {
        match self.package.strip_prefix(package_name) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }

    /// Bare `Type` usage. Package rules abstain; type rules need a wildcard
    /// import of exactly their package and an exact name match.
    pub fn matches_simple_type(&self, simple_name: &str, wildcard_imports: &FxHashSet<String>) -> bool {
        match self.scope {
            RuleScope::Package => false,
            RuleScope::Types(types) => {
                wildcard_imports.contains(self.package) && types.contains(&simple_name)
            }
        }
    }

    /// `a.b.C.method()` style usage, built from a member-access chain.
    pub fn matches_fully_qualified_name(&self, fqn: &str) -> bool {
        self.matches_direct_import(fqn)
    }
}
