//! Per-file import scope.

use langver_core::constants::IMPLICIT_PACKAGE;
use langver_core::types::collections::FxHashSet;
use tree_sitter::Node;

use crate::catalog::Feature;
use crate::rules::RuleTable;
use crate::syntax::shapes;

/// Imports of one compilation unit plus the names already resolved against
/// the rule table. Dropped when the walk ends.
#[derive(Debug)]
pub struct ImportScope {
    explicit: FxHashSet<String>,
    wildcard: FxHashSet<String>,
    resolved: FxHashSet<String>,
}

impl Default for ImportScope {
    fn default() -> Self {
        let mut wildcard = FxHashSet::default();
        wildcard.insert(IMPLICIT_PACKAGE.to_string());
        Self {
            explicit: FxHashSet::default(),
            wildcard,
            resolved: FxHashSet::default(),
        }
    }
}

impl ImportScope {
    /// Reads the import declarations among `program`'s children and records
    /// the features they fire on their own.
    pub fn collect(
        program: Node<'_>,
        source: &[u8],
        rules: &RuleTable,
        features: &mut FxHashSet<Feature>,
    ) -> Self {
        let mut scope = Self::default();
        for import in shapes::significant_children(program).filter(|n| n.kind() == "import_declaration") {
            if shapes::is_module_import(import) {
                continue;
            }
            let Some(name) = shapes::import_name(import, source) else {
                continue;
            };
            // `import static a.b.C.*` names the type C, like a direct import.
            if shapes::is_wildcard_import(import) && !shapes::is_static_import(import) {
                features.extend(rules.wildcard_package_features(name));
                scope.wildcard.insert(name.to_string());
            } else {
                features.extend(rules.direct_import_features(name));
                scope.explicit.insert(name.to_string());
            }
        }
        scope
    }

    /// True when a single-type import declares `simple_name`, which shadows
    /// every on-demand import of the same name.
    pub fn imports_simple_name(&self, simple_name: &str) -> bool {
        self.explicit
            .iter()
            .any(|name| name.rsplit('.').next() == Some(simple_name))
    }

    pub fn wildcard_imports(&self) -> &FxHashSet<String> {
        &self.wildcard
    }

    /// True the first time `name` is seen in this file.
    pub fn first_sighting(&mut self, name: &str) -> bool {
        if self.resolved.contains(name) {
            return false;
        }
        self.resolved.insert(name.to_string())
    }
}
