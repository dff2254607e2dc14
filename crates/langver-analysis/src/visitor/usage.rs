//! Usage-driven checks: names in the body resolved against the rule table.

use langver_core::types::collections::FxHashSet;
use tree_sitter::Node;

use super::imports::ImportScope;
use crate::catalog::Feature;
use crate::rules::{entry_point_feature, RuleTable};
use crate::syntax::shapes;

/// Parents whose dotted names are not type references.
const NAME_DECLARATIONS: &[&str] = &[
    "import_declaration",
    "package_declaration",
    "module_declaration",
    "requires_module_directive",
    "exports_module_directive",
    "opens_module_directive",
];

pub(crate) struct UsageContext<'a> {
    pub rules: &'a RuleTable,
    pub scope: &'a mut ImportScope,
    pub out: &'a mut FxHashSet<Feature>,
}

impl UsageContext<'_> {
    pub(crate) fn check(&mut self, node: Node<'_>, source: &[u8]) {
        let parent_kind = node.parent().map(|p| p.kind());
        match node.kind() {
            "scoped_type_identifier" | "scoped_identifier" | "field_access" => {
                // Only the outermost link of a chain is resolved.
                if parent_kind == Some(node.kind())
                    || parent_kind.is_some_and(|k| NAME_DECLARATIONS.contains(&k))
                {
                    return;
                }
                if let Some(chain) = shapes::member_chain(node, source) {
                    self.resolve_chain(&chain);
                }
            }
            "type_identifier" => {
                if parent_kind == Some("scoped_type_identifier") {
                    return;
                }
                let name = shapes::text(node, source);
                if name != "var" {
                    self.resolve_simple(name);
                }
            }
            "method_invocation" => self.check_invocation(node, source),
            "method_reference" => {
                let receiver = shapes::significant_children(node)
                    .next()
                    .and_then(|target| shapes::member_chain(target, source));
                if let Some(receiver) = receiver {
                    self.resolve_chain(&receiver);
                }
            }
            _ => {}
        }
    }

    fn check_invocation(&mut self, invocation: Node<'_>, source: &[u8]) {
        let Some(object) = invocation.child_by_field_name("object") else {
            return;
        };
        let Some(receiver) = shapes::member_chain(object, source) else {
            return;
        };
        if let Some(method) = invocation.child_by_field_name("name") {
            if let Some(feature) = entry_point_feature(&receiver, shapes::text(method, source)) {
                self.out.insert(feature);
            }
        }
        // Chains are resolved when the walk reaches the field access itself.
        if object.kind() == "identifier" {
            self.resolve_chain(&receiver);
        }
    }

    /// Qualified names go through the FQN rules. A chain starting with a
    /// type name (`Map.Entry`, `Files.lines`) resolves its head as a bare type.
    fn resolve_chain(&mut self, chain: &str) {
        if shapes::looks_like_fqn(chain) {
            if self.scope.first_sighting(chain) {
                self.out.extend(self.rules.fully_qualified_features(chain));
            }
            return;
        }
        let head = chain.split('.').next().unwrap_or(chain);
        if shapes::starts_uppercase(head) {
            self.resolve_simple(head);
        }
    }

    fn resolve_simple(&mut self, name: &str) {
        if self.scope.first_sighting(name) && !self.scope.imports_simple_name(name) {
            self.out.extend(
                self.rules
                    .simple_type_features(name, self.scope.wildcard_imports()),
            );
        }
    }
}
