//! Node-shape predicates for tree-sitter-java trees.

use tree_sitter::Node;

/// Parents under which a `switch_expression` node is really a statement.
/// tree-sitter-java uses one node kind for both forms.
const STATEMENT_CONTAINERS: &[&str] = &[
    "program",
    "block",
    "constructor_body",
    "switch_block_statement_group",
    "labeled_statement",
    "expression_statement",
    "if_statement",
    "while_statement",
    "for_statement",
    "enhanced_for_statement",
    "do_statement",
];

/// Ancestors that put a declaration inside executable code.
const EXECUTABLE_SCOPES: &[&str] = &[
    "block",
    "constructor_body",
    "switch_block_statement_group",
    "switch_rule",
    "lambda_expression",
];

/// Ancestors that put a declaration in a type body or at top level.
const DECLARATION_SCOPES: &[&str] = &[
    "class_body",
    "interface_body",
    "enum_body",
    "enum_body_declarations",
    "annotation_type_body",
    "program",
];

pub const INTEGER_LITERALS: &[&str] = &[
    "decimal_integer_literal",
    "hex_integer_literal",
    "octal_integer_literal",
    "binary_integer_literal",
];

const PRIMITIVE_LITERALS: &[&str] = &[
    "decimal_integer_literal",
    "hex_integer_literal",
    "octal_integer_literal",
    "binary_integer_literal",
    "decimal_floating_point_literal",
    "hex_floating_point_literal",
    "character_literal",
    "true",
    "false",
];

const WRAPPER_TYPES: &[&str] = &[
    "Integer", "Long", "Short", "Byte", "Double", "Float", "Character", "Boolean",
];

/// Collection-style calls whose primitive literal arguments get boxed.
const BOXING_CALLS: &[&str] = &["asList", "of", "add", "put", "addAll", "contains"];

const PATTERN_KINDS: &[&str] = &["pattern", "type_pattern", "record_pattern"];

/// Source text of a node. Invalid UTF-8 reads as empty.
pub fn text<'s>(node: Node<'_>, source: &'s [u8]) -> &'s str {
    node.utf8_text(source).unwrap_or("")
}

fn is_comment(node: Node<'_>) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

/// Named children, comments excluded.
pub fn significant_children<'t>(node: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    (0..node.named_child_count())
        .filter_map(move |i| node.named_child(i as _))
        .filter(|child| !is_comment(*child))
}

fn has_child_kind(node: Node<'_>, kind: &str) -> bool {
    (0..node.child_count())
        .filter_map(|i| node.child(i as _))
        .any(|child| child.kind() == kind)
}

fn parent_kind<'t>(node: Node<'t>) -> Option<&'static str> {
    node.parent().map(|p| p.kind())
}

// ---- Declarations ----

pub fn modifiers(decl: Node<'_>) -> Option<Node<'_>> {
    (0..decl.child_count())
        .filter_map(|i| decl.child(i as _))
        .find(|child| child.kind() == "modifiers")
}

/// True when the declaration's modifier list contains `keyword`
/// (`static`, `sealed`, `non-sealed`, `default`, ...).
pub fn has_modifier(decl: Node<'_>, keyword: &str) -> bool {
    modifiers(decl).is_some_and(|mods| has_child_kind(mods, keyword))
}

pub fn is_top_level(decl: Node<'_>) -> bool {
    parent_kind(decl) == Some("program")
}

/// True when the declaration sits inside a method, constructor, initializer
/// or lambda body rather than directly in a type body.
pub fn is_in_executable_code(decl: Node<'_>) -> bool {
    let mut current = decl.parent();
    while let Some(node) = current {
        let kind = node.kind();
        if EXECUTABLE_SCOPES.contains(&kind) {
            return true;
        }
        if DECLARATION_SCOPES.contains(&kind) {
            return false;
        }
        current = node.parent();
    }
    false
}

pub fn is_interface_member(method: Node<'_>) -> bool {
    method.kind() == "method_declaration" && parent_kind(method) == Some("interface_body")
}

pub fn is_sealed_declaration(decl: Node<'_>) -> bool {
    matches!(decl.kind(), "class_declaration" | "interface_declaration")
        && (has_modifier(decl, "sealed")
            || has_modifier(decl, "non-sealed")
            || has_child_kind(decl, "permits"))
}

/// Method or field written directly in the compilation unit.
pub fn is_compact_source_member(node: Node<'_>) -> bool {
    matches!(node.kind(), "method_declaration" | "field_declaration") && is_top_level(node)
}

/// `this(..)` / `super(..)` preceded by another statement in the body.
pub fn is_late_constructor_invocation(node: Node<'_>) -> bool {
    if node.kind() != "explicit_constructor_invocation"
        || parent_kind(node) != Some("constructor_body")
    {
        return false;
    }
    let mut previous = node.prev_named_sibling();
    while let Some(sibling) = previous {
        if !is_comment(sibling) {
            return true;
        }
        previous = sibling.prev_named_sibling();
    }
    false
}

// ---- Imports ----

pub fn import_name<'s>(import: Node<'_>, source: &'s [u8]) -> Option<&'s str> {
    significant_children(import)
        .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"))
        .map(|child| text(child, source))
}

pub fn is_static_import(import: Node<'_>) -> bool {
    has_child_kind(import, "static")
}

pub fn is_wildcard_import(import: Node<'_>) -> bool {
    has_child_kind(import, "asterisk")
}

pub fn is_module_import(import: Node<'_>) -> bool {
    has_child_kind(import, "module")
}

// ---- Generics ----

pub fn is_diamond(type_arguments: Node<'_>) -> bool {
    type_arguments.kind() == "type_arguments" && significant_children(type_arguments).next().is_none()
}

pub fn is_non_empty_type_arguments(node: Node<'_>) -> bool {
    node.kind() == "type_arguments" && significant_children(node).next().is_some()
}

pub fn has_anonymous_body(creation: Node<'_>) -> bool {
    creation.kind() == "object_creation_expression" && has_child_kind(creation, "class_body")
}

/// `new Foo<>() { ... }`: the empty type argument list and the body belong to
/// the same creation expression.
pub fn is_diamond_with_anonymous_body(creation: Node<'_>) -> bool {
    if !has_anonymous_body(creation) {
        return false;
    }
    creation
        .child_by_field_name("type")
        .filter(|ty| ty.kind() == "generic_type")
        .and_then(|ty| significant_children(ty).find(|c| c.kind() == "type_arguments"))
        .is_some_and(is_diamond)
}

// ---- Local variable type inference ----

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarPosition {
    /// Local variable, for-loop variable or resource.
    Local,
    /// Explicitly typed lambda parameter.
    LambdaParameter,
}

/// Where a `var` type identifier is used, if `node` is one.
pub fn var_position(node: Node<'_>, source: &[u8]) -> Option<VarPosition> {
    if node.kind() != "type_identifier" || text(node, source) != "var" {
        return None;
    }
    let parent = node.parent()?;
    if parent.child_by_field_name("type") != Some(node) {
        return None;
    }
    match parent.kind() {
        "local_variable_declaration" | "enhanced_for_statement" | "resource" => {
            Some(VarPosition::Local)
        }
        "formal_parameter" => {
            let is_lambda = parent
                .parent()
                .filter(|params| params.kind() == "formal_parameters")
                .and_then(|params| params.parent())
                .is_some_and(|owner| owner.kind() == "lambda_expression");
            is_lambda.then_some(VarPosition::LambdaParameter)
        }
        _ => None,
    }
}

// ---- Statements ----

/// A resource that names an existing variable instead of declaring one.
pub fn is_effectively_final_resource(resource: Node<'_>) -> bool {
    if resource.kind() != "resource" || resource.child_by_field_name("type").is_some() {
        return false;
    }
    let mut children = significant_children(resource);
    matches!(
        (children.next().map(|c| c.kind()), children.next()),
        (Some("identifier" | "field_access"), None)
    )
}

pub fn is_multi_catch(catch_type: Node<'_>) -> bool {
    catch_type.kind() == "catch_type" && significant_children(catch_type).nth(1).is_some()
}

// ---- Switch ----

pub fn is_switch_in_expression_position(node: Node<'_>) -> bool {
    node.kind() == "switch_expression"
        && parent_kind(node).is_some_and(|parent| !STATEMENT_CONTAINERS.contains(&parent))
}

/// `case X ->` form, in statements and expressions alike.
pub fn is_arrow_switch_rule(node: Node<'_>) -> bool {
    node.kind() == "switch_rule"
}

fn label_values<'t>(label: Node<'t>) -> impl Iterator<Item = Node<'t>> {
    significant_children(label).filter(|child| {
        !PATTERN_KINDS.contains(&child.kind()) && child.kind() != "guard"
    })
}

pub fn has_multiple_labels(label: Node<'_>) -> bool {
    label.kind() == "switch_label" && label_values(label).nth(1).is_some()
}

pub fn has_string_label(label: Node<'_>) -> bool {
    label.kind() == "switch_label" && label_values(label).any(|v| v.kind() == "string_literal")
}

/// Type pattern, record pattern or guard in a case label.
pub fn has_pattern_label(label: Node<'_>) -> bool {
    label.kind() == "switch_label"
        && significant_children(label)
            .any(|child| PATTERN_KINDS.contains(&child.kind()) || child.kind() == "guard")
}

/// `case null` or `case null, default`.
pub fn has_null_label(label: Node<'_>) -> bool {
    if label.kind() != "switch_label" {
        return false;
    }
    let has_case = has_child_kind(label, "case");
    let has_null = label_values(label).any(|v| v.kind() == "null_literal");
    has_null || (has_case && has_child_kind(label, "default"))
}

// ---- Patterns ----

pub fn is_pattern_instanceof(node: Node<'_>) -> bool {
    node.kind() == "instanceof_expression"
        && (node.child_by_field_name("name").is_some()
            || node.child_by_field_name("pattern").is_some()
            || significant_children(node).any(|c| PATTERN_KINDS.contains(&c.kind())))
}

/// `_` as a variable name, or an unnamed pattern.
pub fn is_unnamed(node: Node<'_>, source: &[u8]) -> bool {
    match node.kind() {
        "underscore_pattern" => true,
        "identifier" => text(node, source) == "_",
        _ => false,
    }
}

// ---- Literals and comments ----

pub fn is_text_block(node: Node<'_>, source: &[u8]) -> bool {
    match node.kind() {
        "text_block" => true,
        "string_literal" => text(node, source).starts_with("\"\"\""),
        _ => false,
    }
}

pub fn is_binary_literal(node: Node<'_>, source: &[u8]) -> bool {
    match node.kind() {
        "binary_integer_literal" => true,
        kind if INTEGER_LITERALS.contains(&kind) => {
            let t = text(node, source);
            t.starts_with("0b") || t.starts_with("0B")
        }
        _ => false,
    }
}

pub fn has_literal_underscore(node: Node<'_>, source: &[u8]) -> bool {
    INTEGER_LITERALS.contains(&node.kind()) && text(node, source).contains('_')
}

/// `/// text` line, not a `////` separator.
pub fn is_markdown_doc_comment(node: Node<'_>, source: &[u8]) -> bool {
    node.kind() == "line_comment"
        && text(node, source)
            .strip_prefix("///")
            .is_some_and(|rest| !rest.starts_with('/'))
}

// ---- Annotations ----

pub fn is_annotation(node: Node<'_>) -> bool {
    matches!(node.kind(), "annotation" | "marker_annotation")
}

/// Annotation written on a type use rather than on a declaration.
pub fn is_type_annotation(node: Node<'_>) -> bool {
    is_annotation(node)
        && matches!(
            parent_kind(node),
            Some("annotated_type" | "type_parameter" | "scoped_type_identifier" | "dimensions")
        )
}

/// The same annotation applied twice to one element.
pub fn has_repeated_annotation(container: Node<'_>, source: &[u8]) -> bool {
    let names: Vec<&str> = significant_children(container)
        .filter(|child| is_annotation(*child))
        .filter_map(|ann| ann.child_by_field_name("name"))
        .map(|name| text(name, source))
        .collect();
    names
        .iter()
        .enumerate()
        .any(|(i, name)| names[i + 1..].contains(name))
}

// ---- Autoboxing ----

fn is_primitive_literal(node: Node<'_>) -> bool {
    PRIMITIVE_LITERALS.contains(&node.kind())
}

/// `Integer x = 5;` style declarator: wrapper type, primitive literal value.
pub fn is_boxing_declarator(declarator: Node<'_>, source: &[u8]) -> bool {
    if declarator.kind() != "variable_declarator" {
        return false;
    }
    let Some(value) = declarator.child_by_field_name("value") else {
        return false;
    };
    let wrapper_typed = declarator
        .parent()
        .and_then(|decl| decl.child_by_field_name("type"))
        .is_some_and(|ty| WRAPPER_TYPES.contains(&text(ty, source)));
    wrapper_typed && is_primitive_literal(value)
}

/// `list.add(1)` / `Arrays.asList(1, 2)` style call with a primitive literal argument.
pub fn is_boxing_call(invocation: Node<'_>, source: &[u8]) -> bool {
    if invocation.kind() != "method_invocation" {
        return false;
    }
    let named_boxing_call = invocation
        .child_by_field_name("name")
        .is_some_and(|name| BOXING_CALLS.contains(&text(name, source)));
    named_boxing_call
        && invocation
            .child_by_field_name("arguments")
            .is_some_and(|args| significant_children(args).any(is_primitive_literal))
}

// ---- Qualified names ----

/// Dotted name of a member-access chain made only of identifiers
/// (`java.util.List`), or `None` for anything else (`this.x`, `f().g`).
pub fn member_chain(node: Node<'_>, source: &[u8]) -> Option<String> {
    match node.kind() {
        "identifier" | "type_identifier" => Some(text(node, source).to_string()),
        "field_access" => {
            let object = node.child_by_field_name("object")?;
            let field = node.child_by_field_name("field")?;
            let mut chain = member_chain(object, source)?;
            chain.push('.');
            chain.push_str(text(field, source));
            Some(chain)
        }
        "scoped_identifier" | "scoped_type_identifier" => {
            let mut parts = significant_children(node).filter(|c| !is_annotation(*c));
            let scope = parts.next()?;
            let name = parts.last()?;
            let mut chain = member_chain(scope, source)?;
            chain.push('.');
            chain.push_str(text(name, source));
            Some(chain)
        }
        "generic_type" => {
            let base = significant_children(node).next()?;
            member_chain(base, source)
        }
        _ => None,
    }
}

/// `java.util.List` style: dotted and starting with a lowercase package segment.
pub fn looks_like_fqn(name: &str) -> bool {
    name.contains('.') && name.starts_with(|c: char| c.is_ascii_lowercase())
}

pub fn starts_uppercase(name: &str) -> bool {
    name.starts_with(|c: char| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::walk_nodes;
    use std::ops::ControlFlow;

    fn parse(source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    /// Runs `pred` on every node and reports whether any node satisfies it.
    fn any_node(source: &str, pred: impl Fn(Node<'_>, &[u8]) -> bool) -> bool {
        let tree = parse(source);
        let bytes = source.as_bytes();
        let mut found = false;
        walk_nodes(tree.root_node(), usize::MAX, |node| {
            if pred(node, bytes) {
                found = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .unwrap();
        found
    }

    #[test]
    fn test_switch_statement_is_not_an_expression() {
        let stmt = "class A { void f(int x) { switch (x) { case 1: break; } } }";
        assert!(!any_node(stmt, |n, _| is_switch_in_expression_position(n)));

        let expr = "class A { int f(int x) { return switch (x) { case 1 -> 2; default -> 3; }; } }";
        assert!(any_node(expr, |n, _| is_switch_in_expression_position(n)));
        assert!(any_node(expr, |n, _| is_arrow_switch_rule(n)));
    }

    #[test]
    fn test_local_and_member_declarations() {
        let src = "class A { enum M { X } void f() { enum L { Y } } }";
        let tree = parse(src);
        let mut local = Vec::new();
        walk_nodes(tree.root_node(), usize::MAX, |n| {
            if n.kind() == "enum_declaration" {
                local.push(is_in_executable_code(n));
            }
            ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(local, vec![false, true]);
    }

    #[test]
    fn test_diamond_shapes() {
        let plain = "class A { Object o = new java.util.ArrayList<>(); }";
        assert!(any_node(plain, |n, _| is_diamond(n)));
        assert!(!any_node(plain, |n, _| is_diamond_with_anonymous_body(n)));

        let anon = "class A { Object o = new Comparable<>() { public int compareTo(Object x) { return 0; } }; }";
        assert!(any_node(anon, |n, _| is_diamond_with_anonymous_body(n)));
    }

    #[test]
    fn test_var_positions() {
        let local = "class A { void f() { var x = 1; } }";
        assert!(any_node(local, |n, s| var_position(n, s) == Some(VarPosition::Local)));

        let lambda = "class A { void f() { java.util.function.BiFunction<Integer, Integer, Integer> g = (var a, var b) -> a + b; } }";
        assert!(any_node(lambda, |n, s| var_position(n, s) == Some(VarPosition::LambdaParameter)));
    }

    #[test]
    fn test_member_chains() {
        let src = "class A { void f() { java.util.List.of(1); this.x.y(); } }";
        let tree = parse(src);
        let bytes = src.as_bytes();
        let mut chains = Vec::new();
        walk_nodes(tree.root_node(), usize::MAX, |n| {
            if n.kind() == "method_invocation" {
                let object = n.child_by_field_name("object").unwrap();
                chains.push(member_chain(object, bytes));
            }
            ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(chains, vec![Some("java.util.List".to_string()), None]);
    }

    #[test]
    fn test_fqn_heuristic() {
        assert!(looks_like_fqn("java.util.List"));
        assert!(!looks_like_fqn("Map.Entry"));
        assert!(!looks_like_fqn("list"));
    }

    #[test]
    fn test_literals() {
        let src = "class A { int a = 0b1010; long b = 1_000_000L; int c = 10; }";
        assert!(any_node(src, is_binary_literal));
        assert!(any_node(src, has_literal_underscore));
        let plain = "class A { int c = 0x10; }";
        assert!(!any_node(plain, is_binary_literal));
        assert!(!any_node(plain, has_literal_underscore));
    }

    #[test]
    fn test_markdown_doc_comments() {
        assert!(any_node("class A {\n  /// Sum of parts.\n  int x;\n}", is_markdown_doc_comment));
        assert!(any_node("class A {\n  ///\n  int x;\n}", is_markdown_doc_comment));
        for src in [
            "class A {\n  //// section ////\n  int x;\n}",
            "class A {\n  ////////////\n  int x;\n}",
            "class A {\n  // plain\n  int x;\n}",
            "class A {\n  /** javadoc */\n  int x;\n}",
        ] {
            assert!(!any_node(src, is_markdown_doc_comment), "{src}");
        }
    }

    #[test]
    fn test_repeated_annotations() {
        let src = "class A { @Tag(\"a\") @Tag(\"b\") void f() {} }";
        assert!(any_node(src, |n, s| n.kind() == "modifiers" && has_repeated_annotation(n, s)));
        let single = "class A { @Tag(\"a\") @Other void f() {} }";
        assert!(!any_node(single, |n, s| n.kind() == "modifiers" && has_repeated_annotation(n, s)));
    }
}
