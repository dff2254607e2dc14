//! Shape-driven feature checks: each node is judged on its own structure.

use langver_core::types::collections::FxHashSet;
use tree_sitter::Node;

use crate::catalog::Feature;
use crate::syntax::shapes::{self, VarPosition};

pub(crate) fn check(node: Node<'_>, source: &[u8], out: &mut FxHashSet<Feature>) {
    match node.kind() {
        "class_declaration" | "interface_declaration" => {
            if !shapes::is_top_level(node) {
                out.insert(Feature::InnerClasses);
            }
            if shapes::is_sealed_declaration(node) {
                out.insert(Feature::SealedClasses);
            }
            if node.kind() == "interface_declaration" && shapes::is_in_executable_code(node) {
                out.insert(Feature::LocalInterfaces);
            }
        }
        "enum_declaration" => {
            out.insert(Feature::Enums);
            if shapes::is_in_executable_code(node) {
                out.insert(Feature::LocalEnums);
            }
        }
        "record_declaration" => {
            out.insert(Feature::Records);
            if shapes::is_in_executable_code(node) {
                out.insert(Feature::LocalRecords);
            }
        }
        "annotation_type_declaration" => {
            out.insert(Feature::Annotations);
        }
        "module_declaration" => {
            out.insert(Feature::Modules);
        }
        "object_creation_expression" => {
            if shapes::has_anonymous_body(node) {
                out.insert(Feature::InnerClasses);
            }
            if shapes::is_diamond_with_anonymous_body(node) {
                out.insert(Feature::DiamondWithAnonymous);
            }
        }
        "modifiers" => check_modifiers(node, source, out),
        "method_declaration" => {
            if shapes::is_interface_member(node) {
                if shapes::has_modifier(node, "default") {
                    out.insert(Feature::DefaultInterfaceMethods);
                }
                if shapes::has_modifier(node, "static") {
                    out.insert(Feature::StaticInterfaceMethods);
                }
                if shapes::has_modifier(node, "private") {
                    out.insert(Feature::PrivateInterfaceMethods);
                }
            }
            if shapes::is_compact_source_member(node) {
                out.insert(Feature::CompactSourceFiles);
            }
        }
        "field_declaration" => {
            if shapes::is_compact_source_member(node) {
                out.insert(Feature::CompactSourceFiles);
            }
        }
        "explicit_constructor_invocation" => {
            if shapes::is_late_constructor_invocation(node) {
                out.insert(Feature::FlexibleConstructorBodies);
            }
        }
        "import_declaration" => {
            if shapes::is_static_import(node) {
                out.insert(Feature::StaticImport);
            }
            if shapes::is_module_import(node) {
                out.insert(Feature::ModuleImports);
            }
        }
        "class_literal" => {
            out.insert(Feature::Reflection);
        }
        "assert_statement" => {
            out.insert(Feature::Assert);
        }
        "type_parameters" => {
            out.insert(Feature::Generics);
        }
        "type_arguments" => {
            if shapes::is_diamond(node) {
                out.insert(Feature::DiamondOperator);
            } else {
                out.insert(Feature::Generics);
            }
        }
        "marker_annotation" | "annotation" => {
            out.insert(Feature::Annotations);
            if shapes::is_type_annotation(node) {
                out.insert(Feature::TypeAnnotations);
            }
        }
        "spread_parameter" => {
            out.insert(Feature::Varargs);
        }
        "enhanced_for_statement" => {
            out.insert(Feature::ForEach);
        }
        "variable_declarator" => {
            if shapes::is_boxing_declarator(node, source) {
                out.insert(Feature::Autoboxing);
            }
        }
        "method_invocation" => {
            if shapes::is_boxing_call(node, source) {
                out.insert(Feature::Autoboxing);
            }
        }
        "try_with_resources_statement" => {
            out.insert(Feature::TryWithResources);
        }
        "resource" => {
            if shapes::is_effectively_final_resource(node) {
                out.insert(Feature::TryWithEffectivelyFinal);
            }
        }
        "catch_type" => {
            if shapes::is_multi_catch(node) {
                out.insert(Feature::MultiCatch);
            }
        }
        "lambda_expression" => {
            out.insert(Feature::Lambdas);
        }
        "method_reference" => {
            out.insert(Feature::MethodReferences);
        }
        "type_identifier" => match shapes::var_position(node, source) {
            Some(VarPosition::Local) => {
                out.insert(Feature::Var);
            }
            Some(VarPosition::LambdaParameter) => {
                out.insert(Feature::VarInLambda);
            }
            None => {}
        },
        "switch_expression" => {
            if shapes::is_switch_in_expression_position(node) {
                out.insert(Feature::SwitchExpressions);
            }
        }
        "switch_rule" => {
            out.insert(Feature::SwitchExpressions);
        }
        "switch_label" => check_switch_label(node, out),
        "guard" => {
            out.insert(Feature::SwitchPatternMatching);
        }
        "yield_statement" => {
            out.insert(Feature::Yield);
        }
        "instanceof_expression" => {
            if shapes::is_pattern_instanceof(node) {
                out.insert(Feature::PatternMatchingInstanceof);
            }
        }
        "record_pattern" => {
            out.insert(Feature::RecordPatterns);
        }
        "line_comment" => {
            if shapes::is_markdown_doc_comment(node, source) {
                out.insert(Feature::MarkdownDocComments);
            }
        }
        kind => {
            if shapes::is_text_block(node, source) {
                out.insert(Feature::TextBlocks);
            }
            if shapes::is_unnamed(node, source) {
                out.insert(Feature::UnnamedVariables);
            }
            if shapes::INTEGER_LITERALS.contains(&kind) {
                if shapes::is_binary_literal(node, source) {
                    out.insert(Feature::BinaryLiterals);
                }
                if shapes::has_literal_underscore(node, source) {
                    out.insert(Feature::UnderscoresInLiterals);
                }
            }
        }
    }
}

fn check_modifiers(modifiers: Node<'_>, source: &[u8], out: &mut FxHashSet<Feature>) {
    for child in (0..modifiers.child_count()).filter_map(|i| modifiers.child(i as _)) {
        match child.kind() {
            "strictfp" => {
                out.insert(Feature::Strictfp);
            }
            "sealed" | "non-sealed" => {
                out.insert(Feature::SealedClasses);
            }
            _ => {}
        }
    }
    if shapes::has_repeated_annotation(modifiers, source) {
        out.insert(Feature::RepeatingAnnotations);
    }
}

fn check_switch_label(label: Node<'_>, out: &mut FxHashSet<Feature>) {
    if shapes::has_string_label(label) {
        out.insert(Feature::StringsInSwitch);
    }
    if shapes::has_multiple_labels(label) {
        out.insert(Feature::SwitchMultipleLabels);
    }
    if shapes::has_pattern_label(label) {
        out.insert(Feature::SwitchPatternMatching);
    }
    if shapes::has_null_label(label) {
        out.insert(Feature::SwitchNullDefault);
    }
}
