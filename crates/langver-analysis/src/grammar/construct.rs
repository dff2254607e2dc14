//! Syntax forms that older grammars reject.

use tree_sitter::Node;

use crate::syntax::shapes::{self, VarPosition};

/// A syntax form together with the first release whose grammar accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrammarConstruct {
    ModuleDeclarations,
    PrivateInterfaceMethods,
    DiamondWithAnonymousClass,
    EffectivelyFinalResources,
    LocalVariableTypeInference,
    VarLambdaParameters,
    SwitchExpressions,
    MultipleCaseLabels,
    YieldStatements,
    TextBlocks,
    Records,
    InstanceofPatterns,
    LocalInterfaces,
    LocalEnums,
    SealedTypes,
    RecordPatterns,
    SwitchPatterns,
    CaseNull,
    UnnamedVariables,
    ModuleImports,
    FlexibleConstructorBodies,
    CompactSourceFiles,
}

impl GrammarConstruct {
    pub const ALL: &'static [GrammarConstruct] = &[
        Self::ModuleDeclarations,
        Self::PrivateInterfaceMethods,
        Self::DiamondWithAnonymousClass,
        Self::EffectivelyFinalResources,
        Self::LocalVariableTypeInference,
        Self::VarLambdaParameters,
        Self::SwitchExpressions,
        Self::MultipleCaseLabels,
        Self::YieldStatements,
        Self::TextBlocks,
        Self::Records,
        Self::InstanceofPatterns,
        Self::LocalInterfaces,
        Self::LocalEnums,
        Self::SealedTypes,
        Self::RecordPatterns,
        Self::SwitchPatterns,
        Self::CaseNull,
        Self::UnnamedVariables,
        Self::ModuleImports,
        Self::FlexibleConstructorBodies,
        Self::CompactSourceFiles,
    ];

    /// First release whose grammar accepts the construct.
    pub const fn allowed_since(self) -> i32 {
        match self {
            Self::ModuleDeclarations
            | Self::PrivateInterfaceMethods
            | Self::DiamondWithAnonymousClass
            | Self::EffectivelyFinalResources => 9,
            Self::LocalVariableTypeInference => 10,
            Self::VarLambdaParameters => 11,
            Self::SwitchExpressions | Self::MultipleCaseLabels | Self::YieldStatements => 14,
            Self::TextBlocks => 15,
            Self::Records | Self::InstanceofPatterns | Self::LocalInterfaces | Self::LocalEnums => 16,
            Self::SealedTypes => 17,
            Self::RecordPatterns | Self::SwitchPatterns | Self::CaseNull => 21,
            Self::UnnamedVariables => 22,
            Self::ModuleImports | Self::FlexibleConstructorBodies | Self::CompactSourceFiles => 25,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ModuleDeclarations => "module declaration",
            Self::PrivateInterfaceMethods => "private interface method",
            Self::DiamondWithAnonymousClass => "diamond with anonymous class",
            Self::EffectivelyFinalResources => "effectively final resource",
            Self::LocalVariableTypeInference => "'var' local variable",
            Self::VarLambdaParameters => "'var' lambda parameter",
            Self::SwitchExpressions => "switch expression",
            Self::MultipleCaseLabels => "multiple case labels",
            Self::YieldStatements => "yield statement",
            Self::TextBlocks => "text block",
            Self::Records => "record declaration",
            Self::InstanceofPatterns => "instanceof pattern",
            Self::LocalInterfaces => "local interface",
            Self::LocalEnums => "local enum",
            Self::SealedTypes => "sealed type",
            Self::RecordPatterns => "record pattern",
            Self::SwitchPatterns => "switch pattern",
            Self::CaseNull => "case null",
            Self::UnnamedVariables => "unnamed variable",
            Self::ModuleImports => "module import",
            Self::FlexibleConstructorBodies => "statement before this()/super()",
            Self::CompactSourceFiles => "top-level method or field",
        }
    }

    /// True when `node` is an occurrence of the construct.
    pub fn matches(self, node: Node<'_>, source: &[u8]) -> bool {
        match self {
            Self::ModuleDeclarations => node.kind() == "module_declaration",
            Self::PrivateInterfaceMethods => {
                shapes::is_interface_member(node) && shapes::has_modifier(node, "private")
            }
            Self::DiamondWithAnonymousClass => shapes::is_diamond_with_anonymous_body(node),
            Self::EffectivelyFinalResources => shapes::is_effectively_final_resource(node),
            Self::LocalVariableTypeInference => {
                shapes::var_position(node, source) == Some(VarPosition::Local)
            }
            Self::VarLambdaParameters => {
                shapes::var_position(node, source) == Some(VarPosition::LambdaParameter)
            }
            Self::SwitchExpressions => {
                shapes::is_switch_in_expression_position(node) || shapes::is_arrow_switch_rule(node)
            }
            Self::MultipleCaseLabels => shapes::has_multiple_labels(node),
            Self::YieldStatements => node.kind() == "yield_statement",
            Self::TextBlocks => shapes::is_text_block(node, source),
            Self::Records => node.kind() == "record_declaration",
            Self::InstanceofPatterns => shapes::is_pattern_instanceof(node),
            Self::LocalInterfaces => {
                node.kind() == "interface_declaration" && shapes::is_in_executable_code(node)
            }
            Self::LocalEnums => {
                node.kind() == "enum_declaration" && shapes::is_in_executable_code(node)
            }
            Self::SealedTypes => shapes::is_sealed_declaration(node),
            Self::RecordPatterns => node.kind() == "record_pattern",
            Self::SwitchPatterns => shapes::has_pattern_label(node) || node.kind() == "guard",
            Self::CaseNull => shapes::has_null_label(node),
            Self::UnnamedVariables => shapes::is_unnamed(node, source),
            Self::ModuleImports => {
                node.kind() == "import_declaration" && shapes::is_module_import(node)
            }
            Self::FlexibleConstructorBodies => shapes::is_late_constructor_invocation(node),
            Self::CompactSourceFiles => shapes::is_compact_source_member(node),
        }
    }
}

impl std::fmt::Display for GrammarConstruct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
