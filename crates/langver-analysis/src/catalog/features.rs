//! The built-in Java feature catalog, releases 1 through 25.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::define_features;

/// How a feature is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    /// Recognized from the shape of the syntax tree.
    Syntax,
    /// Recognized from imports and qualified names of API surface.
    Library,
}

define_features! {
    // 1.0 / 1.1
    Awt => ("AWT", 1, Library, "Abstract Window Toolkit (java.awt)"),
    Applet => ("APPLET", 1, Library, "Applets (java.applet)"),
    IoApi => ("IO_API", 1, Library, "Stream I/O (java.io)"),
    InnerClasses => ("INNER_CLASSES", 1, Syntax, "Nested, inner and anonymous classes"),
    Reflection => ("REFLECTION", 1, Syntax, "Class literals"),
    Jdbc => ("JDBC", 1, Library, "JDBC (java.sql)"),
    Rmi => ("RMI", 1, Library, "Remote Method Invocation (java.rmi)"),
    JavaBeans => ("JAVABEANS", 1, Library, "JavaBeans (java.beans)"),
    Serialization => ("SERIALIZATION", 1, Library, "Object serialization"),
    // 1.2
    Strictfp => ("STRICTFP", 2, Syntax, "strictfp modifier"),
    Swing => ("SWING", 2, Library, "Swing (javax.swing)"),
    CollectionsFramework => ("COLLECTIONS_FRAMEWORK", 2, Library, "Collections framework"),
    Corba => ("CORBA", 2, Library, "CORBA (org.omg)"),
    // 1.3
    Jndi => ("JNDI", 3, Library, "JNDI (javax.naming)"),
    JavaSound => ("JAVA_SOUND", 3, Library, "Java Sound (javax.sound)"),
    Jpda => ("JPDA", 3, Library, "Debugger architecture (com.sun.jdi)"),
    // 1.4
    Assert => ("ASSERT", 4, Syntax, "assert statement"),
    Regex => ("REGEX", 4, Library, "Regular expressions (java.util.regex)"),
    Nio => ("NIO", 4, Library, "New I/O (java.nio)"),
    Logging => ("LOGGING", 4, Library, "Logging (java.util.logging)"),
    XmlApi => ("XML_API", 4, Library, "XML processing (javax.xml)"),
    Preferences => ("PREFERENCES", 4, Library, "Preferences (java.util.prefs)"),
    ImageIo => ("IMAGE_IO", 4, Library, "Image I/O (javax.imageio)"),
    // 5
    Generics => ("GENERICS", 5, Syntax, "Generic types and methods"),
    Enums => ("ENUMS", 5, Syntax, "Enum declarations"),
    Annotations => ("ANNOTATIONS", 5, Syntax, "Annotations"),
    Varargs => ("VARARGS", 5, Syntax, "Variable-arity parameters"),
    ForEach => ("FOR_EACH", 5, Syntax, "Enhanced for loop"),
    StaticImport => ("STATIC_IMPORT", 5, Syntax, "Static imports"),
    Autoboxing => ("AUTOBOXING", 5, Syntax, "Autoboxing of primitive values"),
    ConcurrentApi => ("CONCURRENT_API", 5, Library, "Concurrency utilities (java.util.concurrent)"),
    Scanner => ("SCANNER", 5, Library, "java.util.Scanner"),
    // 6
    ScriptingApi => ("SCRIPTING_API", 6, Library, "Scripting (javax.script)"),
    CompilerApi => ("COMPILER_API", 6, Library, "Compiler API (javax.tools)"),
    Jaxb => ("JAXB", 6, Library, "JAXB (javax.xml.bind)"),
    JaxWs => ("JAX_WS", 6, Library, "JAX-WS (javax.xml.ws)"),
    Stax => ("STAX", 6, Library, "StAX (javax.xml.stream)"),
    SwingWorker => ("SWING_WORKER", 6, Library, "javax.swing.SwingWorker"),
    // 7
    DiamondOperator => ("DIAMOND_OPERATOR", 7, Syntax, "Diamond operator"),
    TryWithResources => ("TRY_WITH_RESOURCES", 7, Syntax, "try-with-resources"),
    MultiCatch => ("MULTI_CATCH", 7, Syntax, "Multi-catch"),
    BinaryLiterals => ("BINARY_LITERALS", 7, Syntax, "Binary integer literals"),
    UnderscoresInLiterals => ("UNDERSCORES_IN_LITERALS", 7, Syntax, "Underscores in numeric literals"),
    StringsInSwitch => ("STRINGS_IN_SWITCH", 7, Syntax, "Strings in switch"),
    ForkJoin => ("FORK_JOIN", 7, Library, "Fork/join framework"),
    Nio2 => ("NIO2", 7, Library, "NIO.2 file system API (java.nio.file)"),
    WatchService => ("WATCH_SERVICE", 7, Library, "java.nio.file.WatchService"),
    // 8
    Lambdas => ("LAMBDAS", 8, Syntax, "Lambda expressions"),
    MethodReferences => ("METHOD_REFERENCES", 8, Syntax, "Method references"),
    DefaultInterfaceMethods => ("DEFAULT_INTERFACE_METHODS", 8, Syntax, "Default interface methods"),
    StaticInterfaceMethods => ("STATIC_INTERFACE_METHODS", 8, Syntax, "Static interface methods"),
    RepeatingAnnotations => ("REPEATING_ANNOTATIONS", 8, Syntax, "Repeating annotations"),
    TypeAnnotations => ("TYPE_ANNOTATIONS", 8, Syntax, "Type annotations"),
    StreamApi => ("STREAM_API", 8, Library, "Streams (java.util.stream)"),
    DateTimeApi => ("DATE_TIME_API", 8, Library, "Date and time (java.time)"),
    Optional => ("OPTIONAL", 8, Library, "java.util.Optional"),
    Base64Api => ("BASE64_API", 8, Library, "java.util.Base64"),
    // 9
    Modules => ("MODULES", 9, Syntax, "Module declarations"),
    PrivateInterfaceMethods => ("PRIVATE_INTERFACE_METHODS", 9, Syntax, "Private interface methods"),
    TryWithEffectivelyFinal => ("TRY_WITH_EFFECTIVELY_FINAL", 9, Syntax, "Effectively final variables as resources"),
    DiamondWithAnonymous => ("DIAMOND_WITH_ANONYMOUS", 9, Syntax, "Diamond with anonymous classes"),
    ProcessApi => ("PROCESS_API", 9, Library, "java.lang.ProcessHandle"),
    ReactiveStreams => ("REACTIVE_STREAMS", 9, Library, "java.util.concurrent.Flow"),
    StackWalking => ("STACK_WALKING", 9, Library, "java.lang.StackWalker"),
    CollectionFactoryMethods => ("COLLECTION_FACTORY_METHODS", 9, Library, "List.of, Set.of, Map.of"),
    // 10
    Var => ("VAR", 10, Syntax, "Local variable type inference"),
    CollectionCopyOf => ("COLLECTION_COPY_OF", 10, Library, "List.copyOf, Set.copyOf, Map.copyOf"),
    // 11
    VarInLambda => ("VAR_IN_LAMBDA", 11, Syntax, "var in lambda parameters"),
    HttpClient => ("HTTP_CLIENT", 11, Library, "HTTP client (java.net.http)"),
    FlightRecorder => ("FLIGHT_RECORDER", 11, Library, "Flight Recorder (jdk.jfr)"),
    // 12
    CompactNumberFormat => ("COMPACT_NUMBER_FORMAT", 12, Library, "java.text.CompactNumberFormat"),
    CollectorsTeeing => ("COLLECTORS_TEEING", 12, Library, "Collectors.teeing"),
    // 14
    SwitchExpressions => ("SWITCH_EXPRESSIONS", 14, Syntax, "Switch expressions"),
    SwitchMultipleLabels => ("SWITCH_MULTIPLE_LABELS", 14, Syntax, "Multiple case labels"),
    Yield => ("YIELD", 14, Syntax, "yield statement"),
    // 15
    TextBlocks => ("TEXT_BLOCKS", 15, Syntax, "Text blocks"),
    HiddenClasses => ("HIDDEN_CLASSES", 15, Library, "Hidden classes (java.lang.invoke)"),
    EdDsa => ("EDDSA", 15, Library, "Edwards-curve signatures"),
    // 16
    Records => ("RECORDS", 16, Syntax, "Records"),
    PatternMatchingInstanceof => ("PATTERN_MATCHING_INSTANCEOF", 16, Syntax, "Pattern matching for instanceof"),
    LocalInterfaces => ("LOCAL_INTERFACES", 16, Syntax, "Local interfaces"),
    LocalEnums => ("LOCAL_ENUMS", 16, Syntax, "Local enums"),
    LocalRecords => ("LOCAL_RECORDS", 16, Syntax, "Local records"),
    UnixDomainSockets => ("UNIX_DOMAIN_SOCKETS", 16, Library, "Unix domain socket channels"),
    // 17
    SealedClasses => ("SEALED_CLASSES", 17, Syntax, "Sealed classes"),
    RandomGenerator => ("RANDOM_GENERATOR", 17, Library, "java.util.random"),
    HexFormat => ("HEX_FORMAT", 17, Library, "java.util.HexFormat"),
    DeserializationFilters => ("DESERIALIZATION_FILTERS", 17, Library, "java.io.ObjectInputFilter"),
    // 18
    SimpleWebServer => ("SIMPLE_WEB_SERVER", 18, Library, "com.sun.net.httpserver"),
    InetAddressResolver => ("INET_ADDRESS_RESOLVER", 18, Library, "java.net.spi"),
    // 21
    RecordPatterns => ("RECORD_PATTERNS", 21, Syntax, "Record patterns"),
    SwitchPatternMatching => ("SWITCH_PATTERN_MATCHING", 21, Syntax, "Pattern matching for switch"),
    SwitchNullDefault => ("SWITCH_NULL_DEFAULT", 21, Syntax, "case null"),
    SequencedCollections => ("SEQUENCED_COLLECTIONS", 21, Library, "Sequenced collections"),
    VirtualThreads => ("VIRTUAL_THREADS", 21, Library, "Virtual threads"),
    KeyEncapsulation => ("KEY_ENCAPSULATION", 21, Library, "javax.crypto.KEM"),
    // 22
    UnnamedVariables => ("UNNAMED_VARIABLES", 22, Syntax, "Unnamed variables and patterns"),
    ForeignFunctionApi => ("FOREIGN_FUNCTION_API", 22, Library, "Foreign function and memory API"),
    // 23
    MarkdownDocComments => ("MARKDOWN_DOC_COMMENTS", 23, Syntax, "Markdown documentation comments"),
    // 24
    StreamGatherers => ("STREAM_GATHERERS", 24, Library, "Stream gatherers"),
    ClassFileApi => ("CLASS_FILE_API", 24, Library, "Class-file API (java.lang.classfile)"),
    QuantumResistantKem => ("QUANTUM_RESISTANT_KEM", 24, Library, "ML-KEM (javax.crypto.kem)"),
    // 25
    ScopedValues => ("SCOPED_VALUES", 25, Library, "java.lang.ScopedValue"),
    KeyDerivationApi => ("KEY_DERIVATION_API", 25, Library, "javax.crypto.KDF"),
    ModuleImports => ("MODULE_IMPORTS", 25, Syntax, "Module import declarations"),
    FlexibleConstructorBodies => ("FLEXIBLE_CONSTRUCTOR_BODIES", 25, Syntax, "Statements before super()"),
    CompactSourceFiles => ("COMPACT_SOURCE_FILES", 25, Syntax, "Compact source files"),
}

impl Feature {
    pub const fn is_library(self) -> bool {
        matches!(self.category(), FeatureCategory::Library)
    }

    /// Looks a feature up by its SCREAMING_SNAKE name.
    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_names_are_unique() {
        let names: FxHashSet<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), Feature::ALL.len());
    }

    #[test]
    fn test_declaration_order_is_release_order() {
        for pair in Feature::ALL.windows(2) {
            assert!(
                pair[0].introduced_in() <= pair[1].introduced_in(),
                "{} ({}) declared before {} ({})",
                pair[0],
                pair[0].introduced_in(),
                pair[1],
                pair[1].introduced_in()
            );
        }
    }

    #[test]
    fn test_from_name_round_trips() {
        for &feature in Feature::ALL {
            assert_eq!(Feature::from_name(feature.name()), Some(feature));
        }
        assert_eq!(Feature::from_name("NOT_A_FEATURE"), None);
    }

    #[test]
    fn test_categories() {
        assert!(Feature::StreamApi.is_library());
        assert!(!Feature::Lambdas.is_library());
        assert_eq!(Feature::ForEach.introduced_in(), 5);
        assert_eq!(Feature::CompactSourceFiles.introduced_in(), 25);
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Feature::TextBlocks).unwrap();
        assert_eq!(json, "\"TEXT_BLOCKS\"");
    }
}
