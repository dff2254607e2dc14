//! Shared constants for the langver engine.

/// langver version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release reported for a file with no detected features.
pub const DEFAULT_MIN_RELEASE_FLOOR: i32 = 1;

/// Newest release the built-in catalog and grammar profiles know about.
pub const LATEST_RELEASE: i32 = 25;

/// Oldest release with a grammar profile. Everything older is accepted by it.
pub const BASELINE_GRAMMAR_RELEASE: i32 = 8;

/// Deepest syntax tree the engine will walk before reporting the file unparseable.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 2_000;

/// Default number of threads (0 = auto-detect).
pub const DEFAULT_THREADS: usize = 0;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "langver.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "LANGVER_LOG";

/// Package every Java compilation unit imports implicitly.
pub const IMPLICIT_PACKAGE: &str = "java.lang";

/// Name stem of the members the relocation pass synthesizes.
pub const RELOCATION_PLACEHOLDER_STEM: &str = "__langver_relocated_";
