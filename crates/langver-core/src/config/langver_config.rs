//! Top-level langver configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, BatchConfig};
use crate::constants::{BASELINE_GRAMMAR_RELEASE, LATEST_RELEASE, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LANGVER_*`)
/// 3. Project config (`langver.toml` in project root)
/// 4. User config (`~/.langver/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LangverConfig {
    pub analysis: AnalysisConfig,
    pub batch: BatchConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_release_floor: Option<i32>,
    pub parser_release: Option<i32>,
    pub threads: Option<usize>,
}

impl LangverConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LangverConfig) -> Result<(), ConfigError> {
        if let Some(floor) = config.analysis.min_release_floor {
            if floor > LATEST_RELEASE {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.min_release_floor".to_string(),
                    message: format!("must not exceed {LATEST_RELEASE}"),
                });
            }
        }
        if let Some(release) = config.analysis.parser_release {
            if !(BASELINE_GRAMMAR_RELEASE..=LATEST_RELEASE).contains(&release) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.parser_release".to_string(),
                    message: format!(
                        "must be between {BASELINE_GRAMMAR_RELEASE} and {LATEST_RELEASE}"
                    ),
                });
            }
        }
        if config.analysis.max_tree_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.max_tree_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.batch.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "batch.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.langver/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut LangverConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LangverConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut LangverConfig, other: &LangverConfig) {
        // Analysis
        if other.analysis.min_release_floor.is_some() {
            base.analysis.min_release_floor = other.analysis.min_release_floor;
        }
        if other.analysis.parser_release.is_some() {
            base.analysis.parser_release = other.analysis.parser_release;
        }
        if other.analysis.max_tree_depth.is_some() {
            base.analysis.max_tree_depth = other.analysis.max_tree_depth;
        }
        if other.analysis.keyword_substitution.is_some() {
            base.analysis.keyword_substitution = other.analysis.keyword_substitution;
        }
        if other.analysis.relocation.is_some() {
            base.analysis.relocation = other.analysis.relocation;
        }

        // Batch
        if other.batch.threads.is_some() {
            base.batch.threads = other.batch.threads;
        }
        if other.batch.max_file_size.is_some() {
            base.batch.max_file_size = other.batch.max_file_size;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LANGVER_ANALYSIS_MIN_RELEASE_FLOOR`, `LANGVER_BATCH_THREADS`, etc.
    fn apply_env_overrides(config: &mut LangverConfig) {
        if let Some(v) = env_parse::<i32>("LANGVER_ANALYSIS_MIN_RELEASE_FLOOR") {
            config.analysis.min_release_floor = Some(v);
        }
        if let Some(v) = env_parse::<i32>("LANGVER_ANALYSIS_PARSER_RELEASE") {
            config.analysis.parser_release = Some(v);
        }
        if let Some(v) = env_parse::<usize>("LANGVER_ANALYSIS_MAX_TREE_DEPTH") {
            config.analysis.max_tree_depth = Some(v);
        }
        if let Some(v) = env_parse::<bool>("LANGVER_ANALYSIS_KEYWORD_SUBSTITUTION") {
            config.analysis.keyword_substitution = Some(v);
        }
        if let Some(v) = env_parse::<bool>("LANGVER_ANALYSIS_RELOCATION") {
            config.analysis.relocation = Some(v);
        }
        if let Some(v) = env_parse::<usize>("LANGVER_BATCH_THREADS") {
            config.batch.threads = Some(v);
        }
        if let Some(v) = env_parse::<u64>("LANGVER_BATCH_MAX_FILE_SIZE") {
            config.batch.max_file_size = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut LangverConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_release_floor {
            config.analysis.min_release_floor = Some(v);
        }
        if let Some(v) = cli.parser_release {
            config.analysis.parser_release = Some(v);
        }
        if let Some(v) = cli.threads {
            config.batch.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse an environment variable, ignoring unset or malformed values.
fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Returns the user-level config directory: `~/.langver/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".langver"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
