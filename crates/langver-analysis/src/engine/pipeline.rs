//! Per-file detection pipeline.

use std::path::{Path, PathBuf};

use langver_core::config::LangverConfig;
use langver_core::errors::{PipelineError, SourceError};
use serde::Serialize;

use super::result::DetectionResult;
use crate::grammar::{GrammarProfile, GrammarProfiles};
use crate::parsers::{JavaParser, SyntaxParser, SyntaxTree};
use crate::recovery::{RecoveryScanner, RecoveryTrace};
use crate::resolver::{feature_max, grammar_search, ReleaseVerdict};
use crate::rules::RuleTable;
use crate::visitor::FeatureVisitor;

/// Everything learned about one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub detection: DetectionResult,
    /// Oldest grammar that accepts the original text.
    pub grammar_release: ReleaseVerdict,
    pub recovery: RecoveryTrace,
}

impl FileReport {
    pub fn path(&self) -> &Path {
        self.detection.file_path()
    }

    pub fn required_release(&self) -> i32 {
        self.detection.required_release()
    }

    pub fn required_syntax_release(&self) -> Option<i32> {
        self.detection.required_syntax_release()
    }
}

/// Shared, immutable analysis state. One instance serves every worker thread.
#[derive(Debug)]
pub struct DetectionPipeline {
    parser: JavaParser,
    profiles: GrammarProfiles,
    scanner: RecoveryScanner,
    rules: &'static RuleTable,
    parser_release: i32,
    min_release_floor: i32,
    pub(super) max_file_size: u64,
    pub(super) threads: usize,
}

impl DetectionPipeline {
    /// Builds the pipeline. Fails when the built-in grammar profiles are not
    /// monotonic or the recovery patterns do not compile.
    pub fn new(config: &LangverConfig) -> Result<Self, PipelineError> {
        let profiles = GrammarProfiles::builtin()?;
        let scanner = RecoveryScanner::from_config(&config.analysis)?;
        let pipeline = Self {
            parser: JavaParser::new(config.analysis.effective_max_tree_depth()),
            profiles,
            scanner,
            rules: RuleTable::builtin(),
            parser_release: config.analysis.effective_parser_release(),
            min_release_floor: config.analysis.effective_min_release_floor(),
            max_file_size: config.batch.effective_max_file_size(),
            threads: config.batch.effective_threads(),
        };
        tracing::debug!(
            parser_release = pipeline.parse_profile().release(),
            profiles = pipeline.profiles.profiles().len(),
            rules = pipeline.rules.len(),
            "detection pipeline ready"
        );
        Ok(pipeline)
    }

    pub fn profiles(&self) -> &GrammarProfiles {
        &self.profiles
    }

    /// Profile the parser is limited to.
    pub fn parse_profile(&self) -> &GrammarProfile {
        self.profiles.upper_bound(self.parser_release)
    }

    pub fn min_release_floor(&self) -> i32 {
        self.min_release_floor
    }

    /// Reads and analyzes one file.
    pub fn analyze_file(&self, path: &Path) -> Result<FileReport, PipelineError> {
        let source = read_source(path, self.max_file_size)?;
        self.analyze_source(path, &source)
    }

    /// Analyzes source text already in memory. `path` only labels the result.
    pub fn analyze_source(&self, path: &Path, source: &str) -> Result<FileReport, PipelineError> {
        let span = tracing::debug_span!("analyze_file", file_path = %path.display());
        let _guard = span.enter();

        let mut recovery = RecoveryTrace::default();
        let tree = self.parse_with_recovery(source, &mut recovery)?;

        let mut features = FeatureVisitor::new(self.rules).visit(&tree);
        features.extend(recovery.features());
        let required = feature_max::required_release(&features, self.min_release_floor);
        let detection = DetectionResult::new(path, features, required, self.min_release_floor)?;

        let grammar_release = if recovery.is_empty() {
            grammar_search::minimum_release(&self.profiles, &tree)
        } else {
            self.grammar_release_of_original(source)
        };

        tracing::debug!(
            feature_count = detection.detected_features().len(),
            required_release = required,
            grammar_release = %grammar_release,
            keyword_substituted = recovery.keyword_substituted,
            relocated_count = recovery.relocated.len(),
            "file analyzed"
        );
        Ok(FileReport {
            detection,
            grammar_release,
            recovery,
        })
    }

    /// Keyword pass, parse, and on a failed parse one relocation retry.
    fn parse_with_recovery(
        &self,
        source: &str,
        recovery: &mut RecoveryTrace,
    ) -> Result<SyntaxTree, PipelineError> {
        let profile = self.parse_profile();
        let text = self.scanner.substitute_keywords(source, recovery);
        let first = match self.parser.parse(&text, profile) {
            Ok(tree) => return Ok(tree),
            Err(e) if !e.is_unparseable() => return Err(e.into()),
            Err(e) => e,
        };

        let Some(relocated) = self.scanner.relocate(&text, recovery) else {
            return Err(first.into());
        };
        tracing::debug!(
            error = %first,
            relocated_count = recovery.relocated.len(),
            "retrying parse after relocation"
        );
        match self.parser.parse(&relocated, profile) {
            Ok(tree) => Ok(tree),
            Err(e) => {
                tracing::debug!(error = %e, "parse failed after relocation");
                Err(e.into())
            }
        }
    }

    /// The grammar search always judges the text as written, not a rewrite.
    fn grammar_release_of_original(&self, source: &str) -> ReleaseVerdict {
        match self.parser.parse_tree(source) {
            Ok(tree) => grammar_search::minimum_release(&self.profiles, &tree),
            Err(_) => ReleaseVerdict::Unparseable,
        }
    }
}

fn read_source(path: &Path, max_file_size: u64) -> Result<String, SourceError> {
    let unreadable = |message: String| SourceError::Unreadable {
        path: PathBuf::from(path),
        message,
    };
    let metadata = std::fs::metadata(path).map_err(|e| unreadable(e.to_string()))?;
    if metadata.len() > max_file_size {
        return Err(unreadable(format!(
            "file is {} bytes, limit is {max_file_size}",
            metadata.len()
        )));
    }
    std::fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))
}
