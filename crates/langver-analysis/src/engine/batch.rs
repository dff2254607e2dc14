//! Parallel batch driver.

use std::path::{Path, PathBuf};
use std::time::Instant;

use langver_core::errors::{LangverErrorCode, PipelineError, PipelineResult};
use langver_core::types::collections::BTreeMap;
use rayon::prelude::*;
use serde::Serialize;

use super::pipeline::{DetectionPipeline, FileReport};
use crate::catalog::Feature;

/// A file the batch could not analyze.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub code: &'static str,
    pub message: String,
}

/// Aggregate over every file of a batch, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    /// Required release -> number of files.
    pub release_distribution: BTreeMap<i32, usize>,
    /// Feature -> number of files using it.
    pub feature_counts: BTreeMap<Feature, usize>,
    pub unparseable: Vec<FileFailure>,
    pub unreadable: Vec<FileFailure>,
}

impl BatchReport {
    fn record(&mut self, report: FileReport) {
        *self
            .release_distribution
            .entry(report.required_release())
            .or_default() += 1;
        for feature in report.detection.detected_features() {
            *self.feature_counts.entry(*feature).or_default() += 1;
        }
        self.files.push(report);
    }

    /// Highest required release across analyzed files.
    pub fn max_required_release(&self) -> Option<i32> {
        self.release_distribution.keys().next_back().copied()
    }

    /// Highest release needed by language features alone across analyzed files.
    pub fn max_required_syntax_release(&self) -> Option<i32> {
        self.files.iter().filter_map(FileReport::required_syntax_release).max()
    }

    pub fn analyzed_count(&self) -> usize {
        self.files.len()
    }
}

impl DetectionPipeline {
    /// Analyzes every path in parallel. Per-file failures are collected, never
    /// fatal.
    pub fn analyze_batch(&self, paths: &[PathBuf]) -> PipelineResult<BatchReport> {
        let start = Instant::now();
        let analyze = || -> Vec<(&Path, Result<FileReport, PipelineError>)> {
            paths
                .par_iter()
                .map(|path| (path.as_path(), self.analyze_file(path)))
                .collect()
        };
        let outcomes = match self.threads {
            0 => analyze(),
            threads => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(analyze),
                Err(e) => {
                    tracing::warn!(error = %e, threads, "cannot build thread pool, using the global pool");
                    analyze()
                }
            },
        };

        let mut result = PipelineResult::new(BatchReport::default());
        for (path, outcome) in outcomes {
            match outcome {
                Ok(report) => result.data.record(report),
                Err(error) => {
                    let failure = FileFailure {
                        path: path.to_path_buf(),
                        code: error.error_code(),
                        message: error.to_string(),
                    };
                    if matches!(error, PipelineError::Source(_)) {
                        result.data.unreadable.push(failure);
                    } else if error.is_unparseable() {
                        result.data.unparseable.push(failure);
                    } else {
                        tracing::warn!(file_path = %path.display(), error = %error, "analysis failed");
                    }
                    result.add_error(error);
                }
            }
        }

        let elapsed = start.elapsed();
        let files_per_second = if elapsed.as_secs_f64() > 0.0 {
            paths.len() as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        tracing::info!(
            files = paths.len(),
            analyzed = result.data.analyzed_count(),
            unparseable = result.data.unparseable.len(),
            unreadable = result.data.unreadable.len(),
            batch_duration_ms = elapsed.as_millis() as u64,
            files_per_second,
            "batch complete"
        );
        result
    }
}
