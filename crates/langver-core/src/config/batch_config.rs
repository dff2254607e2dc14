//! Batch driver configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THREADS;

/// Default maximum source file size in bytes (4MB).
const DEFAULT_MAX_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// Configuration for running the pipeline over many files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Worker threads. 0 = rayon default.
    pub threads: Option<usize>,
    /// Files larger than this are reported unreadable without being parsed.
    pub max_file_size: Option<u64>,
}

impl BatchConfig {
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }
}
