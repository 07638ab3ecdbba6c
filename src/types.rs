use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How an included file ended up in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadOutcome {
    /// Content was copied verbatim.
    Written { bytes: u64 },
    /// Reading failed; an `[Error reading ...]` marker was written instead.
    Failed { reason: String },
}

/// One file that received a `### File:` header in the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path as written in the header.
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: ReadOutcome,
}

/// Summary of a finished collection run.
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectReport {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Included files, in the order they were written.
    pub files: Vec<FileEntry>,
    /// Files skipped by name, image extension or ignore pattern.
    pub excluded: usize,
    /// Directory entries the walker could not read.
    pub walk_errors: usize,
}

impl CollectReport {
    pub fn failed(&self) -> impl Iterator<Item = &FileEntry> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, ReadOutcome::Failed { .. }))
    }
}
