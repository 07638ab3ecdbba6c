use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a collection run.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot open output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("write to {path} failed: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid ignore pattern: {0}")]
    Pattern(String),
}

impl CollectError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CollectError::Write {
            path: path.into(),
            source,
        }
    }
}

/// A single included file that could not be read.
///
/// Never aborts a run: the collector writes it into the output as an
/// `[Error reading ...]` marker and moves on.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct FileReadError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl FileReadError {
    /// File name used in the inline marker, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
