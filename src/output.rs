//! Rendering of the collected output file.
//!
//! The layout is informal text meant for humans (or for pasting into a
//! prompt):
//!
//! ```text
//! Collected code from <root>:
//!
//!
//!
//! ### File: <path>
//!
//! <content>
//! ```
//!
//! File content is written exactly as read. A file that cannot be read gets
//! `[Error reading <name>: <reason>]` on its own line in place of content.

use crate::error::FileReadError;
use std::io::{self, Write};
use std::path::Path;

/// Writes the collected output to any sink.
pub struct CollectWriter<W: Write> {
    inner: W,
}

impl<W: Write> CollectWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_header(&mut self, root: &Path) -> io::Result<()> {
        write!(self.inner, "Collected code from {}:\n\n", root.display())
    }

    /// Writes the header for `path` followed by `content` verbatim.
    pub fn write_file(&mut self, path: &Path, content: &str) -> io::Result<()> {
        self.write_file_heading(path)?;
        self.inner.write_all(content.as_bytes())
    }

    /// Writes the header for the failed file followed by the inline marker.
    pub fn write_read_error(&mut self, err: &FileReadError) -> io::Result<()> {
        self.write_file_heading(&err.path)?;
        write!(
            self.inner,
            "\n[Error reading {}: {}]\n",
            err.file_name(),
            err
        )
    }

    fn write_file_heading(&mut self, path: &Path) -> io::Result<()> {
        write!(self.inner, "\n\n### File: {}\n\n", path.display())
    }

    /// Flushes and hands back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
