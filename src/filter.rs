//! Name-based selection rules.
//!
//! All checks are plain string comparisons on the final path component:
//! exact matches for excluded names, suffix matches for extensions.

use crate::options::CollectOptions;

/// What the collector does with a file, judged by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Allowed extension and not excluded.
    Include,
    /// Excluded by exact name or by an image extension.
    Excluded,
    /// Not excluded, but no allowed extension either.
    Unlisted,
}

impl CollectOptions {
    /// Classifies a file by name. Exclusion wins over the allow-list.
    pub fn select(&self, file_name: &str) -> Selection {
        if self.excluded_files.iter().any(|n| n == file_name)
            || ends_with_any(file_name, &self.image_extensions)
        {
            Selection::Excluded
        } else if ends_with_any(file_name, &self.extensions) {
            Selection::Include
        } else {
            Selection::Unlisted
        }
    }

    /// True if a directory with this name must not be descended into.
    pub fn prunes_dir(&self, dir_name: &str) -> bool {
        self.excluded_dirs.iter().any(|n| n == dir_name)
    }
}

fn ends_with_any(name: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s.as_str()))
}
