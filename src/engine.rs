use crate::error::{CollectError, FileReadError};
use crate::filter::Selection;
use crate::options::CollectOptions;
use crate::output::CollectWriter;
use crate::types::{CollectReport, FileEntry, ReadOutcome};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

struct Walker {
    inner: ignore::Walk,
    matcher: Option<GlobSet>,
}

impl Walker {
    fn new(options: &CollectOptions) -> Result<Self, CollectError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links);
        if options.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        let matcher = build_matcher(&options.ignore_patterns)?;

        // Runs before the walker opens a directory, so pruned subtrees are
        // never read.
        let rules = options.clone();
        let dir_matcher = matcher.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 || !is_dir(entry) {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            let pruned = rules.prunes_dir(&name)
                || dir_matcher
                    .as_ref()
                    .is_some_and(|m| m.is_match(entry.path()));
            #[cfg(feature = "logging")]
            if pruned {
                tracing::debug!("Pruning directory {}", entry.path().display());
            }
            !pruned
        });
        Ok(Self {
            inner: builder.build(),
            matcher,
        })
    }
}

fn build_matcher(patterns: &[String]) -> Result<Option<GlobSet>, CollectError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut glob_builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| CollectError::Pattern(format!("'{}': {}", pattern, e)))?;
        glob_builder.add(glob);
    }
    glob_builder
        .build()
        .map(Some)
        .map_err(|e| CollectError::Pattern(format!("failed to build glob set: {}", e)))
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// Regular files, plus any symlink that does not resolve to a directory.
/// Dangling links count as files so their read failure is recorded.
fn is_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}

fn open_output(path: &Path) -> Result<CollectWriter<BufWriter<File>>, CollectError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CollectError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| CollectError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CollectWriter::new(BufWriter::new(file)))
}

fn read_entry(path: &Path) -> Result<String, FileReadError> {
    fs::read_to_string(path).map_err(|source| FileReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Matches `path` against the output file without canonicalizing every
/// candidate: only same-named files are resolved.
fn is_output(path: &Path, output: &Path, output_canonical: Option<&PathBuf>) -> bool {
    let Some(canonical) = output_canonical else {
        return false;
    };
    if path.file_name() != output.file_name() {
        return false;
    }
    fs::canonicalize(path).is_ok_and(|p| &p == canonical)
}

/// Walks `options.root` and writes every selected file into `options.output`.
///
/// The run fails only if the ignore patterns are invalid, the output file
/// cannot be prepared, or writing to it fails. Unreadable walk entries are
/// counted and skipped. Unreadable files are recorded inline in the output.
pub fn collect(options: CollectOptions) -> Result<CollectReport, CollectError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Collecting from {} into {}",
        options.root.display(),
        options.output.display()
    );
    let Walker { inner, matcher } = Walker::new(&options)?;
    let mut writer = open_output(&options.output)?;
    let output = &options.output;
    writer
        .write_header(&options.root)
        .map_err(|e| CollectError::write(output, e))?;
    let output_canonical = fs::canonicalize(output).ok();

    let mut report = CollectReport {
        root: options.root.clone(),
        output: output.clone(),
        files: Vec::new(),
        excluded: 0,
        walk_errors: 0,
    };

    for result in inner {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable entry: {}", e);
                #[cfg(not(feature = "logging"))]
                let _ = e;
                report.walk_errors += 1;
                continue;
            }
        };
        if !is_file(&entry) {
            continue;
        }
        let path = entry.path();
        match options.select(&entry.file_name().to_string_lossy()) {
            Selection::Include => {}
            Selection::Excluded => {
                report.excluded += 1;
                continue;
            }
            Selection::Unlisted => continue,
        }
        if matcher.as_ref().is_some_and(|m| m.is_match(path)) {
            report.excluded += 1;
            continue;
        }
        if is_output(path, output, output_canonical.as_ref()) {
            continue;
        }

        let outcome = match read_entry(path) {
            Ok(content) => {
                writer
                    .write_file(path, &content)
                    .map_err(|e| CollectError::write(output, e))?;
                ReadOutcome::Written {
                    bytes: content.len() as u64,
                }
            }
            Err(err) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Error reading {}: {}", path.display(), err);
                writer
                    .write_read_error(&err)
                    .map_err(|e| CollectError::write(output, e))?;
                ReadOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };
        report.files.push(FileEntry {
            path: path.to_path_buf(),
            outcome,
        });
    }

    writer.finish().map_err(|e| CollectError::write(output, e))?;
    Ok(report)
}
