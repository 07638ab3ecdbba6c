use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_EXTENSIONS: &[&str] = &[".html", ".css", ".js", ".json"];
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["bot.log", "account_data.json", ".env"];
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "Images", ".git"];
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];
pub const DEFAULT_OUTPUT: &str = "utils/collected_code.txt";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Immutable configuration for one collection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Suffixes a file name must end with to be included.
    pub extensions: Vec<String>,
    /// Exact file names that are never included.
    pub excluded_files: Vec<String>,
    /// Exact directory names whose subtrees are never entered.
    pub excluded_dirs: Vec<String>,
    /// Suffixes that exclude a file even if it would otherwise be included.
    pub image_extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub respect_gitignore: bool,
    pub sort_by_name: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: owned(DEFAULT_EXTENSIONS),
            excluded_files: owned(DEFAULT_EXCLUDED_FILES),
            excluded_dirs: owned(DEFAULT_EXCLUDED_DIRS),
            image_extensions: owned(DEFAULT_IMAGE_EXTENSIONS),
            ignore_patterns: Vec::new(),
            max_depth: None,
            follow_links: false,
            respect_gitignore: false,
            sort_by_name: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct CollectBuilder {
    options: CollectOptions,
}

impl CollectBuilder {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            options: CollectOptions {
                root: root.into(),
                output: output.into(),
                ..Default::default()
            },
        }
    }
    /// Replaces the allowed extension list.
    pub fn extensions(mut self, exts: Vec<String>) -> Self {
        self.options.extensions = exts;
        self
    }
    pub fn add_extension(mut self, ext: impl Into<String>) -> Self {
        self.options.extensions.push(ext.into());
        self
    }
    pub fn excluded_files(mut self, names: Vec<String>) -> Self {
        self.options.excluded_files = names;
        self
    }
    pub fn exclude_file(mut self, name: impl Into<String>) -> Self {
        self.options.excluded_files.push(name.into());
        self
    }
    pub fn excluded_dirs(mut self, names: Vec<String>) -> Self {
        self.options.excluded_dirs = names;
        self
    }
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.options.excluded_dirs.push(name.into());
        self
    }
    pub fn image_extensions(mut self, exts: Vec<String>) -> Self {
        self.options.image_extensions = exts;
        self
    }
    pub fn exclude_extension(mut self, ext: impl Into<String>) -> Self {
        self.options.image_extensions.push(ext.into());
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn sort_by_name(mut self, yes: bool) -> Self {
        self.options.sort_by_name = yes;
        self
    }
    pub fn build(self) -> CollectOptions {
        self.options
    }
}
