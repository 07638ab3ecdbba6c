//! # codecollect
//!
//! `codecollect` walks a directory tree and concatenates the text of selected files into a
//! single output file, with a `### File: <path>` heading in front of each one.
//!
//! Selection is name-based only. A file is included when its name ends with an allowed
//! extension, unless its name is on the excluded list or ends with an image extension.
//! Excluded directories are pruned before the walker enters them. Files that fail to read
//! do not stop the run; an `[Error reading ...]` marker takes the place of their content.
//!
//! # Features
//!
//! - `logging` (default): Emits debug and warning events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use codecollect::{CollectBuilder, collect};
//!
//! let options = CollectBuilder::new(".", "utils/collected_code.txt")
//!     .exclude_dir("target")
//!     .add_extension(".rs")
//!     .build();
//!
//! let report = collect(options).expect("Failed to collect code");
//!
//! println!("Code collected in {}", report.output.display());
//! for file in report.failed() {
//!     println!("Unreadable: {}", file.path.display());
//! }
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;

pub use engine::collect;
pub use error::{CollectError, FileReadError};
pub use filter::Selection;
pub use options::{
    CollectBuilder, CollectOptions, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES,
    DEFAULT_EXTENSIONS, DEFAULT_IMAGE_EXTENSIONS, DEFAULT_OUTPUT,
};
pub use types::{CollectReport, FileEntry, ReadOutcome};
