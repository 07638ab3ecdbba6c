//! Command-line interface for codecollect.
//!
//! Collects the source files under a directory into one annotated text file.
//! With no arguments it collects `.` into `utils/collected_code.txt`.

use clap::Parser;
use codecollect::{CollectBuilder, CollectOptions, CollectReport, DEFAULT_OUTPUT, collect};
use std::path::PathBuf;
use std::process::exit;

/// codecollect: concatenate a project's source files into one file
#[derive(Parser)]
#[command(name = "codecollect", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file; parent directories are created as needed
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Additional extension to include, e.g. ".rs" (can be repeated)
    #[arg(long = "ext")]
    extensions: Vec<String>,

    /// Additional file name to exclude (can be repeated)
    #[arg(long = "exclude-file")]
    exclude_files: Vec<String>,

    /// Additional directory name to prune (can be repeated)
    #[arg(long = "exclude-dir")]
    exclude_dirs: Vec<String>,

    /// Additional extension to exclude even when otherwise allowed (can be repeated)
    #[arg(long = "exclude-ext")]
    exclude_extensions: Vec<String>,

    /// Ignore glob patterns matched against full paths (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Follow symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Visit directory entries in name order for reproducible output
    #[arg(long)]
    sort: bool,

    /// Print the run report as JSON instead of the completion message
    #[arg(long)]
    json: bool,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> (CollectOptions, bool, bool, bool) {
        let mut builder = CollectBuilder::new(self.root, self.output)
            .ignore_patterns(self.ignore_patterns)
            .follow_links(self.follow_links)
            .respect_gitignore(self.gitignore)
            .sort_by_name(self.sort);

        for ext in self.extensions {
            builder = builder.add_extension(ext);
        }
        for name in self.exclude_files {
            builder = builder.exclude_file(name);
        }
        for name in self.exclude_dirs {
            builder = builder.exclude_dir(name);
        }
        for ext in self.exclude_extensions {
            builder = builder.exclude_extension(ext);
        }
        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.json, self.pretty, self.verbose)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "codecollect=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}

fn main() {
    let cli = Cli::parse();
    let (options, json, pretty, verbose) = cli.into_options();
    init_logging(verbose);

    match collect(options) {
        Ok(report) => output_report(&report, json, pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn output_report(report: &CollectReport, json: bool, pretty: bool) {
    if json {
        let out = if pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
        .unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", out);
    } else {
        println!("Code collected in {}", report.output.display());
    }
}
