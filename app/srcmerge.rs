//! Command-line interface for srcmerge.
//!
//! Merges every file under a directory whose name ends with one of the given
//! suffixes into a single document of fenced code blocks.

use clap::{ArgAction, Parser};
use srcmerge::{DEFAULT_ENCODING, DEFAULT_OUTPUT, MergeBuilder, MergeOptions, MergeSummary, merge};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;

/// srcmerge: merge a source tree into one fenced document
#[derive(Parser)]
#[command(name = "srcmerge", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan
    #[arg(short = 'd', long = "dir", value_name = "DIRECTORY")]
    root: PathBuf,

    /// Comma separated suffixes without the leading dot, e.g. `java,py`
    #[arg(long, value_name = "EXT1,EXT2,...")]
    suffix: String,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Encoding label (recorded only, bytes are never transcoded)
    #[arg(long, default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Follow symlinks; a link back to an ancestor directory is an error
    #[arg(long)]
    follow_links: bool,

    /// Glob of relative paths to leave out (can be repeated)
    #[arg(long = "exclude", value_name = "GLOB")]
    exclude_patterns: Vec<String>,

    /// Honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Skip unreadable files and directories instead of aborting
    #[arg(long)]
    skip_unreadable: bool,

    /// Skip files detected as binary
    #[arg(long)]
    skip_binary: bool,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn into_options(self) -> (MergeOptions, bool) {
        let options = MergeBuilder::new(self.root)
            .suffix_list(&self.suffix)
            .output(self.output)
            .encoding(self.encoding)
            .follow_links(self.follow_links)
            .exclude_patterns(self.exclude_patterns)
            .respect_gitignore(self.gitignore)
            .skip_unreadable(self.skip_unreadable)
            .skip_binary(self.skip_binary)
            .build();
        (options, self.summary)
    }
}

/// Rewrites the single-dash long flags (`-suffix`, `-encoding`) to the
/// double-dash form clap understands.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-suffix") => OsString::from("--suffix"),
            Some("-encoding") => OsString::from("--encoding"),
            _ => arg,
        })
        .collect()
}

#[cfg(feature = "logging")]
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::filter::LevelFilter;
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    #[cfg(feature = "logging")]
    init_logging(cli.verbose, cli.quiet);

    let (options, print_summary) = cli.into_options();
    match merge(options) {
        Ok(summary) => report(&summary, print_summary),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn report(summary: &MergeSummary, print_summary: bool) {
    for skipped in &summary.skipped {
        eprintln!("Skipped {}: {}", skipped.path, skipped.reason);
    }
    if print_summary {
        let json = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", json);
    }
}
