//! # srcmerge
//!
//! `srcmerge` walks a directory tree, selects files by suffix, and merges them
//! into a single document where each file is a header line followed by a
//! fenced block tagged with a syntax label.
//!
//! The pipeline is linear: [`select`] collects matching files, [`sort_entries`]
//! orders them byte-wise by relative path, and [`output::render`] writes the
//! blocks, asking [`classify`] for each label. [`merge`] runs all of it and
//! writes the result to the configured output file.
//!
//! # Features
//!
//! - `logging` (default): emits diagnostics through the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use srcmerge::{MergeBuilder, merge};
//!
//! let options = MergeBuilder::new("src")
//!     .suffix_list("rs,toml")
//!     .output("merged.txt")
//!     .build();
//!
//! let summary = merge(options).expect("merge failed");
//! println!("{} files, {} bytes", summary.files.len(), summary.bytes_written);
//! ```

pub mod classify;
mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use classify::classify;
pub use engine::{merge, select, sort_entries};
pub use error::MergeError;
pub use options::{DEFAULT_ENCODING, DEFAULT_OUTPUT, MergeBuilder, MergeOptions};
pub use types::{FileEntry, MergeSummary, SelectOutcome, SkipReason, SkippedFile};
