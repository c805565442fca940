use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scan root, segments joined with `/`.
    pub relative_path: String,
    /// Raw file bytes, read in full at selection time.
    pub content: Vec<u8>,
}

impl FileEntry {
    pub fn new(relative_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// Why a matching file was left out of the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Could not be read; only recorded when `skip_unreadable` is set.
    Unreadable(String),
    /// Detected as binary; only recorded when `skip_binary` is set.
    Binary,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(msg) => write!(f, "unreadable: {}", msg),
            SkipReason::Binary => f.write_str("binary content"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: SkipReason,
}

/// Result of the selection phase.
#[derive(Debug, Default)]
pub struct SelectOutcome {
    /// Matched files in walk order; pass through [`crate::sort_entries`]
    /// before rendering.
    pub entries: Vec<FileEntry>,
    pub skipped: Vec<SkippedFile>,
}

/// Report of a completed merge run.
#[derive(Debug, Serialize, Deserialize)]
pub struct MergeSummary {
    /// Destination the merged document was written to.
    pub output: PathBuf,
    /// Relative paths of the merged files, in output order.
    pub files: Vec<String>,
    pub bytes_written: u64,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<SkippedFile>,
}
