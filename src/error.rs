use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Invalid argument: {0}")]
    Argument(String),
    #[error("Invalid root directory {path}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {message}")]
    Walk {
        path: Option<PathBuf>,
        message: String,
    },
    #[error("Symlink cycle: {child} points back to {ancestor}")]
    Cycle { ancestor: PathBuf, child: PathBuf },
    #[error("Invalid glob pattern: {0}")]
    Glob(String),
}
impl MergeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }
    /// Translates a walker error, surfacing symlink loops and I/O failures as
    /// their own variants and keeping the entry path when the walker has one.
    pub(crate) fn from_walk(err: ignore::Error) -> Self {
        MergeError::from_walk_at(err, None)
    }
    fn from_walk_at(err: ignore::Error, path: Option<PathBuf>) -> Self {
        match err {
            ignore::Error::Loop { ancestor, child } => MergeError::Cycle { ancestor, child },
            ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
                MergeError::from_walk_at(*err, path)
            }
            ignore::Error::WithPath { path, err } => MergeError::from_walk_at(*err, Some(path)),
            ignore::Error::Io(source) => match path {
                Some(path) => MergeError::io(path, source),
                None => MergeError::Walk {
                    path: None,
                    message: source.to_string(),
                },
            },
            other => MergeError::Walk {
                path,
                message: other.to_string(),
            },
        }
    }
    /// Whether best-effort mode may record this error and keep going.
    pub(crate) fn is_skippable(&self) -> bool {
        matches!(self, MergeError::Io { .. } | MergeError::Walk { .. })
    }
}
