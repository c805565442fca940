use crate::error::MergeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "merged_source_code.txt";
/// Encoding label used when none is given.
pub const DEFAULT_ENCODING: &str = "UTF-8";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOptions {
    pub root: PathBuf,
    /// Accepted suffixes without the leading dot. Matching is case-sensitive.
    pub suffixes: Vec<String>,
    pub output: PathBuf,
    /// Carried for reporting only; file bytes are never transcoded.
    pub encoding: String,
    pub follow_links: bool,
    pub exclude_patterns: Vec<String>,
    pub respect_gitignore: bool,
    pub skip_unreadable: bool,
    pub skip_binary: bool,
}
impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            suffixes: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            encoding: DEFAULT_ENCODING.to_string(),
            follow_links: false,
            exclude_patterns: Vec::new(),
            respect_gitignore: false,
            skip_unreadable: false,
            skip_binary: false,
        }
    }
}
impl MergeOptions {
    /// Checks everything that must hold before the tree is walked or the
    /// output is touched.
    pub fn validate(&self) -> Result<(), MergeError> {
        if self.suffixes.is_empty() {
            return Err(MergeError::Argument("at least one suffix is required".to_string()));
        }
        if self.suffixes.iter().any(|s| s.is_empty()) {
            return Err(MergeError::Argument("suffixes must not be empty".to_string()));
        }
        let metadata = std::fs::metadata(&self.root).map_err(|e| MergeError::InvalidRoot {
            path: self.root.clone(),
            reason: e.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(MergeError::InvalidRoot {
                path: self.root.clone(),
                reason: "not a directory".to_string(),
            });
        }
        for pattern in &self.exclude_patterns {
            globset::Glob::new(pattern)
                .map_err(|e| MergeError::Glob(format!("'{}': {}", pattern, e)))?;
        }
        Ok(())
    }

    /// True when the encoding label names UTF-8, the only encoding whose
    /// label matches what is actually written.
    pub fn encoding_is_utf8(&self) -> bool {
        matches!(self.encoding.to_ascii_lowercase().as_str(), "utf-8" | "utf8")
    }
}
#[derive(Debug, Default)]
pub struct MergeBuilder {
    options: MergeOptions,
}
impl MergeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: MergeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }
    /// Splits a comma separated list such as `java,py,rs`. Entries are kept
    /// verbatim, without trimming.
    pub fn suffix_list(self, list: &str) -> Self {
        self.suffixes(list.split(','))
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.options.encoding = encoding.into();
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn skip_unreadable(mut self, yes: bool) -> Self {
        self.options.skip_unreadable = yes;
        self
    }
    pub fn skip_binary(mut self, yes: bool) -> Self {
        self.options.skip_binary = yes;
        self
    }
    pub fn build(self) -> MergeOptions {
        self.options
    }
}
