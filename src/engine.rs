use crate::error::MergeError;
use crate::options::MergeOptions;
use crate::output::write_merged;
use crate::types::{FileEntry, MergeSummary, SelectOutcome, SkipReason, SkippedFile};
use ignore::WalkBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes inspected when deciding whether a file is binary.
const BINARY_SNIFF_LEN: usize = 4096;
/// Recorded as the path of a skipped entry the walker could not name.
const UNKNOWN_PATH: &str = "<unknown>";

struct Walker<'a> {
    inner: ignore::Walk,
    options: &'a MergeOptions,
    dotted_suffixes: Vec<String>,
}
impl<'a> Walker<'a> {
    fn new(options: &'a MergeOptions) -> Result<Self, MergeError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .follow_links(options.follow_links);
        if !options.exclude_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.exclude_patterns {
                let glob = globset::Glob::new(pattern)
                    .map_err(|e| MergeError::Glob(format!("'{}': {}", pattern, e)))?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| MergeError::Glob(format!("failed to build glob set: {}", e)))?;
            let root = options.root.clone();
            builder.filter_entry(move |entry| {
                let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
                relative.as_os_str().is_empty() || !matcher.is_match(relative)
            });
        }
        Ok(Self {
            inner: builder.build(),
            options,
            dotted_suffixes: options.suffixes.iter().map(|s| format!(".{}", s)).collect(),
        })
    }
    fn collect(self) -> Result<SelectOutcome, MergeError> {
        let Walker {
            inner,
            options,
            dotted_suffixes,
        } = self;
        let mut outcome = SelectOutcome::default();
        for result in inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    record_or_fail(options, MergeError::from_walk(e), &mut outcome)?;
                    continue;
                }
            };
            // Symlinks (unless followed), devices and fifos fall through here.
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if !matches_suffix(&entry.file_name().to_string_lossy(), &dotted_suffixes) {
                continue;
            }
            let relative = relative_path(&options.root, entry.path());
            #[cfg(feature = "logging")]
            if entry.path().to_str().is_none() {
                tracing::warn!("Non UTF-8 path recorded lossily as {}", relative);
            }
            let content = match read_file_content(entry.path()) {
                Ok(content) => content,
                Err(e) => {
                    record_or_fail(options, e, &mut outcome)?;
                    continue;
                }
            };
            if options.skip_binary && is_binary(&content) {
                #[cfg(feature = "logging")]
                tracing::debug!("Binary file skipped: {}", relative);
                outcome.skipped.push(SkippedFile {
                    path: relative,
                    reason: SkipReason::Binary,
                });
                continue;
            }
            #[cfg(feature = "logging")]
            tracing::trace!("Selected {} ({} bytes)", relative, content.len());
            outcome.entries.push(FileEntry {
                relative_path: relative,
                content,
            });
        }
        Ok(outcome)
    }
}

/// First-match test of `file_name` against `"." + suffix` candidates.
fn matches_suffix(file_name: &str, dotted_suffixes: &[String]) -> bool {
    dotted_suffixes
        .iter()
        .any(|suffix| file_name.ends_with(suffix.as_str()))
}

fn record_or_fail(
    options: &MergeOptions,
    err: MergeError,
    outcome: &mut SelectOutcome,
) -> Result<(), MergeError> {
    if !options.skip_unreadable || !err.is_skippable() {
        return Err(err);
    }
    let (path, detail) = match &err {
        MergeError::Io { path, source } => (relative_path(&options.root, path), source.to_string()),
        MergeError::Walk {
            path: Some(path),
            message,
        } => (relative_path(&options.root, path), message.clone()),
        other => (UNKNOWN_PATH.to_string(), other.to_string()),
    };
    #[cfg(feature = "logging")]
    tracing::warn!("Skipping unreadable entry {}: {}", path, detail);
    outcome.skipped.push(SkippedFile {
        path,
        reason: SkipReason::Unreadable(detail),
    });
    Ok(())
}

fn read_file_content(path: &Path) -> Result<Vec<u8>, MergeError> {
    let mut file = File::open(path).map_err(|e| MergeError::io(path, e))?;
    let mut content = Vec::new();
    file.read_to_end(&mut content).map_err(|e| MergeError::io(path, e))?;
    Ok(content)
}

fn is_binary(content: &[u8]) -> bool {
    let head = &content[..content.len().min(BINARY_SNIFF_LEN)];
    content_inspector::inspect(head).is_binary()
}

/// `path` relative to `root`, segments joined with `/` on every platform.
///
/// Non UTF-8 segments are converted lossily, so two names differing only in
/// invalid bytes map to the same string.
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walks `options.root` and returns every regular file whose name ends with
/// `"." + suffix` for one of the configured suffixes.
///
/// Entries come back in walk order; use [`sort_entries`] for a reproducible
/// order.
///
/// # Errors
///
/// Fails before walking if the options are invalid (see
/// [`MergeOptions::validate`]). During the walk the first I/O failure aborts
/// the whole selection, unless `skip_unreadable` is set, in which case it is
/// recorded in [`SelectOutcome::skipped`]. A symlink cycle is always fatal.
pub fn select(options: &MergeOptions) -> Result<SelectOutcome, MergeError> {
    options.validate()?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Selecting {:?} under {}",
        options.suffixes,
        options.root.display()
    );
    let outcome = Walker::new(options)?.collect()?;
    #[cfg(feature = "logging")]
    tracing::info!(
        "Selected {} files ({} skipped)",
        outcome.entries.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}

/// Sorts entries by the bytes of their relative path. The sort is stable and
/// neither locale aware nor case folding.
pub fn sort_entries(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by(|a, b| a.relative_path.as_bytes().cmp(b.relative_path.as_bytes()));
    entries
}

/// Runs the whole pipeline: validate, select, sort and write the merged
/// document to `options.output`.
///
/// Nothing is written when validation or selection fails. An empty selection
/// still produces an empty output file.
pub fn merge(options: MergeOptions) -> Result<MergeSummary, MergeError> {
    if !options.encoding_is_utf8() {
        #[cfg(feature = "logging")]
        tracing::warn!(
            "Encoding '{}' is recorded only; file bytes are copied without transcoding",
            options.encoding
        );
    }
    let outcome = select(&options)?;
    let entries = sort_entries(outcome.entries);
    let bytes_written = write_merged(&entries, &options.output)?;
    #[cfg(feature = "logging")]
    tracing::info!(
        "Wrote {} bytes for {} files to {}",
        bytes_written,
        entries.len(),
        options.output.display()
    );
    Ok(MergeSummary {
        output: options.output,
        files: entries.into_iter().map(|e| e.relative_path).collect(),
        bytes_written,
        skipped: outcome.skipped,
    })
}
