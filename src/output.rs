//! Rendering of the merged document.
//!
//! Each entry becomes a header line with its relative path, followed by a
//! fenced block tagged with the label from [`crate::classify`]. Consecutive
//! blocks are separated by one blank line and the document has no trailing
//! blank line.

use crate::classify::classify;
use crate::error::MergeError;
use crate::types::FileEntry;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Shortest fence, used unless the content itself contains a backtick run of
/// this length or more.
const MIN_FENCE_LEN: usize = 3;

/// Writes `entries` to `out` in the given order and returns the number of
/// bytes written.
pub fn render<W: Write>(entries: &[FileEntry], out: &mut W) -> io::Result<u64> {
    let mut written = 0u64;
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            out.write_all(b"\n")?;
            written += 1;
        }
        let fence = fence_for(&entry.content);
        let header = format!(
            "{}:\n{}{}\n",
            entry.relative_path,
            fence,
            classify(&entry.relative_path)
        );
        out.write_all(header.as_bytes())?;
        out.write_all(&entry.content)?;
        written += (header.len() + entry.content.len()) as u64;
        if !entry.content.ends_with(b"\n") {
            out.write_all(b"\n")?;
            written += 1;
        }
        out.write_all(fence.as_bytes())?;
        out.write_all(b"\n")?;
        written += fence.len() as u64 + 1;
    }
    Ok(written)
}

/// Renders `entries` into an in-memory buffer.
pub fn format_merged(entries: &[FileEntry]) -> Vec<u8> {
    let mut out = Vec::new();
    render(entries, &mut out).expect("writing to a Vec cannot fail");
    out
}

/// Writes the merged document to `path`.
///
/// The document is rendered into a temporary file next to the destination
/// and then renamed over it, so a failed write never leaves a truncated
/// destination. An existing destination is resolved through symlinks first
/// and keeps its permissions; a new one is created honoring the umask.
/// Errors carry `path` as given.
pub fn write_merged(entries: &[FileEntry], path: impl AsRef<Path>) -> Result<u64, MergeError> {
    let path = path.as_ref();
    let (target, existing) = match fs::canonicalize(path) {
        Ok(resolved) => {
            let permissions = fs::metadata(&resolved)
                .map_err(|e| MergeError::io(path, e))?
                .permissions();
            (resolved, Some(permissions))
        }
        Err(_) => (path.to_path_buf(), None),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| MergeError::io(path, e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| MergeError::io(path, e))?;
    }
    let written = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let written = render(entries, &mut writer).map_err(|e| MergeError::io(path, e))?;
        writer.flush().map_err(|e| MergeError::io(path, e))?;
        written
    };
    tmp.persist(&target).map_err(|e| MergeError::io(path, e.error))?;
    Ok(written)
}

/// Picks a fence longer than any backtick run inside `content`.
fn fence_for(content: &[u8]) -> String {
    let mut longest = 0;
    let mut run = 0;
    for &byte in content {
        if byte == b'`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    let len = if longest >= MIN_FENCE_LEN {
        longest + 1
    } else {
        MIN_FENCE_LEN
    };
    "`".repeat(len)
}
