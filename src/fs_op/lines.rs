//! Append or remove a single line of a UTF-8 text file.
//!
//! A file's content is treated as lines joined by `\n` with no trailing
//! newline. Lines passed in must not contain `\n` themselves; if they do,
//! the result is unspecified.
//!
//! Neither operation is safe against concurrent writers of the same file:
//! `remove_line` reads, edits and rewrites the whole file.

use std::io::{Read, Write};
use std::path::Path;

use crate::fs_op::error::{FsOpError, Result};
use crate::fs_op::files::{self, FileMode};

/// Add `line` to the end of the file at `path`, creating it if needed.
///
/// If the file already has content, a single `\n` separator is written
/// first. Existing bytes are never rewritten.
///
/// ```text
/// existing line 1
/// existing line 2
/// <line>
/// ```
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<()> {
    let p = path.as_ref();
    let mut file = files::open_file(p, FileMode::ReadAppend)?;
    let mut current = String::new();
    file.read_to_string(&mut current)
        .map_err(|e| FsOpError::io(p, e))?;

    let mut out = String::with_capacity(line.len() + 1);
    if !current.is_empty() {
        out.push('\n');
    }
    out.push_str(line);
    file.write_all(out.as_bytes())
        .map_err(|e| FsOpError::io(p, e))?;
    tracing::debug!(path = %p.display(), line, "appended line");
    Ok(())
}

/// Remove the first line equal to `line` from the file at `path`.
///
/// Callers are expected to know the line is there: if it is not, this
/// returns [`FsOpError::LineNotFound`] and the file is left as it was.
/// Later duplicates of `line` are kept.
pub fn remove_line<P: AsRef<Path>>(path: P, line: &str) -> Result<()> {
    let p = path.as_ref();
    let content = files::read_text(p)?;
    let mut lines: Vec<&str> = content.split('\n').collect();
    let idx = lines
        .iter()
        .position(|l| *l == line)
        .ok_or_else(|| FsOpError::LineNotFound {
            path: p.to_path_buf(),
            line: line.to_string(),
        })?;
    lines.remove(idx);
    files::write_text(p, &lines.join("\n"))?;
    tracing::debug!(path = %p.display(), line, index = idx, "removed line");
    Ok(())
}

/// Read the file's lines, split on `\n`.
///
/// An empty file yields a single empty line, which is the sequence that
/// `append_line` and `remove_line` operate on.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = files::read_text(path)?;
    Ok(content.split('\n').map(str::to_string).collect())
}
