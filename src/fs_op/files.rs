//! Scoped UTF-8 file access.
//!
//! Every helper opens its handle, does its work and lets the handle drop
//! before returning, so nothing is kept open across calls. Text is always
//! treated as UTF-8: reads of invalid data fail with an `Io` error of kind
//! `InvalidData`.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use crate::fs_op::error::{FsOpError, Result};

/// How a file should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Read an existing file.
    Read,
    /// Create or truncate, then write.
    Write,
    /// Create if missing, write at end of file.
    Append,
    /// Create if missing, read from anywhere, write at end of file.
    ReadAppend,
    /// Read and write an existing file without truncating it.
    ReadWrite,
}

impl FileMode {
    fn options(self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        match self {
            FileMode::Read => opts.read(true),
            FileMode::Write => opts.write(true).create(true).truncate(true),
            FileMode::Append => opts.append(true).create(true),
            FileMode::ReadAppend => opts.read(true).append(true).create(true),
            FileMode::ReadWrite => opts.read(true).write(true),
        };
        opts
    }
}

/// Open `path` with the given `mode`.
pub fn open_file<P: AsRef<Path>>(path: P, mode: FileMode) -> Result<File> {
    let p = path.as_ref();
    tracing::trace!(path = %p.display(), ?mode, "opening file");
    mode.options().open(p).map_err(|e| FsOpError::io(p, e))
}

/// Read the whole file as UTF-8 text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let p = path.as_ref();
    let mut file = open_file(p, FileMode::Read)?;
    let mut buf = String::new();
    file.read_to_string(&mut buf)
        .map_err(|e| FsOpError::io(p, e))?;
    Ok(buf)
}

/// Replace the file's content with `text`, creating it if needed.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let p = path.as_ref();
    let mut file = open_file(p, FileMode::Write)?;
    file.write_all(text.as_bytes())
        .map_err(|e| FsOpError::io(p, e))
}

/// Create `path` and write `text` only if it does not exist yet.
///
/// Returns `true` when the file was created. An existing file is left
/// untouched.
pub(crate) fn create_new_with<P: AsRef<Path>>(path: P, text: &str) -> Result<bool> {
    let p = path.as_ref();
    match OpenOptions::new().write(true).create_new(true).open(p) {
        Ok(mut file) => {
            file.write_all(text.as_bytes())
                .map_err(|e| FsOpError::io(p, e))?;
            tracing::debug!(path = %p.display(), bytes = text.len(), "created file");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(FsOpError::io(p, e)),
    }
}

/// Return `true` if the provided `path` exists.
pub(crate) fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}
