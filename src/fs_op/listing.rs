use std::fs;
use std::path::{Path, PathBuf};

use crate::fs_op::error::{FsOpError, Result};

/// Return `dir.join(name)` for every entry (files and directories) in `dir`.
///
/// Entries come back in whatever order the filesystem enumerates them; the
/// result is not sorted.
pub fn list_paths<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let d = dir.as_ref();
    let entries = fs::read_dir(d).map_err(|e| FsOpError::io(d, e))?;
    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FsOpError::io(d, e))?;
        out.push(d.join(entry.file_name()));
    }
    tracing::trace!(dir = %d.display(), count = out.len(), "listed directory");
    Ok(out)
}
