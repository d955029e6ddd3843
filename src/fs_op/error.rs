use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the path, file and line helpers.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Wrapper for underlying IO errors, with the path being accessed.
    #[error("I/O error at `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory (or one of its ancestors) could not be created.
    #[error("failed to create directory `{}`: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `remove_line` was asked to remove a line the file does not contain.
    #[error("line {line:?} not found in `{}`", .path.display())]
    LineNotFound { path: PathBuf, line: String },

    /// A file path was requested without any segments.
    #[error("path has no filename")]
    MissingFileName,

    /// Malformed configuration text.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl FsOpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsOpError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FsOpError>;
