//! Filesystem helpers: caller-relative paths, scoped UTF-8 file access,
//! single-line edits and directory listing.

pub mod error;
pub mod files;
pub mod lines;
pub mod listing;
pub mod path;

pub use error::{FsOpError, Result};
pub use files::{open_file, read_text, write_text, FileMode};
pub use lines::{append_line, read_lines, remove_line};
pub use listing::list_paths;
pub use path::{resolve_file, resolve_folder, CreateFile, PathResolver};
