pub mod config;
pub mod fs_op;
pub mod ip;
pub mod logging;
pub mod text;

pub use crate::config::PathConfig;
pub use crate::fs_op::{
    append_line, list_paths, open_file, read_lines, read_text, remove_line, resolve_file,
    resolve_folder, write_text, CreateFile, FileMode, FsOpError, PathResolver, Result,
};
pub use crate::ip::{deterministic_ip, ip_with_rng};
pub use crate::logging::init_logging;
pub use crate::text::{h_autocorrect, is_letter, is_word};
