use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::PathConfig;
use crate::fs_op::error::{FsOpError, Result};
use crate::fs_op::files;

/// What to do about the target file when resolving a file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateFile {
    /// Never create the file.
    Skip,
    /// Create the file with this content if it does not exist yet.
    WithContent(String),
}

impl CreateFile {
    /// Create an empty file if it does not exist yet.
    pub fn empty() -> Self {
        CreateFile::WithContent(String::new())
    }
}

impl Default for CreateFile {
    fn default() -> Self {
        CreateFile::empty()
    }
}

/// Resolves folders and files relative to the directory that holds a
/// caller reference path.
///
/// The reference path itself is never read or written; only its parent
/// directory matters. For `"/srv/tool/main.rs"` the anchor is `"/srv/tool"`.
#[derive(Debug, Clone)]
pub struct PathResolver {
    anchor: PathBuf,
    config: PathConfig,
}

impl PathResolver {
    /// Anchor at the directory containing `caller_ref`, with default config.
    pub fn new<P: AsRef<Path>>(caller_ref: P) -> Self {
        Self::with_config(caller_ref, PathConfig::default())
    }

    pub fn with_config<P: AsRef<Path>>(caller_ref: P, config: PathConfig) -> Self {
        let anchor = caller_ref
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        PathResolver { anchor, config }
    }

    /// Anchor at the directory containing the running executable.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| FsOpError::io("<current exe>", e))?;
        Ok(Self::new(exe))
    }

    pub fn anchor(&self) -> &Path {
        &self.anchor
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Join `segments` onto the anchor, creating each missing prefix when
    /// `create_missing` is set in the config.
    pub fn folder<S: AsRef<str>>(&self, segments: &[S]) -> Result<PathBuf> {
        let mut dir = self.anchor.clone();
        for seg in segments {
            dir.push(seg.as_ref());
            if self.config.create_missing && !files::exists(&dir) {
                fs::create_dir_all(&dir).map_err(|e| FsOpError::CreateDir {
                    path: dir.clone(),
                    source: e,
                })?;
                tracing::debug!(path = %dir.display(), "created directory");
            }
        }
        Ok(dir)
    }

    /// Resolve a file path; the last segment is the file name.
    ///
    /// The folder part goes through [`PathResolver::folder`]. The file is then
    /// created according to `create_file` in the config. Creation is
    /// write-once: an existing file keeps its content.
    pub fn file<S: AsRef<str>>(&self, segments: &[S]) -> Result<PathBuf> {
        let (name, folders) = segments.split_last().ok_or(FsOpError::MissingFileName)?;
        let path = self.folder(folders)?.join(name.as_ref());
        if let CreateFile::WithContent(content) = &self.config.create_file {
            files::create_new_with(&path, content)?;
        }
        Ok(path)
    }
}

/// Resolve a folder next to `caller_ref`.
///
/// For a caller at `"D:/prog/main.rs"`, `resolve_folder(caller, &["a", "b"], true)`
/// returns `"D:/prog/a/b"`, creating `a` and `a/b` if they are missing. With
/// `create_missing == false` the joined path is returned as-is.
pub fn resolve_folder<P, S>(caller_ref: P, segments: &[S], create_missing: bool) -> Result<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let config = PathConfig {
        create_missing,
        ..PathConfig::default()
    };
    PathResolver::with_config(caller_ref, config).folder(segments)
}

/// Resolve a file next to `caller_ref`. See [`PathResolver::file`].
pub fn resolve_file<P, S>(
    caller_ref: P,
    segments: &[S],
    create_missing: bool,
    create_file: CreateFile,
) -> Result<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let config = PathConfig {
        create_missing,
        create_file,
    };
    PathResolver::with_config(caller_ref, config).file(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn caller_in(td: &TempDir) -> PathBuf {
        td.path().join("main.rs")
    }

    #[test]
    fn anchor_is_parent_of_caller() {
        let r = PathResolver::new("/srv/tool/main.rs");
        assert_eq!(r.anchor(), Path::new("/srv/tool"));
    }

    #[test]
    fn bare_file_name_anchors_at_relative_root() {
        let r = PathResolver::new("main.rs");
        assert_eq!(r.anchor(), Path::new(""));
        let got = resolve_folder("main.rs", &["x", "y"], false).unwrap();
        assert_eq!(got, PathBuf::from("x").join("y"));
    }

    #[test]
    fn folder_creates_each_prefix() {
        let td = TempDir::new().unwrap();
        let got = resolve_folder(caller_in(&td), &["a", "b"], true).unwrap();
        assert_eq!(got, td.path().join("a").join("b"));
        assert!(td.path().join("a").is_dir());
        assert!(got.is_dir());
    }

    #[test]
    fn folder_without_create_has_no_side_effects() {
        let td = TempDir::new().unwrap();
        let got = resolve_folder(caller_in(&td), &["ghost"], false).unwrap();
        assert_eq!(got, td.path().join("ghost"));
        assert!(!got.exists());
    }

    #[test]
    fn folder_with_no_segments_is_anchor() {
        let td = TempDir::new().unwrap();
        let got = resolve_folder::<_, &str>(caller_in(&td), &[], true).unwrap();
        assert_eq!(got, td.path());
    }

    #[cfg(unix)]
    #[test]
    fn folder_creation_failure_names_prefix() {
        let td = TempDir::new().unwrap();
        // A regular file where a directory is expected.
        std::fs::write(td.path().join("blocker"), b"x").unwrap();
        let err = resolve_folder(caller_in(&td), &["blocker", "inner"], true).unwrap_err();
        match err {
            FsOpError::CreateDir { path, .. } => {
                assert_eq!(path, td.path().join("blocker").join("inner"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn file_created_empty_by_default() {
        let td = TempDir::new().unwrap();
        let f = resolve_file(caller_in(&td), &["d", "f.txt"], true, CreateFile::default()).unwrap();
        assert_eq!(f, td.path().join("d").join("f.txt"));
        assert_eq!(std::fs::read_to_string(&f).unwrap(), "");
    }

    #[test]
    fn skip_never_creates_file() {
        let td = TempDir::new().unwrap();
        let f = resolve_file(caller_in(&td), &["d", "f.txt"], true, CreateFile::Skip).unwrap();
        assert!(td.path().join("d").is_dir(), "folders still created");
        assert!(!f.exists());
    }

    #[test]
    fn file_without_segments_is_error() {
        let td = TempDir::new().unwrap();
        let err = resolve_file::<_, &str>(caller_in(&td), &[], true, CreateFile::Skip).unwrap_err();
        assert!(matches!(err, FsOpError::MissingFileName));
    }

    #[test]
    fn create_file_config_round_trips_through_toml() {
        let cfg: PathConfig = toml::from_str("create_file = { with_content = \"hi\" }").unwrap();
        assert_eq!(cfg.create_file, CreateFile::WithContent("hi".into()));
        let cfg: PathConfig = toml::from_str("create_file = \"skip\"").unwrap();
        assert_eq!(cfg.create_file, CreateFile::Skip);
    }
}
