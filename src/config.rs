//! Defaults for path resolution, loadable from TOML.
//!
//! ```toml
//! create_missing = true
//! create_file = { with_content = "" }   # or: create_file = "skip"
//! ```

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fs_op::error::{FsOpError, Result};
use crate::fs_op::path::CreateFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Create missing folders while resolving.
    pub create_missing: bool,
    /// Whether and how to create the target file of a file resolution.
    pub create_file: CreateFile,
}

impl Default for PathConfig {
    fn default() -> Self {
        PathConfig {
            create_missing: true,
            create_file: CreateFile::default(),
        }
    }
}

impl PathConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        match std::fs::read_to_string(p) {
            Ok(s) => Self::from_toml_str(&s),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %p.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(FsOpError::io(p, e)),
        }
    }

    pub fn to_toml_string(&self) -> String {
        // A struct of a bool and a plain enum always serializes.
        toml::to_string(self).unwrap_or_default()
    }
}
