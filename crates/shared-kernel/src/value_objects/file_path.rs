// crates/shared-kernel/src/value_objects/file_path.rs
use std::{
    borrow::{Borrow, Cow},
    fmt,
    ops::Deref,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Wrapper around `PathBuf` that guarantees UTF-8 displayability in higher layers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns a UTF-8 view suitable for classification and UI; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }

    /// Forward-slash rendering so that output is stable across platforms.
    pub fn to_slash_string(&self) -> String {
        let lossy = self.0.to_string_lossy();
        if std::path::MAIN_SEPARATOR == '/' {
            lossy.into_owned()
        } else {
            lossy.replace(std::path::MAIN_SEPARATOR, "/")
        }
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_path_buf())
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl From<String> for FilePath {
    fn from(path: String) -> Self {
        Self::new(PathBuf::from(path))
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Deref for FilePath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<Path> for FilePath {
    fn borrow(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
