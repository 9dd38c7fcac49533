// crates/domain/src/model.rs
use file_classify_shared_kernel::FilePath;
use serde::{Deserialize, Serialize};

use crate::extension::ExtensionTag;

/// Classification result for a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FileInfo {
    pub extension: ExtensionTag,
    pub is_test: bool,
}

impl FileInfo {
    /// `{ default, not a test }`, returned for directories and unrecognised paths.
    #[must_use]
    pub const fn fallback() -> Self {
        Self { extension: ExtensionTag::Default, is_test: false }
    }
}

/// A path together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    pub path: FilePath,
    pub is_dir: bool,
    #[serde(flatten)]
    pub info: FileInfo,
}

impl ClassifiedEntry {
    pub fn new(path: impl Into<FilePath>, is_dir: bool, info: FileInfo) -> Self {
        Self { path: path.into(), is_dir, info }
    }

    #[must_use]
    pub fn extension(&self) -> ExtensionTag {
        self.info.extension
    }

    #[must_use]
    pub fn is_test(&self) -> bool {
        self.info.is_test
    }
}
