// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use file_classify_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling path enumeration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnumerationPlan {
    pub roots: Vec<PathBuf>,
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    /// Report directories as entries in addition to files.
    pub include_dirs: bool,
    pub include_globs: Vec<String>,
    pub exclude_globs: Vec<String>,
    /// Newline separated list; `-` reads stdin.
    pub files_from: Option<PathBuf>,
    /// NUL separated list.
    pub files_from0: Option<PathBuf>,
    /// Treat `roots` as plain strings; a trailing `/` marks a directory.
    pub literal: bool,
    pub walk_threads: usize,
}

/// DTO representing a path discovered by an input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntryDto {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl PathEntryDto {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), is_dir: false }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), is_dir: true }
    }
}

/// Port for enumerating path entries.
pub trait PathEnumerator: Send + Sync {
    fn collect(&self, plan: &EnumerationPlan) -> Result<Vec<PathEntryDto>>;
}
