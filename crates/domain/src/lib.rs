//! # Domain
//!
//! Path classification rules for `file_classify`:
//!
//! - [`extension`]: the closed [`ExtensionTag`] set
//! - [`classifier`]: [`classify`] / [`is_test_file`] and the configurable [`FileClassifier`]
//! - [`analytics`]: sorting and per-tag summaries
//! - [`filter`]: post-classification filtering
//!
//! Nothing in this crate touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classifier;
pub mod extension;
pub mod filter;
pub mod model;
pub mod options;

pub use classifier::{FileClassifier, TestMatcher, classify, is_test_file};
pub use extension::ExtensionTag;
pub use filter::EntryFilter;
pub use model::{ClassifiedEntry, FileInfo};
