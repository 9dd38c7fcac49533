// src/lib.rs
//! `file_classify`: assign an extension category and a test-file flag to paths.
//!
//! The classification rules live in [`file_classify_domain`] and are re-exported here;
//! the remaining modules wire them to the command line.
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use file_classify_domain::{ExtensionTag, FileClassifier, FileInfo, classify, is_test_file};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
