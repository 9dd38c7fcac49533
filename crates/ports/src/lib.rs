//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: turning roots, path lists or literal strings into `(path, is_dir)` entries
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
