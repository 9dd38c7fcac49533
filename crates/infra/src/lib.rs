// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod output;
pub mod persistence;

pub use filesystem::PlanPathEnumerator;
pub use output::{OutputOptions, emit};
