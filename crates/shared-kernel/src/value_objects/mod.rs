// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_path;

pub use file_path::FilePath;
