// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, creating missing parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        File::create(path).map(BufWriter::new)
    }
}
