use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Path that selects stdin for list inputs.
pub const STDIN_MARKER: &str = "-";

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Buffered reader over `path`, or over stdin when `path` is `-`.
    pub fn open_buffered(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
        if path.as_os_str() == STDIN_MARKER {
            return Ok(Box::new(BufReader::new(std::io::stdin())));
        }
        Self::open(path).map(|f| Box::new(BufReader::new(f)) as Box<dyn BufRead>)
    }

    /// Read the entire input into memory (stdin when `path` is `-`).
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut reader = Self::open_buffered(path)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
