// crates/infra/src/output/writer.rs
use std::{
    io::{self, Write},
    path::Path,
};

use file_classify_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Buffered sink over stdout or a file.
pub struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    pub fn create(output: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = output {
            let file = FileWriter::create(path)
                .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
            Box::new(file)
        } else {
            Box::new(io::BufWriter::new(io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
