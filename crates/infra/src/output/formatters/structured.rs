// crates/infra/src/output/formatters/structured.rs
use std::io::Write;

use file_classify_domain::{ClassifiedEntry, analytics::Summary};
use file_classify_shared_kernel::Result;

use crate::output::records::Report;

pub fn output_json(entries: &[ClassifiedEntry], summary: &Summary, full: bool, out: &mut impl Write) -> Result<()> {
    let report = Report::new(entries, summary, full);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
pub fn output_yaml(entries: &[ClassifiedEntry], summary: &Summary, full: bool, out: &mut impl Write) -> Result<()> {
    let report = Report::new(entries, summary, full);
    let yaml_str = serde_yaml::to_string(&report)?;
    write!(out, "{yaml_str}")?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
pub fn output_yaml(
    _entries: &[ClassifiedEntry],
    _summary: &Summary,
    _full: bool,
    _out: &mut impl Write,
) -> Result<()> {
    Err(file_classify_shared_kernel::InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    }
    .into())
}
