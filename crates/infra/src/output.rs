// crates/infra/src/output.rs
pub mod formatters;
mod records;
mod writer;

use std::{io::Write, path::PathBuf};

use file_classify_domain::{
    ClassifiedEntry,
    analytics::Summary,
    options::{OutputFormat, OutputMode},
};
use file_classify_shared_kernel::{InfrastructureError, Result};
use formatters::{output_delimited, output_json, output_jsonl, output_markdown, output_table, output_yaml};
pub use records::{EntryRecord, Report};
pub use writer::OutputWriter;

/// 出力先と形式
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub mode: OutputMode,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
}

/// Emit results to the configured destination and format.
pub fn emit(entries: &[ClassifiedEntry], summary: &Summary, options: &OutputOptions) -> Result<()> {
    let mut writer = OutputWriter::create(options.output.as_deref())?;
    render(entries, summary, options.format, options.mode, &mut writer)?;
    writer.flush().map_err(|source| match &options.output {
        Some(path) => InfrastructureError::FileWrite { path: path.clone(), source },
        None => source.into(),
    })?;
    log::debug!("wrote {} entries as {:?}", entries.len(), options.format);
    Ok(())
}

/// Render into any writer. Summary mode drops the entry listing.
pub fn render(
    entries: &[ClassifiedEntry],
    summary: &Summary,
    format: OutputFormat,
    mode: OutputMode,
    out: &mut impl Write,
) -> Result<()> {
    let entries = match mode {
        OutputMode::Full => entries,
        OutputMode::Summary => &[],
    };
    let full = mode == OutputMode::Full;
    match format {
        OutputFormat::Table => output_table(entries, summary, full, out),
        OutputFormat::Csv => output_delimited(entries, summary, full, ',', out),
        OutputFormat::Tsv => output_delimited(entries, summary, full, '\t', out),
        OutputFormat::Json => output_json(entries, summary, full, out),
        OutputFormat::Jsonl => output_jsonl(entries, summary, out),
        OutputFormat::Yaml => output_yaml(entries, summary, full, out),
        OutputFormat::Md => output_markdown(entries, summary, full, out),
    }
}
