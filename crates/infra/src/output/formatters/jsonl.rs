use std::io::Write;

use file_classify_domain::{ClassifiedEntry, analytics::Summary};
use file_classify_shared_kernel::Result;

use crate::output::records::{EntryRecord, JsonlLine};

/// One `entry` object per line, then a single `summary` line.
pub fn output_jsonl(entries: &[ClassifiedEntry], summary: &Summary, out: &mut impl Write) -> Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *out, &JsonlLine::Entry(EntryRecord::from(entry)))?;
        writeln!(out)?;
    }
    serde_json::to_writer(&mut *out, &JsonlLine::Summary(summary))?;
    writeln!(out)?;
    Ok(())
}
