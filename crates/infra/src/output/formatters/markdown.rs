use std::io::Write;

use file_classify_domain::{ClassifiedEntry, analytics::Summary};
use file_classify_shared_kernel::Result;

use super::{display_path, yes_no};

pub fn output_markdown(entries: &[ClassifiedEntry], summary: &Summary, full: bool, out: &mut impl Write) -> Result<()> {
    if full {
        write_markdown_entries(entries, out)?;
        writeln!(out)?;
    }
    write_markdown_groups(summary, out)
}

fn write_markdown_entries(entries: &[ClassifiedEntry], out: &mut impl Write) -> Result<()> {
    writeln!(out, "| PATH | EXT | TEST |\n|:---|:---|:---:|")?;
    for entry in entries {
        let path = display_path(entry).replace('|', "\\|");
        writeln!(out, "| `{path}` | {} | {} |", entry.extension(), yes_no(entry.is_test()))?;
    }
    Ok(())
}

fn write_markdown_groups(summary: &Summary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "### By extension\n")?;
    writeln!(out, "| EXT | FILES | TESTS |\n|:---|---:|---:|")?;
    for group in &summary.groups {
        writeln!(out, "| {} | {} | {} |", group.extension, group.files, group.tests)?;
    }
    writeln!(out, "| **TOTAL** | {} | {} |", summary.files, summary.tests)?;
    Ok(())
}
