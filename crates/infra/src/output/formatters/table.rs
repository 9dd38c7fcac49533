use std::io::Write;

use file_classify_domain::{ClassifiedEntry, analytics::Summary};
use file_classify_shared_kernel::Result;

use super::{display_path, yes_no};

pub fn output_table(entries: &[ClassifiedEntry], summary: &Summary, full: bool, out: &mut impl Write) -> Result<()> {
    if full {
        write_table_header(out)?;
        write_table_rows(entries, out)?;
    }
    write_groups(summary, out)?;
    write_total(summary, out)
}

fn write_table_header(out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{:<12}{:<6}PATH", "EXT", "TEST")?;
    writeln!(out, "----------------------------------------------")?;
    Ok(())
}

fn write_table_rows(entries: &[ClassifiedEntry], out: &mut impl Write) -> Result<()> {
    for entry in entries {
        writeln!(out, "{:<12}{:<6}{}", entry.extension().as_str(), yes_no(entry.is_test()), display_path(entry))?;
    }
    writeln!(out, "---")?;
    Ok(())
}

fn write_groups(summary: &Summary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "[By Extension]")?;
    writeln!(out, "{:>8}{:>8}  EXT", "FILES", "TESTS")?;
    for group in &summary.groups {
        writeln!(out, "{:>8}{:>8}  {}", group.files, group.tests, group.extension)?;
    }
    writeln!(out, "---")?;
    Ok(())
}

fn write_total(summary: &Summary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:>8}{:>8}  TOTAL ({} dirs)", summary.files, summary.tests, summary.dirs)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use file_classify_domain::FileInfo;

    use super::*;

    #[test]
    fn directories_get_trailing_slash() {
        let entries = vec![ClassifiedEntry::new("src", true, FileInfo::fallback())];
        let summary = Summary::from_entries(&entries);
        let mut buf = Vec::new();
        output_table(&entries, &summary, true, &mut buf).expect("render succeeds");
        let out = String::from_utf8(buf).expect("utf8");
        assert!(out.contains("default     no    src/"));
        assert!(out.contains("TOTAL (1 dirs)"));
    }
}
