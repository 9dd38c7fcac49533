use std::io::Write;

use file_classify_domain::{ClassifiedEntry, analytics::Summary};
use file_classify_shared_kernel::Result;

use super::display_path;

/// Full mode lists entries; summary mode lists tag groups followed by a `TOTAL` row.
pub fn output_delimited(
    entries: &[ClassifiedEntry],
    summary: &Summary,
    full: bool,
    sep: char,
    out: &mut impl Write,
) -> Result<()> {
    if full {
        write_entries(entries, sep, out)
    } else {
        write_groups(summary, sep, out)
    }
}

fn write_entries(entries: &[ClassifiedEntry], sep: char, out: &mut impl Write) -> Result<()> {
    writeln!(out, "path{sep}extension{sep}is_test{sep}is_dir")?;
    for entry in entries {
        writeln!(
            out,
            "{}{sep}{}{sep}{}{sep}{}",
            escape_field(&display_path(entry), sep),
            entry.extension(),
            entry.is_test(),
            entry.is_dir
        )?;
    }
    Ok(())
}

fn write_groups(summary: &Summary, sep: char, out: &mut impl Write) -> Result<()> {
    writeln!(out, "extension{sep}files{sep}tests")?;
    for group in &summary.groups {
        writeln!(out, "{}{sep}{}{sep}{}", group.extension, group.files, group.tests)?;
    }
    writeln!(out, "TOTAL{sep}{}{sep}{}", summary.files, summary.tests)?;
    Ok(())
}

fn escape_field(s: &str, sep: char) -> String {
    let needs_quotes = s.contains(sep) || s.contains('"') || s.contains('\n') || s.contains('\r');
    match (sep, needs_quotes) {
        (',', true) => format!("\"{}\"", s.replace('"', "\"\"")),
        (_, true) => s.replace(['\t', '\n', '\r'], " "),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(escape_field("a/b.rs", ','), "a/b.rs");
        assert_eq!(escape_field("a,b.rs", ','), "\"a,b.rs\"");
        assert_eq!(escape_field("say \"hi\".md", ','), "\"say \"\"hi\"\".md\"");
    }

    #[test]
    fn tsv_flattens_tabs() {
        assert_eq!(escape_field("a\tb.rs", '\t'), "a b.rs");
    }
}
