// crates/infra/src/output/records.rs
use file_classify_domain::{ClassifiedEntry, ExtensionTag, analytics::Summary};
use serde::Serialize;

/// Serialised form of one entry. Paths always use `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub path: String,
    pub extension: ExtensionTag,
    pub is_test: bool,
    pub is_dir: bool,
}

impl From<&ClassifiedEntry> for EntryRecord {
    fn from(entry: &ClassifiedEntry) -> Self {
        Self {
            path: entry.path.to_slash_string(),
            extension: entry.extension(),
            is_test: entry.is_test(),
            is_dir: entry.is_dir,
        }
    }
}

/// Top-level document for JSON / YAML.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<EntryRecord>>,
    pub summary: &'a Summary,
}

impl<'a> Report<'a> {
    pub fn new(entries: &[ClassifiedEntry], summary: &'a Summary, full: bool) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            entries: full.then(|| entries.iter().map(EntryRecord::from).collect()),
            summary,
        }
    }
}

/// One JSONL line.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum JsonlLine<'a> {
    Entry(EntryRecord),
    Summary(&'a Summary),
}
