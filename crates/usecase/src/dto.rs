use file_classify_domain::{ClassifiedEntry, EntryFilter, analytics::Summary, options::SortKey};
use file_classify_ports::filesystem::EnumerationPlan;

/// Everything [`crate::ClassifyPaths`] needs for a single run.
#[derive(Debug, Clone, Default)]
pub struct ClassifyRequest {
    pub plan: EnumerationPlan,
    pub filter: EntryFilter,
    pub sort: Vec<(SortKey, bool)>,
    pub top: Option<usize>,
}

/// Classified entries (filtered, sorted, truncated) and the summary computed
/// over the filtered set before truncation.
#[derive(Debug, Clone)]
pub struct ClassifyOutput {
    pub entries: Vec<ClassifiedEntry>,
    pub summary: Summary,
}
