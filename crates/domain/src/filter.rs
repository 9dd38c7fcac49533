// crates/domain/src/filter.rs
use crate::{extension::ExtensionTag, model::ClassifiedEntry, options::TestFilter};

/// Post-classification filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub tests: TestFilter,
    /// Empty means every tag is allowed.
    pub extensions: Vec<ExtensionTag>,
    pub include_dirs: bool,
}

impl EntryFilter {
    /// Directories bypass the tag and test checks; they only depend on `include_dirs`.
    pub fn accepts(&self, entry: &ClassifiedEntry) -> bool {
        if entry.is_dir {
            return self.include_dirs;
        }
        self.tests.accepts(entry.is_test())
            && (self.extensions.is_empty() || self.extensions.contains(&entry.extension()))
    }
}
