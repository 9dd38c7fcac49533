use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{extension::ExtensionTag, model::ClassifiedEntry};

/// Aggregation for a single extension tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    pub extension: ExtensionTag,
    pub files: usize,
    pub tests: usize,
}

/// Per-tag counts plus totals over a classified run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub groups: Vec<TagGroup>,
    pub files: usize,
    pub tests: usize,
    pub dirs: usize,
}

impl Summary {
    /// Directories are counted in `dirs` only; they never join a tag group.
    pub fn from_entries(entries: &[ClassifiedEntry]) -> Self {
        let mut map: HashMap<ExtensionTag, (usize, usize)> = HashMap::new();
        let mut dirs = 0;
        for entry in entries {
            if entry.is_dir {
                dirs += 1;
                continue;
            }
            let slot = map.entry(entry.extension()).or_insert((0, 0));
            slot.0 += 1;
            slot.1 += usize::from(entry.is_test());
        }

        let mut groups: Vec<TagGroup> =
            map.into_iter().map(|(extension, (files, tests))| TagGroup { extension, files, tests }).collect();
        groups.sort_by(|a, b| b.files.cmp(&a.files).then_with(|| a.extension.as_str().cmp(b.extension.as_str())));

        let files = groups.iter().map(|g| g.files).sum();
        let tests = groups.iter().map(|g| g.tests).sum();
        Self { groups, files, tests, dirs }
    }

    pub fn group(&self, extension: ExtensionTag) -> Option<&TagGroup> {
        self.groups.iter().find(|g| g.extension == extension)
    }
}
