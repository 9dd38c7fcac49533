// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::{model::ClassifiedEntry, options::SortKey};

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

/// ソート戦略
///
/// Keys are applied in order; the path is always the final tie-breaker so the
/// result is deterministic.
#[derive(Debug, Clone, Default)]
pub struct SortStrategy {
    specs: Vec<(SortKey, SortOrder)>,
}

impl SortStrategy {
    pub fn new(specs: Vec<(SortKey, SortOrder)>) -> Self {
        Self { specs }
    }

    pub fn from_flags(specs: &[(SortKey, bool)]) -> Self {
        Self::new(specs.iter().map(|&(key, desc)| (key, desc.into())).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn apply(&self, entries: &mut [ClassifiedEntry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &ClassifiedEntry, b: &ClassifiedEntry) -> Ordering {
        for (key, order) in &self.specs {
            let cmp = key.compare(a, b);
            if cmp != Ordering::Equal {
                return order.apply(cmp);
            }
        }
        a.path.cmp(&b.path)
    }
}

impl SortKey {
    #[inline]
    pub fn compare(self, a: &ClassifiedEntry, b: &ClassifiedEntry) -> Ordering {
        match self {
            Self::Path => a.path.cmp(&b.path),
            Self::Ext => a.extension().as_str().cmp(b.extension().as_str()),
            Self::Test => a.is_test().cmp(&b.is_test()),
        }
    }
}
