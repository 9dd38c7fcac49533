use file_classify_domain::{ClassifiedEntry, FileClassifier, analytics::SortStrategy, analytics::Summary};
use file_classify_ports::filesystem::{PathEntryDto, PathEnumerator};
use file_classify_shared_kernel::{ApplicationError, Result};

use crate::dto::{ClassifyOutput, ClassifyRequest};

pub struct ClassifyPaths<'a> {
    enumerator: &'a dyn PathEnumerator,
    classifier: &'a FileClassifier,
}

impl<'a> ClassifyPaths<'a> {
    pub fn new(enumerator: &'a dyn PathEnumerator, classifier: &'a FileClassifier) -> Self {
        Self { enumerator, classifier }
    }

    pub fn run(&self, request: &ClassifyRequest) -> Result<ClassifyOutput> {
        let found = self.enumerator.collect(&request.plan).map_err(|e| ApplicationError::PathCollectionFailed {
            reason: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        log::debug!("enumerated {} paths", found.len());

        let mut entries: Vec<ClassifiedEntry> =
            self.classify_all(found).into_iter().filter(|e| request.filter.accepts(e)).collect();
        log::debug!("{} entries after filtering", entries.len());

        SortStrategy::from_flags(&request.sort).apply(&mut entries);
        let summary = Summary::from_entries(&entries);
        if let Some(top) = request.top {
            entries.truncate(top);
        }

        Ok(ClassifyOutput { entries, summary })
    }

    #[cfg(feature = "parallel")]
    fn classify_all(&self, found: Vec<PathEntryDto>) -> Vec<ClassifiedEntry> {
        use rayon::prelude::*;
        found.into_par_iter().map(|dto| classify_one(self.classifier, dto)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn classify_all(&self, found: Vec<PathEntryDto>) -> Vec<ClassifiedEntry> {
        found.into_iter().map(|dto| classify_one(self.classifier, dto)).collect()
    }
}

fn classify_one(classifier: &FileClassifier, dto: PathEntryDto) -> ClassifiedEntry {
    let info = classifier.classify(&dto.path.to_string_lossy(), dto.is_dir);
    ClassifiedEntry::new(dto.path, dto.is_dir, info)
}
