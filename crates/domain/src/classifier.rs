// crates/domain/src/classifier.rs
//! Extension tagging and test-file detection over plain path strings.
//!
//! Both operations are total: malformed, empty or unrecognised input degrades to
//! [`FileInfo::fallback`] instead of failing.

use std::sync::LazyLock;

use file_classify_shared_kernel::{DomainError, DomainResult};
use regex::Regex;

use crate::{extension::ExtensionTag, model::FileInfo};

/// Token that marks a test file regardless of the boundary pattern.
const EXACT_TEST_TOKEN: &str = "test";

static DEFAULT_CLASSIFIER: LazyLock<FileClassifier> = LazyLock::new(FileClassifier::default);

/// Classifies `path` with the default test matcher.
#[must_use]
pub fn classify(path: &str, is_directory: bool) -> FileInfo {
    DEFAULT_CLASSIFIER.classify(path, is_directory)
}

/// Returns `true` if any `.`-separated token of `path` marks a test file.
#[must_use]
pub fn is_test_file(path: &str) -> bool {
    DEFAULT_CLASSIFIER.is_test_file(path)
}

/// Boundary pattern applied to each `.`-separated token.
#[derive(Debug, Clone)]
pub struct TestMatcher {
    pattern: Regex,
}

impl TestMatcher {
    /// `test`, `spec` or `tests` at the start or end of a token, delimited by an
    /// ASCII word boundary. `_` is a word character, so it is accepted explicitly.
    /// Case-sensitive: `Test.java` does not match.
    pub const DEFAULT_PATTERN: &'static str =
        r"^(?:test|spec|tests)(?:[^A-Za-z0-9]|$)|(?:^|[^A-Za-z0-9])(?:test|spec|tests)$";

    /// Compiles a custom token pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> DomainResult<Self> {
        let compiled = Regex::new(pattern).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        log::debug!("compiled test pattern: {pattern}");
        Ok(Self { pattern: compiled })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Checks every `.`-separated token; the exact `test` token always counts.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        path.split('.').any(|token| token == EXACT_TEST_TOKEN || self.pattern.is_match(token))
    }
}

impl Default for TestMatcher {
    fn default() -> Self {
        static DEFAULT: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(TestMatcher::DEFAULT_PATTERN).expect("default test pattern compiles"));
        Self { pattern: DEFAULT.clone() }
    }
}

/// Assigns an [`ExtensionTag`] and a test flag to a path.
#[derive(Debug, Clone, Default)]
pub struct FileClassifier {
    tests: TestMatcher,
}

impl FileClassifier {
    #[must_use]
    pub fn new(tests: TestMatcher) -> Self {
        Self { tests }
    }

    /// Builds a classifier from an optional custom test pattern.
    ///
    /// # Errors
    ///
    /// Propagates [`TestMatcher::new`] failures.
    pub fn with_test_pattern(pattern: Option<&str>) -> DomainResult<Self> {
        match pattern {
            Some(p) => TestMatcher::new(p).map(Self::new),
            None => Ok(Self::default()),
        }
    }

    /// Directories and paths without a recognised final segment fall back to
    /// [`FileInfo::fallback`]; test detection only runs for recognised extensions.
    #[must_use]
    pub fn classify(&self, path: &str, is_directory: bool) -> FileInfo {
        if is_directory {
            return FileInfo::fallback();
        }

        let Some((_, candidate)) = path.rsplit_once('.') else {
            return FileInfo::fallback();
        };

        // `default` is the fallback tag, not a lookup hit: `foo.test.default` stays non-test.
        match ExtensionTag::from_token(&candidate.to_lowercase()) {
            Some(extension) => FileInfo { extension, is_test: self.is_test_file(path) },
            None => FileInfo::fallback(),
        }
    }

    #[must_use]
    pub fn is_test_file(&self, path: &str) -> bool {
        self.tests.is_match(path)
    }
}
