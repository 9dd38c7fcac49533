// crates/domain/src/options.rs
use std::str::FromStr;

use file_classify_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Yaml,
    Md,
}

/// 出力モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// エントリ一覧 + サマリー
    #[default]
    Full,
    /// 拡張子別サマリーのみ
    Summary,
}

/// Which entries survive the test-file filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFilter {
    #[default]
    All,
    Only,
    Exclude,
}

impl TestFilter {
    #[must_use]
    pub fn accepts(self, is_test: bool) -> bool {
        match self {
            Self::All => true,
            Self::Only => is_test,
            Self::Exclude => !is_test,
        }
    }
}

/// Sorting keys available for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Path,
    Ext,
    Test,
}

/// Sort specification. Example: `ext,test:desc,path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec(pub Vec<(SortKey, bool)>);

impl FromStr for SortSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        if specs.is_empty() {
            return Err(DomainError::InvalidSortSpec { spec: "empty sort spec".into() });
        }
        Ok(SortSpec(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<(SortKey, bool), DomainError> {
    let (key_str, desc) =
        part.split_once(':').map_or((part, false), |(k, d)| (k.trim(), matches!(d.trim(), "desc" | "DESC")));

    let key = parse_sort_key(key_str)?;
    Ok((key, desc))
}

fn parse_sort_key(key_str: &str) -> Result<SortKey, DomainError> {
    match key_str.to_ascii_lowercase().as_str() {
        "path" | "name" => Ok(SortKey::Path),
        "ext" => Ok(SortKey::Ext),
        "test" => Ok(SortKey::Test),
        other => Err(DomainError::InvalidSortSpec { spec: format!("Unknown sort key: {other}") }),
    }
}
