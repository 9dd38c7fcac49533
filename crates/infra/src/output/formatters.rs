mod delimited;
mod jsonl;
mod markdown;
mod structured;
mod table;

pub use delimited::output_delimited;
pub use jsonl::output_jsonl;
pub use markdown::output_markdown;
pub use structured::{output_json, output_yaml};
pub use table::output_table;

use file_classify_domain::ClassifiedEntry;

/// Display path; directories carry a trailing `/`.
pub(crate) fn display_path(entry: &ClassifiedEntry) -> String {
    let mut path = entry.path.to_slash_string();
    if entry.is_dir && !path.ends_with('/') {
        path.push('/');
    }
    path
}

pub(crate) const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
