use std::fs;

use file_classify::{app, config::Config};
use file_classify_domain::options::{OutputFormat, OutputMode};
use file_classify_ports::filesystem::EnumerationPlan;

#[path = "../common/mod.rs"]
mod common;
use common::TempTree;

fn run_to_file(tree: &TempTree, format: OutputFormat, mode: OutputMode, name: &str) -> String {
    let output_path = tree.path().join("out").join(name);
    let config = Config {
        plan: EnumerationPlan {
            roots: vec!["src/lib.rs".into(), "src/lib_test.rs".into(), "docs/".into(), "notes".into()],
            literal: true,
            ..EnumerationPlan::default()
        },
        format,
        mode,
        output_path: Some(output_path.clone()),
        ..Config::default()
    };
    app::run(&config).expect("run succeeds");
    fs::read_to_string(&output_path).expect("report written")
}

#[test]
fn json_report_is_written_to_nested_output_path() {
    let tree = TempTree::new("fc_out");
    let json = run_to_file(&tree, OutputFormat::Json, OutputMode::Full, "report.json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["version"], file_classify::VERSION);
    let entries = value["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["path"], "notes");
    assert_eq!(entries[0]["extension"], "default");
    assert_eq!(entries[2]["is_test"], true);
    assert_eq!(value["summary"]["tests"], 1);
}

#[test]
fn csv_summary_mode_has_total_row() {
    let tree = TempTree::new("fc_out");
    let csv = run_to_file(&tree, OutputFormat::Csv, OutputMode::Summary, "report.csv");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.first(), Some(&"extension,files,tests"));
    assert!(lines.contains(&"rs,2,1"));
    assert_eq!(lines.last(), Some(&"TOTAL,3,1"));
}

#[test]
fn jsonl_emits_entries_then_summary() {
    let tree = TempTree::new("fc_out");
    let jsonl = run_to_file(&tree, OutputFormat::Jsonl, OutputMode::Full, "report.jsonl");
    let types: Vec<String> = jsonl
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).expect("json line")["type"].to_string())
        .collect();

    assert_eq!(types, ["\"entry\"", "\"entry\"", "\"entry\"", "\"summary\""]);
}

#[test]
fn markdown_summary_has_no_entry_table() {
    let tree = TempTree::new("fc_out");
    let md = run_to_file(&tree, OutputFormat::Md, OutputMode::Summary, "report.md");

    assert!(!md.contains("| PATH |"));
    assert!(md.contains("| rs | 2 | 1 |"));
    assert!(md.contains("| **TOTAL** | 3 | 1 |"));
}
