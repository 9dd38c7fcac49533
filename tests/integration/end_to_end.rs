use std::path::PathBuf;

use file_classify::{ExtensionTag, app, config::Config};
use file_classify_domain::{
    EntryFilter,
    options::{SortKey, TestFilter},
};
use file_classify_ports::filesystem::EnumerationPlan;

#[path = "../common/mod.rs"]
mod common;
use common::TempTree;

fn walk_plan(root: PathBuf) -> EnumerationPlan {
    EnumerationPlan { roots: vec![root], respect_gitignore: true, walk_threads: 1, ..EnumerationPlan::default() }
}

fn relative_paths(config: &Config, root: &std::path::Path) -> Vec<String> {
    let output = app::classify_paths(config).expect("classification succeeds");
    output
        .entries
        .iter()
        .map(|e| e.path.as_path().strip_prefix(root).expect("under root").to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn walks_and_classifies_a_tree() {
    let tree = TempTree::sample_project("fc_e2e");
    let config = Config { plan: walk_plan(tree.path().to_path_buf()), ..Config::default() };

    let output = app::classify_paths(&config).expect("classification succeeds");
    assert_eq!(output.summary.files, 5);
    assert_eq!(output.summary.tests, 2);
    assert_eq!(output.summary.group(ExtensionTag::Rust).map(|g| (g.files, g.tests)), Some((2, 1)));
    assert_eq!(output.summary.group(ExtensionTag::Ruby).map(|g| g.tests), Some(0));
    assert_eq!(output.summary.group(ExtensionTag::Default).map(|g| g.files), Some(1));
}

#[test]
fn only_tests_sorted_by_extension() {
    let tree = TempTree::sample_project("fc_e2e");
    let config = Config {
        plan: walk_plan(tree.path().to_path_buf()),
        filter: EntryFilter { tests: TestFilter::Only, ..EntryFilter::default() },
        sort: vec![(SortKey::Ext, false)],
        ..Config::default()
    };

    assert_eq!(relative_paths(&config, tree.path()), ["src/lib_test.rs", "web/app.spec.ts"]);
}

#[test]
fn gitignore_is_respected_without_a_repository() {
    let tree = TempTree::sample_project("fc_e2e");
    tree.write_file(".gitignore", "web/\n");
    let config = Config { plan: walk_plan(tree.path().to_path_buf()), ..Config::default() };

    assert_eq!(relative_paths(&config, tree.path()), ["Makefile", "src/lib.rs", "src/lib_test.rs"]);
}

#[test]
fn custom_test_pattern_replaces_default() {
    let tree = TempTree::sample_project("fc_e2e");
    let config = Config {
        plan: walk_plan(tree.path().to_path_buf()),
        filter: EntryFilter { tests: TestFilter::Only, ..EntryFilter::default() },
        test_pattern: Some("(?:^|/)latest$".to_string()),
        ..Config::default()
    };

    assert_eq!(relative_paths(&config, tree.path()), ["web/latest.rb"]);
}

#[test]
fn invalid_test_pattern_is_an_error() {
    let config = Config { test_pattern: Some("[".to_string()), ..Config::default() };
    let err = app::classify_paths(&config).expect_err("pattern must fail");
    assert!(err.to_string().contains("invalid --test-pattern"));
}

#[test]
fn literal_paths_skip_the_filesystem() {
    let config = Config {
        plan: EnumerationPlan {
            roots: vec!["does/not/exist.go".into(), "pkg/".into(), "README".into()],
            literal: true,
            include_dirs: true,
            ..EnumerationPlan::default()
        },
        filter: EntryFilter { include_dirs: true, ..EntryFilter::default() },
        ..Config::default()
    };

    let output = app::classify_paths(&config).expect("literal mode never touches disk");
    let summary = &output.summary;
    assert_eq!((summary.files, summary.dirs), (2, 1));
    assert_eq!(summary.group(ExtensionTag::Go).map(|g| g.files), Some(1));
}
