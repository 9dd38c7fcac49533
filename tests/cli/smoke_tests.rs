use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_file_classify"))
}

#[test]
fn shows_help() {
    bin().arg("--help").assert().success().stdout(predicate::str::contains("file_classify"));
}

#[test]
fn shows_version() {
    bin().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn literal_paths_as_json() {
    let assert = bin()
        .args(["--literal", "--format", "json", "src/main.rs", "web/app.test.tsx", "Dockerfile"])
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).expect("valid json");

    assert_eq!(value["summary"]["files"], 3);
    assert_eq!(value["summary"]["tests"], 1);
    let tsx = value["entries"]
        .as_array()
        .and_then(|entries| entries.iter().find(|e| e["path"] == "web/app.test.tsx"))
        .expect("tsx entry present");
    assert_eq!(tsx["extension"], "tsx");
    assert_eq!(tsx["is_test"], true);
}

#[test]
fn tests_flag_keeps_only_test_files() {
    bin()
        .args(["--literal", "--tests", "--format", "tsv", "a_test.go", "b.go", "c.spec.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a_test.go\tgo\ttrue"))
        .stdout(predicate::str::contains("c.spec.js\tjs\ttrue"))
        .stdout(predicate::str::contains("b.go").not());
}

#[test]
fn ext_filter_and_summary_mode() {
    bin()
        .args(["--literal", "--ext", "py", "--mode", "summary", "--format", "csv", "x.py", "y_test.py", "z.rb"])
        .assert()
        .success()
        .stdout(predicate::eq("extension,files,tests\npy,2,1\nTOTAL,2,1\n"));
}

#[test]
fn invalid_test_pattern_fails() {
    bin()
        .args(["--literal", "--test-pattern", "(", "a.rs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --test-pattern"));
}

#[test]
fn unknown_extension_is_rejected_by_the_parser() {
    bin().args(["--ext", "cobol"]).assert().failure().stderr(predicate::str::contains("cobol"));
}

#[test]
fn missing_root_fails() {
    let dir = tempfile::Builder::new().prefix("fc_cli").tempdir().expect("temp dir");
    bin()
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such file or directory"));
}

#[test]
fn walks_directory_and_reads_files_from_stdin() {
    let dir = tempfile::Builder::new().prefix("fc_cli").tempdir().expect("temp dir");
    fs::create_dir_all(dir.path().join("pkg")).expect("mkdir");
    fs::write(dir.path().join("pkg/handler.go"), "package pkg\n").expect("write");
    fs::write(dir.path().join("pkg/handler_test.go"), "package pkg\n").expect("write");

    bin()
        .current_dir(dir.path())
        .args(["--format", "csv", "--no-tests"])
        .assert()
        .success()
        .stdout(predicate::eq("path,extension,is_test,is_dir\npkg/handler.go,go,false,false\n"));

    bin()
        .current_dir(dir.path())
        .args(["--files-from", "-", "--format", "tsv", "--mode", "summary"])
        .write_stdin("pkg/handler.go\r\npkg/handler_test.go\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("go\t2\t1"));
}

#[test]
fn nested_exclude_prunes_under_current_dir() {
    let dir = tempfile::Builder::new().prefix("fc_cli").tempdir().expect("temp dir");
    fs::create_dir_all(dir.path().join("src/gen")).expect("mkdir");
    fs::write(dir.path().join("src/gen/a.rs"), "").expect("write");
    fs::write(dir.path().join("src/b.rs"), "").expect("write");

    bin()
        .current_dir(dir.path())
        .args(["--exclude", "src/gen", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/b.rs").and(predicate::str::contains("src/gen/a.rs").not()));
}

#[test]
fn named_hidden_paths_are_kept() {
    let dir = tempfile::Builder::new().prefix("fc_cli").tempdir().expect("temp dir");
    fs::write(dir.path().join(".eslintrc.js"), "").expect("write");

    bin()
        .current_dir(dir.path())
        .args(["--files-from", "-", "--format", "tsv"])
        .write_stdin(".eslintrc.js\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(".eslintrc.js\tjs"));

    bin().args(["--literal", "--format", "tsv", ".eslintrc.js"]).assert().success().stdout(predicate::str::contains(".eslintrc.js\tjs"));

    bin()
        .current_dir(dir.path())
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".eslintrc.js").not());
}

#[test]
fn output_flag_writes_file() {
    let dir = tempfile::Builder::new().prefix("fc_cli").tempdir().expect("temp dir");
    let out = dir.path().join("reports/result.yaml");
    bin().args(["--literal", "--format", "yaml", "--output"]).arg(&out).arg("lib.rs").assert().success().stdout("");

    let yaml = fs::read_to_string(&out).expect("report written");
    assert!(yaml.contains("extension: rs"));
    assert!(yaml.contains("version:"));
}
