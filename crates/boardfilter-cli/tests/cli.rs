use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BOARD: &str = r#"[
  {"name": "ResNet50", "submitter": "Alice", "score": 76.1},
  {"name": "VGG16", "submitter": "Bob", "score": 71.5},
  {"name": "AlexNet", "submitter": "Carol"},
  {"name": "Coral-Edge", "submitter": "Dan", "score": 64.0}
]"#;

fn write_board(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("board.json");
    fs::write(&path, BOARD).expect("write board");
    path
}

fn run_cmd(temp: &TempDir, data: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("boardfilter")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--data", data.to_str().expect("data path")])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(temp: &TempDir, data: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("boardfilter")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--data", data.to_str().expect("data path"), "--json"])
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_filter_mixed_precedence() {
    let temp = TempDir::new().expect("temp dir");
    let board = write_board(&temp);

    let report = run_cmd_json(&temp, &board, &["filter", "resnet and alice or vgg"]);
    assert_eq!(report["matched"], 2);
    assert_eq!(report["total"], 4);
    let rows = report["rows"].as_array().expect("array");
    assert_eq!(rows[0]["name"], "ResNet50");
    assert_eq!(rows[1]["name"], "VGG16");
    assert_eq!(report["expression"]["type"], "or");
}

#[test]
fn cli_filter_plain_output_and_limit() {
    let temp = TempDir::new().expect("temp dir");
    let board = write_board(&temp);

    let out = run_cmd(&temp, &board, &["filter", "not alexnet", "--limit", "1"]);
    assert!(out.contains("ResNet50  Alice  76.10"));
    assert!(out.contains("(1 of 3 matches shown)"));

    let none = run_cmd(&temp, &board, &["filter", "mobilenet"]);
    assert_eq!(none.trim(), "no matching rows");
}

#[test]
fn cli_filter_zero_limit_still_reports_matches() {
    let temp = TempDir::new().expect("temp dir");
    let board = write_board(&temp);

    let out = run_cmd(&temp, &board, &["filter", "resnet", "--limit", "0"]);
    assert_eq!(out.trim(), "(0 of 1 matches shown)");
}

#[test]
fn cli_dangling_operator_without_trailing_space() {
    let temp = TempDir::new().expect("temp dir");
    let board = write_board(&temp);

    assert_eq!(run_cmd(&temp, &board, &["count", "resnet and"]).trim(), "1/4");
    assert_eq!(run_cmd(&temp, &board, &["count", "resnet or"]).trim(), "4/4");

    let text = run_cmd(&temp, &board, &["explain", "resnet and"]);
    assert!(text.contains("and\n  term \"resnet\"\n  term \"\"\n"));
}

#[test]
fn cli_count_handles_empty_and_word_boundaries() {
    let temp = TempDir::new().expect("temp dir");
    let board = write_board(&temp);

    assert_eq!(run_cmd(&temp, &board, &["count"]).trim(), "4/4");
    assert_eq!(run_cmd(&temp, &board, &["count", "coral"]).trim(), "1/4");
    assert_eq!(run_cmd(&temp, &board, &["count", "carol or dan"]).trim(), "2/4");
}

#[test]
fn cli_explain_reports_tree() {
    let temp = TempDir::new().expect("temp dir");
    let board = write_board(&temp);

    let explain = run_cmd_json(&temp, &board, &["explain", "ResNet AND not Bob"]);
    assert_eq!(explain["canonical"], "resnet and not bob");
    assert_eq!(explain["terms"], serde_json::json!(["resnet", "bob"]));

    let text = run_cmd(&temp, &board, &["explain", "vgg or alexnet"]);
    assert!(text.starts_with("query: vgg or alexnet\nor\n"));
}

#[test]
fn cli_config_controls_fields_and_empty_terms() {
    let temp = TempDir::new().expect("temp dir");
    let board = write_board(&temp);
    let config_dir = temp.path().join("boardfilter");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("config.toml"),
        "[search]\nfields = [\"name\"]\nempty_terms = \"match-none\"\n",
    )
    .expect("write config");

    assert_eq!(run_cmd(&temp, &board, &["count", "alice"]).trim(), "0/4");
    assert_eq!(run_cmd(&temp, &board, &["count", "resnet and "]).trim(), "0/4");
    assert_eq!(run_cmd(&temp, &board, &["count", "resnet and"]).trim(), "0/4");
}

#[test]
fn cli_reads_dataset_from_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("boardfilter")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--data", "-", "count", "bob"])
        .write_stdin(BOARD)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1/4");
}

#[test]
fn cli_exit_codes_for_bad_datasets() {
    let temp = TempDir::new().expect("temp dir");

    let missing = cargo_bin_cmd!("boardfilter")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--data", temp.path().join("nope.json").to_str().expect("path")])
        .args(["count", "x"])
        .output()
        .expect("run command");
    assert_eq!(missing.status.code(), Some(2));

    let unset = cargo_bin_cmd!("boardfilter")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["count", "x"])
        .output()
        .expect("run command");
    assert_eq!(unset.status.code(), Some(3));

    let invalid = temp.path().join("invalid.json");
    fs::write(&invalid, r#"[{"name": ""}]"#).expect("write");
    let output = cargo_bin_cmd!("boardfilter")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--data", invalid.to_str().expect("path"), "count"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("load dataset"));
}
