//! End-to-end tests for the preflight binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn preflight(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_preflight"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run preflight binary")
}

fn write_catalog(dir: &Path, content: &str) -> String {
    let path = dir.join("products.csv");
    fs::write(&path, content).expect("Failed to write catalog");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_check_prints_summary_and_writes_preview() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_catalog(dir.path(), "Product name;Price\nWidget;9.99\n;12\nGizmo;bad\n");
    let out_dir = dir.path().join("previews");

    let output = preflight(&["check", &file, "-o", out_dir.to_str().unwrap()]);
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_rows"], 3);
    assert_eq!(summary["importable_rows_name_and_price"], 1);

    let previews: Vec<_> = fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(previews.len(), 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Preview written to"));
}

#[test]
fn test_no_detail_skips_preview() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_catalog(dir.path(), "Product name;Price\nWidget;9.99\n");

    let output = preflight(&["check", &file, "--no-detail"]);
    assert!(output.status.success());
    assert!(!dir.path().join("tmp").exists());
}

#[test]
fn test_preview_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_catalog(dir.path(), "Product name;Price\nWidget;9.99\n");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let output = preflight(&["check", &file, "-o", blocker.to_str().unwrap()]);
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_rows"], 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not write preview file"));
}

#[test]
fn test_missing_required_header_exits_with_fatal_status() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_catalog(dir.path(), "SKU;Category\nA1;Tools\n");

    let output = preflight(&["check", &file]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_exits_with_fatal_status() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    let output = preflight(&["check", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_empty_file_exits_with_fatal_status() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_catalog(dir.path(), "");

    let output = preflight(&["check", &file, "--no-detail"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_headers_command() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_catalog(dir.path(), "Item Name;Unit Price;SKU\n");

    let output = preflight(&["headers", &file]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Item Name"));
    assert!(stdout.contains("Unit Price"));
}
