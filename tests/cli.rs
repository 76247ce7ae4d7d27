//! End-to-end tests for the `path-sentinel` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VULNERABLE: &str = include_str!("fixtures/vulnerable_server.go");
const SAFE: &str = include_str!("fixtures/safe_server.go");

fn sentinel() -> Command {
    let mut cmd = Command::cargo_bin("path-sentinel").unwrap();
    cmd.env("NO_COLOR", "1").env("CLICOLOR", "0");
    cmd
}

/// Copies `content` into a fresh temp dir so the binary may rewrite it.
fn workspace(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn scan_yes_patches_file_in_place() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .args(["scan", "--yes"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arbitrary File Read"))
        .stdout(predicate::str::contains("Line 20"))
        .stdout(predicate::str::contains("File has been updated at:"));

    let patched = read(&path);
    assert!(patched.contains("safePath := filepath.Clean(filePath)"));
    assert!(patched.contains("data, err := os.ReadFile(safePath)"));
    assert!(!patched.contains("os.ReadFile(filePath)"));
}

#[test]
fn answering_no_leaves_file_untouched() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .arg("scan")
        .arg(&path)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to replace it? (y/n):"))
        .stdout(predicate::str::contains("No replacements made."));

    assert_eq!(read(&path), VULNERABLE);
}

#[test]
fn answering_yes_on_prompt_patches() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .arg("scan")
        .arg(&path)
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacement 1:"));

    assert!(read(&path).contains("os.ReadFile(safePath)"));
}

#[test]
fn path_can_be_entered_interactively() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .arg("scan")
        .write_stdin(format!("{}\ny\n", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the path of the file to scan:"));

    assert!(read(&path).contains("os.ReadFile(safePath)"));
}

#[test]
fn fixed_copy_keeps_original() {
    let (dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .args(["scan", "--yes", "--fixed-copy"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated file saved as:"));

    assert_eq!(read(&path), VULNERABLE);
    assert!(read(&dir.path().join("main_fixed.go")).contains("os.ReadFile(safePath)"));
}

#[test]
fn dry_run_writes_nothing() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .args(["scan", "--yes", "--dry-run"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(read(&path), VULNERABLE);
}

#[test]
fn traversal_segments_are_replaced() {
    let source = "package main\n\nvar a = \"../etc/passwd\"\nvar b = \"..\\\\windows\"\n";
    let (_dir, path) = workspace("paths.go", source);

    sentinel()
        .args(["scan", "--yes"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path Traversal"));

    assert_eq!(
        read(&path),
        "package main\n\nvar a = \"safe_path/etc/passwd\"\nvar b = \"safe_path\\\\windows\"\n"
    );
}

#[test]
fn json_report_without_fixing() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    let output = sentinel()
        .args(["scan", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["findings"][0]["detector_id"], "P001");
    assert_eq!(json["findings"][0]["line"], 20);
    assert!(json.get("replacements").is_none());

    // No prompt was shown, so nothing changed.
    assert_eq!(read(&path), VULNERABLE);
}

#[test]
fn json_report_with_yes_lists_replacements() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    let output = sentinel()
        .args(["scan", "--format", "json", "--yes"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["replacements"][0]["before"], "os.ReadFile(filePath)");
    assert_eq!(json["replacements"][0]["line"], 20);
    assert_eq!(json["output_path"], path.display().to_string());
}

#[test]
fn excluded_detector_is_neither_reported_nor_fixed() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .args(["scan", "--yes", "--exclude", "P001"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No vulnerabilities found."));

    assert_eq!(read(&path), VULNERABLE);
}

#[test]
fn safe_file_reports_nothing() {
    let (_dir, path) = workspace("safe.go", SAFE);

    sentinel()
        .arg("scan")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No vulnerabilities found."))
        .stdout(predicate::str::contains("No replacements made."));

    assert_eq!(read(&path), SAFE);
}

#[test]
fn missing_file_fails() {
    sentinel()
        .args(["scan", "--yes", "/no/such/dir/main.go"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn list_shows_detectors() {
    sentinel()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("P001"))
        .stdout(predicate::str::contains("P002"));
}

#[test]
fn json_with_prompted_path_stays_parseable() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    let output = sentinel()
        .args(["scan", "--format", "json"])
        .write_stdin(format!("{}\n", path.display()))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["findings"][0]["detector_id"], "P001");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Enter the path of the file to scan:"));
}

#[test]
fn severity_above_findings_reports_and_fixes_nothing() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .args(["scan", "--yes", "--severity", "critical"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No vulnerabilities found."))
        .stdout(predicate::str::contains("No replacements made."));

    assert_eq!(read(&path), VULNERABLE);
}

#[test]
fn only_limits_detection_and_fixes() {
    let source = "data, err := os.ReadFile(filePath)\nbase := \"../data\"\n";
    let (_dir, path) = workspace("both.go", source);

    sentinel()
        .args(["scan", "--yes", "--only", "P002"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path Traversal"))
        .stdout(predicate::str::contains("Arbitrary File Read").not());

    assert_eq!(read(&path), "data, err := os.ReadFile(filePath)\nbase := \"safe_path/data\"\n");
}

#[test]
fn non_utf8_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.go");
    std::fs::write(&path, [0xff, 0xfe, b'.', b'.', b'/']).unwrap();

    sentinel()
        .args(["scan", "--yes"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn env_prints_operating_system() {
    sentinel()
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operating System:"))
        .stdout(predicate::str::contains(std::env::consts::OS));
}

#[test]
fn version_prints_package_version() {
    sentinel()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn fixed_copy_and_dry_run_are_rejected_together() {
    let (_dir, path) = workspace("main.go", VULNERABLE);

    sentinel()
        .args(["scan", "--yes", "--fixed-copy", "--dry-run"])
        .arg(&path)
        .assert()
        .failure();

    assert_eq!(read(&path), VULNERABLE);
}
