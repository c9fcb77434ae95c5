//! CLI diff integration tests
//!
//! These tests run the `apidiff` binary against snapshot files written to a
//! scratch directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const OLD_SNAPSHOT: &str = r#"{"items": [
    {"$type": "class", "name": "Ext.Button", "items": [
        {"$type": "configs", "items": [
            {"$type": "config", "name": "text", "type": "String"},
            {"$type": "config", "name": "secret", "type": "String", "access": "private"}
        ]}
    ]},
    {"$type": "class", "name": "Ext.Legacy"}
]}"#;

const NEW_SNAPSHOT: &str = r#"{"items": [
    {"$type": "class", "name": "Ext.Button", "items": [
        {"$type": "configs", "items": [
            {"$type": "config", "name": "text", "type": "String"},
            {"$type": "config", "name": "secret", "type": "Number", "access": "private"},
            {"$type": "config", "name": "timeout", "type": "Number"}
        ]}
    ]}
]}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_diff(old: &Path, new: &Path, extra: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_apidiff");
    Command::new(cli_bin)
        .arg("diff")
        .arg("--old")
        .arg(old)
        .arg("--new")
        .arg(new)
        .args(extra)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_markdown_report() {
    let temp_dir = TempDir::new().unwrap();
    let old = write(&temp_dir, "old.json", OLD_SNAPSHOT);
    let new = write(&temp_dir, "new.json", NEW_SNAPSHOT);

    let output = run_diff(&old, &new, &["--title", "Button changes"]);
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Button changes\n\n"));
    assert!(stdout.contains("### Removed Classes\n\n- Ext.Legacy\n"));
    assert!(stdout.contains("## Ext.Button\n\n### Added Configs\n\n- timeout\n"));
    assert!(!stdout.contains("secret"));
    assert!(stdout.contains("### Summary\n"));
    assert!(stdout.contains("- 2 Configs\n"));
}

#[test]
fn test_cli_flags_widen_report() {
    let temp_dir = TempDir::new().unwrap();
    let old = write(&temp_dir, "old.json", OLD_SNAPSHOT);
    let new = write(&temp_dir, "new.json", NEW_SNAPSHOT);

    let output = run_diff(&old, &new, &["--include-private", "--verbose-summary"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("- secret\n  - **type** is Number (was String)\n"));
    assert!(stdout.contains("- 3 Configs\n  - 1 Added\n  - 1 Modified (1 Private)\n"));
}

#[test]
fn test_cli_config_file_and_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let old = write(&temp_dir, "old.json", OLD_SNAPSHOT);
    let new = write(&temp_dir, "new.json", NEW_SNAPSHOT);
    let config = write(&temp_dir, "report.toml", "include-private = true\n");
    let report = temp_dir.path().join("report.md");

    let output = run_diff(
        &old,
        &new,
        &[
            "--config",
            config.to_str().unwrap(),
            "--output",
            report.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());

    let written = fs::read_to_string(&report).unwrap();
    assert!(written.contains("- secret\n"));
}

#[test]
fn test_cli_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let old = write(&temp_dir, "old.json", OLD_SNAPSHOT);
    let new = write(&temp_dir, "new.json", NEW_SNAPSHOT);

    let output = run_diff(&old, &new, &["--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let classes = value["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0]["name"], "Ext.Button");
    assert_eq!(classes[0]["action"], "modified");
    assert_eq!(classes[1]["action"], "removed");
}

#[test]
fn test_cli_missing_items_fails() {
    let temp_dir = TempDir::new().unwrap();
    let old = write(&temp_dir, "old.json", OLD_SNAPSHOT);
    let new = write(&temp_dir, "new.json", r#"{"classes": []}"#);

    let output = run_diff(&old, &new, &[]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: [ERR_MISSING_FIELD]"));
}

#[test]
fn test_cli_unreadable_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let new = write(&temp_dir, "new.json", NEW_SNAPSHOT);
    let missing = temp_dir.path().join("absent.json");

    let output = run_diff(&missing, &new, &[]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[ERR_IO]"));
    assert!(stderr.contains("absent.json"));
}

#[test]
fn test_cli_bad_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let old = write(&temp_dir, "old.json", OLD_SNAPSHOT);
    let new = write(&temp_dir, "new.json", NEW_SNAPSHOT);
    let config = write(&temp_dir, "report.toml", "show-everything = true\n");

    let output = run_diff(&old, &new, &["--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[ERR_INVALID_CONFIG]"));
}
