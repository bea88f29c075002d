//! Tests for CLI argument parsing.
//!
//! Only paths that exit before the terminal UI starts are exercised here.

use std::process::Command;
use tempfile::TempDir;

fn kanjiview_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kanjiview"))
}

#[test]
fn test_help_lists_options() {
    let output = kanjiview_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--items-per-page"));
    assert!(stdout.contains("[ROUTE]"));
}

#[test]
fn test_version_flag() {
    let output = kanjiview_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_route_is_rejected() {
    let output = kanjiview_cmd()
        .arg("/radicals")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No route matches '/radicals'"));
}

#[test]
fn test_unsupported_page_size_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = kanjiview_cmd()
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--items-per-page")
        .arg("10")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("items_per_page"));
}

#[test]
fn test_broken_config_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[list\n").unwrap();
    let output = kanjiview_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"));
}
