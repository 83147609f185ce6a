//! CLI diff integration tests
//!
//! These run the built `textdiff` binary and check that it forwards the
//! host tool's output and maps outcomes onto diff-style exit codes.
#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn write_pair(temp_dir: &TempDir, left: &[u8], right: &[u8]) -> (PathBuf, PathBuf) {
    let left_path = temp_dir.path().join("left.txt");
    let right_path = temp_dir.path().join("right.txt");
    fs::write(&left_path, left).unwrap();
    fs::write(&right_path, right).unwrap();
    (left_path, right_path)
}

fn cli_bin() -> &'static str {
    env!("CARGO_BIN_EXE_textdiff")
}

#[test]
fn test_identical_files_exit_zero_with_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let (left, right) = write_pair(&temp_dir, b"same\n", b"same\n");

    let output = Command::new(cli_bin())
        .args([&left, &right])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_different_files_exit_one_with_diff_on_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let (left, right) = write_pair(&temp_dir, b"line1\n", b"line2\n");

    let output = Command::new(cli_bin())
        .args([&left, &right])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("line1"));
    assert!(stdout.contains("line2"));
}

#[test]
fn test_missing_input_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let (left, _right) = write_pair(&temp_dir, b"a\n", b"b\n");

    let output = Command::new(cli_bin())
        .arg(&left)
        .arg(temp_dir.path().join("nope.txt"))
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"), "Stderr: {}", stderr);
    assert!(stderr.contains("nope.txt"));
}

#[test]
fn test_missing_tool_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let (left, right) = write_pair(&temp_dir, b"a\n", b"b\n");

    let output = Command::new(cli_bin())
        .arg(&left)
        .arg(&right)
        .arg("--tool")
        .arg(temp_dir.path().join("no-such-diff"))
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-diff"));
}

#[test]
fn test_stdin_as_one_side() {
    let temp_dir = TempDir::new().unwrap();
    let (left, _right) = write_pair(&temp_dir, b"from file\n", b"");

    let mut child = Command::new(cli_bin())
        .arg(&left)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"from stdin\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("from stdin"));
}

#[test]
fn test_both_sides_from_stdin_rejected() {
    let output = Command::new(cli_bin())
        .args(["-", "-"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_json_logs_go_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    let (left, right) = write_pair(&temp_dir, b"x\n", b"y\n");

    let output = Command::new(cli_bin())
        .arg(&left)
        .arg(&right)
        .args(["--log", "json"])
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("\"op\""), "logs leaked into stdout: {}", stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"op\":\"diff\""), "Stderr: {}", stderr);
}
