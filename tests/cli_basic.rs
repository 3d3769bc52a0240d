//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, and each subcommand
//! responds to `--help` with appropriate text.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `cvsift` binary.
fn cvsift() -> Command {
    Command::cargo_bin("cvsift").expect("binary 'cvsift' should be built")
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    cvsift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cvsift"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("candidates"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn short_help_flag_shows_usage() {
    cvsift()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cvsift"));
}

#[test]
fn version_flag_shows_semver() {
    cvsift()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^cvsift \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    cvsift()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: cvsift"));
}

#[test]
fn invalid_subcommand_fails() {
    cvsift()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── Subcommand help ─────────────────────────────────────────────────────────

#[test]
fn parse_help() {
    cvsift()
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse a resume"))
        .stdout(predicate::str::contains("<FILE>"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--full-text"));
}

#[test]
fn candidates_help() {
    cvsift()
        .args(["candidates", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ranked name candidates"))
        .stdout(predicate::str::contains("<FILE>"))
        .stdout(predicate::str::contains("--top"));
}

#[test]
fn validate_help() {
    cvsift()
        .args(["validate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("upload rules"))
        .stdout(predicate::str::contains("<FILE>"));
}

// ─── Subcommand argument validation ──────────────────────────────────────────

#[test]
fn parse_missing_file_fails() {
    cvsift()
        .arg("parse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn candidates_missing_file_fails() {
    cvsift()
        .arg("candidates")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn validate_missing_file_fails() {
    cvsift()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

// ─── Upload rule enforcement ─────────────────────────────────────────────────

/// Write a throwaway file under the OS temp dir and return its path.
fn temp_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("cvsift-test-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn validate_rejects_unsupported_extension() {
    let path = temp_file("photo.png", &[0u8; 1024]);
    cvsift()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("unsupported file type"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn validate_rejects_near_empty_pdf() {
    let path = temp_file("tiny.pdf", b"%PDF");
    cvsift()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("empty"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn parse_nonexistent_file_fails() {
    cvsift()
        .args(["parse", "/definitely/not/a/real/path.pdf"])
        .assert()
        .failure();
}
