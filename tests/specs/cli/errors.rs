// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the fatal error paths: missing snapshot, unparsable
//! snapshot, malformed configuration.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sift() -> Command {
    cargo_bin_cmd!("sift")
}

#[test]
fn missing_snapshot_is_exit_code_one() {
    let temp = TempDir::new().unwrap();

    sift()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("no issues snapshot found"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn missing_snapshot_creates_no_output() {
    let temp = TempDir::new().unwrap();

    sift().current_dir(temp.path()).assert().failure();

    assert_eq!(
        std::fs::read_dir(temp.path()).unwrap().count(),
        0,
        "a failed run must not create any files"
    );
}

#[test]
fn unparsable_snapshot_is_exit_code_one() {
    let temp = TempDir::new().unwrap();
    let raw = temp.path().join("raw-data");
    std::fs::create_dir_all(&raw).unwrap();
    std::fs::write(raw.join("all-issues-latest.json"), "[{\"number\":").unwrap();

    sift()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot parse issues snapshot"));
}

#[test]
fn array_of_wrong_records_is_exit_code_one() {
    let temp = TempDir::new().unwrap();
    let raw = temp.path().join("raw-data");
    std::fs::create_dir_all(&raw).unwrap();
    std::fs::write(raw.join("all-issues-latest.json"), r#"[{"number": 1}]"#).unwrap();

    sift()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot parse issues snapshot"));
}

#[test]
fn malformed_config_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("sift.toml"), "input = [broken").unwrap();

    sift()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn nonexistent_directory_flag_is_fatal() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("not-here");

    sift()
        .arg("-C")
        .arg(&missing)
        .assert()
        .failure()
        .code(1);
}
