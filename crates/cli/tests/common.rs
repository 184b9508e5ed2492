// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn sift() -> Command {
    cargo_bin_cmd!("sift")
}

/// A snapshot with one backend-labelled issue (the login API scenario).
pub const LOGIN_API_SNAPSHOT: &str = r#"[{
    "number": 7,
    "title": "Add login API",
    "body": "needs auth and backend route",
    "url": "https://tracker.example/issues/7",
    "state": "open",
    "author": {"login": "x"},
    "createdAt": "2025-01-15T08:00:00Z",
    "updatedAt": "2025-01-16T08:00:00Z",
    "assignees": [],
    "labels": [{"name": "backend"}],
    "milestone": null
}]"#;

/// Helper to create a temp directory seeded with a snapshot at the
/// default input path.
pub fn seeded_temp(snapshot: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let raw = temp.path().join("raw-data");
    std::fs::create_dir_all(&raw).unwrap();
    std::fs::write(raw.join("all-issues-latest.json"), snapshot).unwrap();
    temp
}
