// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the organize fan-out: bucket membership, filename
//! sanitization, and classification precedence observed end to end.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

fn sift() -> Command {
    cargo_bin_cmd!("sift")
}

fn seeded_temp(snapshot: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let raw = temp.path().join("raw-data");
    std::fs::create_dir_all(&raw).unwrap();
    std::fs::write(raw.join("all-issues-latest.json"), snapshot).unwrap();
    temp
}

fn issue_json(number: u64, title: &str, body: Option<&str>, labels: &[&str]) -> String {
    let labels: Vec<serde_json::Value> = labels
        .iter()
        .map(|name| serde_json::json!({ "name": name }))
        .collect();
    serde_json::json!({
        "number": number,
        "title": title,
        "body": body,
        "url": format!("https://tracker.example/issues/{}", number),
        "state": "open",
        "author": { "login": "spec" },
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
        "assignees": [],
        "labels": labels,
        "milestone": null
    })
    .to_string()
}

fn snapshot(issues: &[String]) -> String {
    format!("[{}]", issues.join(","))
}

/// Count the .md documents under every bucket of one dimension tree.
fn documents_in(dimension_root: &Path) -> usize {
    let mut count = 0;
    for bucket in std::fs::read_dir(dimension_root).unwrap() {
        let bucket = bucket.unwrap().path();
        count += std::fs::read_dir(&bucket).unwrap().count();
    }
    count
}

// =============================================================================
// Bucket membership
// =============================================================================

#[test]
fn every_issue_in_exactly_one_priority_status_milestone_bucket() {
    let issues = vec![
        issue_json(1, "Broken deploy", None, &["critical"]),
        issue_json(2, "Polish spacing", None, &["low"]),
        issue_json(3, "qwerty", None, &[]),
    ];
    let temp = seeded_temp(&snapshot(&issues));

    sift().current_dir(temp.path()).assert().success();

    let organized = temp.path().join("organized");
    for dim in ["by-priority", "by-status", "by-milestone"] {
        assert_eq!(
            documents_in(&organized.join(dim)),
            issues.len(),
            "{} must hold exactly one document per issue",
            dim
        );
    }
}

#[test]
fn multi_category_issue_appears_under_each_category() {
    let issues = vec![issue_json(
        4,
        "Slow dashboard queries",
        Some("sql migration needed"),
        &[],
    )];
    let temp = seeded_temp(&snapshot(&issues));

    sift().current_dir(temp.path()).assert().success();

    let by_category = temp.path().join("organized/by-category");
    for bucket in ["adminPanel", "database", "performance"] {
        assert!(
            by_category
                .join(bucket)
                .join("issue-4-Slow-dashboard-queries.md")
                .is_file(),
            "expected a copy under {}",
            bucket
        );
    }
    // One copy per matching category: more documents than issues.
    assert_eq!(documents_in(&by_category), 3);
}

#[test]
fn unmatched_issue_lands_in_uncategorized() {
    let issues = vec![issue_json(5, "qwerty", None, &[])];
    let temp = seeded_temp(&snapshot(&issues));

    sift().current_dir(temp.path()).assert().success();

    assert!(temp
        .path()
        .join("organized/by-category/uncategorized/issue-5-qwerty.md")
        .is_file());
}

// =============================================================================
// Filename sanitization
// =============================================================================

#[test]
fn filenames_replace_non_alphanumerics_one_for_one() {
    let issues = vec![issue_json(42, "Fix bug: crash!", None, &[])];
    let temp = seeded_temp(&snapshot(&issues));

    sift().current_dir(temp.path()).assert().success();

    assert!(temp
        .path()
        .join("organized/by-priority/high/issue-42-Fix-bug--crash-.md")
        .is_file());
}

// =============================================================================
// Classification precedence observed end to end
// =============================================================================

#[test]
fn priority_label_beats_body_keyword() {
    let issues = vec![issue_json(
        6,
        "qwerty",
        Some("this is critical and urgent"),
        &["low"],
    )];
    let temp = seeded_temp(&snapshot(&issues));

    sift().current_dir(temp.path()).assert().success();

    let by_priority = temp.path().join("organized/by-priority");
    assert!(by_priority.join("low/issue-6-qwerty.md").is_file());
    assert!(!by_priority.join("critical").exists());
}

#[test]
fn body_keyword_attaches_categories() {
    // The "auth" substring in the body is enough to attach security.
    let issues = vec![issue_json(
        7,
        "Add login API",
        Some("needs auth and backend route"),
        &["backend"],
    )];
    let temp = seeded_temp(&snapshot(&issues));

    sift().current_dir(temp.path()).assert().success();

    let by_category = temp.path().join("organized/by-category");
    assert!(by_category
        .join("backend/issue-7-Add-login-API.md")
        .is_file());
    assert!(by_category
        .join("security/issue-7-Add-login-API.md")
        .is_file());
}
