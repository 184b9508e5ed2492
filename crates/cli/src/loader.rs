// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot loading.
//!
//! The snapshot is a single JSON array of issue records produced by an
//! external export step. Loading is all-or-nothing: a missing file and an
//! unparsable file are both fatal, and there is no partial-success mode.

use std::fs;
use std::path::Path;

use sift_core::Issue;

use crate::error::{Error, Result};

/// Read and parse the snapshot at `path`.
pub fn load_issues(path: &Path) -> Result<Vec<Issue>> {
    if !path.exists() {
        return Err(Error::SnapshotMissing {
            path: path.display().to_string(),
        });
    }

    let data = fs::read_to_string(path)?;
    let issues: Vec<Issue> =
        serde_json::from_str(&data).map_err(|e| Error::SnapshotUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    tracing::debug!("loaded {} issues from {}", issues.len(), path.display());
    Ok(issues)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
