// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the siftrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
/// Every variant is fatal: the run aborts, nothing is retried, and output
/// directories already reset are left as they are.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no issues snapshot found at {path}\n  hint: export the tracker data first to produce the snapshot file")]
    SnapshotMissing { path: String },

    #[error("cannot parse issues snapshot {path}: {reason}")]
    SnapshotUnreadable { path: String, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Core(#[from] sift_core::Error),
}

/// A specialized Result type for siftrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
