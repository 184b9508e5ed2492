// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sift-core operations.

use thiserror::Error;

/// All possible errors that can occur in sift-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue state: '{0}'\n  hint: valid states are: open, closed")]
    InvalidState(String),

    #[error("invalid category: '{0}'\n  hint: valid categories are: frontend, backend, blockchain, adminPanel, database, security, performance, documentation, testing, devops, uncategorized")]
    InvalidCategory(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: critical, high, medium, low")]
    InvalidPriority(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sift-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
