// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sift-core - Data model and classification rules for the sift triage tool.
//!
//! This crate holds everything that is independent of the filesystem:
//!
//! - [`issue`] - the snapshot data types ([`Issue`](issue::Issue),
//!   [`IssueState`](issue::IssueState), labels, milestones)
//! - [`classify`] - the fixed category/priority rule tables and the pure
//!   [`categorize`](classify::categorize) / [`prioritize`](classify::prioritize)
//!   functions
//! - [`error`] - error types for all core operations
//!
//! The CLI crate layers loading, rendering, and directory fan-out on top.

pub mod classify;
pub mod error;
pub mod issue;

pub use classify::{categorize, prioritize, Category, Priority};
pub use error::{Error, Result};
pub use issue::{Author, Issue, IssueState, Label, Milestone};
