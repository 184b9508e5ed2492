// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot data types for the sift triage tool.
//!
//! These mirror one record of the tracker export consumed by the CLI: a
//! JSON array of issues with title, body, labels, state, and metadata.
//! Records are read-only input; nothing in sift mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow state of an issue as reported by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Still open in the tracker.
    Open,
    /// Closed (completed or discarded; the export does not distinguish).
    Closed,
}

impl IssueState {
    /// Returns the string representation used in bucket names and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(IssueState::Open),
            "closed" => Ok(IssueState::Closed),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// A tracker account reference (issue author or assignee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Account login name.
    pub login: String,
}

/// A label attached to an issue by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name as configured in the tracker.
    pub name: String,
}

/// An optional release grouping attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone title.
    pub title: String,
}

/// One record from the tracker export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Tracker-assigned issue number.
    pub number: u64,
    /// Short description of the issue.
    pub title: String,
    /// Longer free-text description; absent for bare issues.
    #[serde(default)]
    pub body: Option<String>,
    /// Canonical URL of the issue.
    pub url: String,
    /// Workflow state.
    pub state: IssueState,
    /// Who opened the issue.
    pub author: Author,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
    /// Assigned accounts, in tracker order.
    #[serde(default)]
    pub assignees: Vec<Author>,
    /// Labels, in tracker order.
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Release grouping, if any.
    #[serde(default)]
    pub milestone: Option<Milestone>,
}

impl Issue {
    /// Comma-joined assignee logins, or `"Unassigned"` when empty.
    pub fn assignee_list(&self) -> String {
        if self.assignees.is_empty() {
            return "Unassigned".to_string();
        }
        self.assignees
            .iter()
            .map(|a| a.login.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Milestone title for display, or `"No milestone"` when absent.
    pub fn milestone_title(&self) -> &str {
        self.milestone
            .as_ref()
            .map(|m| m.title.as_str())
            .unwrap_or("No milestone")
    }

    /// Milestone bucket name for the by-milestone tree.
    ///
    /// Issues without a milestone all land in a shared `no-milestone`
    /// bucket rather than being skipped.
    pub fn milestone_slug(&self) -> &str {
        self.milestone
            .as_ref()
            .map(|m| m.title.as_str())
            .unwrap_or("no-milestone")
    }

    /// Lowercased label names, in tracker order.
    pub fn lowered_labels(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.to_lowercase()).collect()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
