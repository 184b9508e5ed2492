// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory fan-out and stat tallying.
//!
//! Four independent trees live under the organized root: `by-category`,
//! `by-priority`, `by-status`, and `by-milestone`. Each run resets every
//! tree from empty and repopulates it in a single pass over the issue
//! array, so no file from a previous run with a different issue set can
//! survive.
//!
//! Nothing here is transactional. The reset is an explicit two-step
//! remove-then-create, and a crash mid-run can leave a mix of deleted and
//! partially repopulated trees; the next successful run repairs it.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use sift_core::{categorize, prioritize, Issue};

use crate::config::Paths;
use crate::error::Result;
use crate::render::render;
use crate::sanitize;

const BY_CATEGORY: &str = "by-category";
const BY_PRIORITY: &str = "by-priority";
const BY_STATUS: &str = "by-status";
const BY_MILESTONE: &str = "by-milestone";

/// The four dimension roots under the organized directory.
pub const DIMENSION_DIRS: [&str; 4] = [BY_CATEGORY, BY_PRIORITY, BY_STATUS, BY_MILESTONE];

/// Per-bucket document counts for one run.
///
/// Maps preserve first-encounter order; the report iterates them as-is.
/// An issue in several categories increments each of those counters, so
/// the category total can exceed the issue count. The other three
/// dimensions count every issue exactly once.
#[derive(Debug, Default)]
pub struct Stats {
    pub categories: IndexMap<String, usize>,
    pub priorities: IndexMap<String, usize>,
    pub statuses: IndexMap<String, usize>,
    pub milestones: IndexMap<String, usize>,
}

impl Stats {
    /// Documents written for a category, zero if never encountered.
    pub fn category_count(&self, category: &str) -> usize {
        self.categories.get(category).copied().unwrap_or(0)
    }
}

fn bump(map: &mut IndexMap<String, usize>, key: &str) {
    *map.entry(key.to_string()).or_insert(0) += 1;
}

/// Reset one dimension root: remove the tree if present, then recreate it
/// empty. Two distinct filesystem operations, not atomic.
fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Create the bucket directory if needed and write the document into it.
fn write_bucket(bucket: &Path, filename: &str, doc: &str) -> Result<()> {
    fs::create_dir_all(bucket)?;
    fs::write(bucket.join(filename), doc)?;
    Ok(())
}

/// Fan every issue's rendered document out into the four trees and return
/// the accumulated per-bucket counts.
///
/// Any filesystem error aborts the run; directories already reset stay
/// reset.
pub fn organize(issues: &[Issue], paths: &Paths) -> Result<Stats> {
    for dim in DIMENSION_DIRS {
        let root = paths.organized.join(dim);
        reset_dir(&root)?;
        tracing::debug!("reset {}", root.display());
    }

    let mut stats = Stats::default();

    for issue in issues {
        let categories = categorize(issue);
        let priority = prioritize(issue);
        let doc = render(issue, &categories, priority);
        let filename = sanitize::filename(issue.number, &issue.title);

        for category in &categories {
            let bucket = paths.organized.join(BY_CATEGORY).join(category.as_str());
            write_bucket(&bucket, &filename, &doc)?;
            bump(&mut stats.categories, category.as_str());
        }

        let bucket = paths.organized.join(BY_PRIORITY).join(priority.as_str());
        write_bucket(&bucket, &filename, &doc)?;
        bump(&mut stats.priorities, priority.as_str());

        let bucket = paths.organized.join(BY_STATUS).join(issue.state.as_str());
        write_bucket(&bucket, &filename, &doc)?;
        bump(&mut stats.statuses, issue.state.as_str());

        let bucket = paths
            .organized
            .join(BY_MILESTONE)
            .join(issue.milestone_slug());
        write_bucket(&bucket, &filename, &doc)?;
        bump(&mut stats.milestones, issue.milestone_slug());

        tracing::debug!(
            "issue #{} -> {} categories, priority {}",
            issue.number,
            categories.len(),
            priority
        );
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "organize_tests.rs"]
mod tests;
