// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate summary report.
//!
//! One Markdown document covering the whole snapshot: per-dimension count
//! breakdowns in first-encounter order, the leading high-priority issues,
//! and spotlight sections for the admin panel, database, and frontend
//! categories.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use sift_core::{categorize, prioritize, Category, Issue};

use crate::error::Result;
use crate::organize::Stats;

/// Timestamp format for the Generated line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// High-priority issues listed before truncation.
const HIGH_PRIORITY_LIMIT: usize = 10;

/// Issues listed per spotlight category section.
const SPOTLIGHT_LIMIT: usize = 5;

/// Categories that get their own spotlight section.
const SPOTLIGHT_CATEGORIES: &[(Category, &str)] = &[
    (Category::AdminPanel, "Admin Panel Issues"),
    (Category::Database, "Database Issues"),
    (Category::Frontend, "Frontend Issues"),
];

const NEXT_STEPS: &[(&str, &str)] = &[
    (
        "Review High Priority Issues",
        "Focus on critical and high priority items",
    ),
    (
        "Integrate with Planning",
        "Link relevant issues to future development plans",
    ),
    (
        "Update Milestones",
        "Ensure issues are properly grouped by release milestones",
    ),
    (
        "Regular Sync",
        "Re-run this analysis after each snapshot refresh",
    ),
];

fn breakdown(map: &indexmap::IndexMap<String, usize>) -> String {
    map.iter()
        .map(|(bucket, count)| format!("- **{}**: {}", bucket, count))
        .collect::<Vec<_>>()
        .join("\n")
}

fn issue_line(issue: &Issue) -> String {
    format!("- Issue #{}: {} ({})", issue.number, issue.title, issue.state)
}

/// Render the summary document.
///
/// `generated_at` is passed in rather than sampled here, so the whole
/// document is a pure function of its inputs.
pub fn summary(issues: &[Issue], stats: &Stats, generated_at: DateTime<Utc>) -> String {
    let high_priority = issues
        .iter()
        .filter(|i| prioritize(i).is_urgent())
        .take(HIGH_PRIORITY_LIMIT)
        .map(issue_line)
        .collect::<Vec<_>>()
        .join("\n");

    let mut report = format!(
        "# Issues Summary Report

**Generated**: {generated}
**Total Issues**: {total}

## Status Breakdown
{statuses}

## Priority Breakdown
{priorities}

## Category Breakdown
{categories}

## Milestone Breakdown
{milestones}

## High Priority Items
{high_priority}
",
        generated = generated_at.format(TIMESTAMP_FORMAT),
        total = issues.len(),
        statuses = breakdown(&stats.statuses),
        priorities = breakdown(&stats.priorities),
        categories = breakdown(&stats.categories),
        milestones = breakdown(&stats.milestones),
        high_priority = high_priority,
    );

    for (category, heading) in SPOTLIGHT_CATEGORIES {
        let matching = issues
            .iter()
            .filter(|i| categorize(i).contains(category))
            .take(SPOTLIGHT_LIMIT)
            .map(issue_line)
            .collect::<Vec<_>>()
            .join("\n");
        report.push_str(&format!(
            "\n## {} ({} total)\n{}\n",
            heading,
            stats.category_count(category.as_str()),
            matching
        ));
    }

    report.push_str("\n## Next Steps\n\n");
    for (index, (title, detail)) in NEXT_STEPS.iter().enumerate() {
        report.push_str(&format!("{}. **{}**: {}\n", index + 1, title, detail));
    }

    report
}

/// Render the summary and write it to `path`, fully overwriting any
/// previous report.
pub fn write_summary(
    issues: &[Issue],
    stats: &Stats,
    generated_at: DateTime<Utc>,
    path: &Path,
) -> Result<()> {
    fs::write(path, summary(issues, stats, generated_at))?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
