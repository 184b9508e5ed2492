// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-issue Markdown document template.
//!
//! [`render`] is a pure function of the issue and its classification; the
//! organizer writes the same document into every bucket the issue maps to.

use sift_core::{Category, Issue, Priority};

/// Date format for the Created/Updated metadata lines.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One line of the Integration Impact block: the affirmative sentence is
/// used when any of the triggering categories is present, the review
/// sentence otherwise.
struct ImpactLine {
    heading: &'static str,
    triggers: &'static [Category],
    affirmative: &'static str,
    review: &'static str,
}

const IMPACT_LINES: &[ImpactLine] = &[
    ImpactLine {
        heading: "Admin Panel Development",
        triggers: &[Category::AdminPanel],
        affirmative: "✅ Directly related to admin panel development",
        review: "⚠️ Consider impact on admin panel features",
    },
    ImpactLine {
        heading: "Database Migration",
        triggers: &[Category::Database],
        affirmative: "✅ Directly related to database migration",
        review: "⚠️ Consider database implications",
    },
    ImpactLine {
        heading: "Explorer Modernization",
        triggers: &[Category::Frontend, Category::Blockchain],
        affirmative: "✅ May impact explorer modernization",
        review: "⚠️ Review for explorer relevance",
    },
    ImpactLine {
        heading: "Mobile App Development",
        triggers: &[Category::Frontend, Category::Backend],
        affirmative: "✅ Consider for mobile app API design",
        review: "⚠️ Review mobile compatibility",
    },
];

const CHECKLIST: &[&str] = &[
    "Review requirements against future development plans",
    "Estimate development effort",
    "Identify dependencies",
    "Plan testing strategy",
    "Consider integration points",
    "Update relevant planning documents",
];

/// Render one issue plus its derived classification into a Markdown
/// document.
pub fn render(issue: &Issue, categories: &[Category], priority: Priority) -> String {
    let category_list = categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let labels = issue
        .labels
        .iter()
        .map(|l| format!("- {}", l.name))
        .collect::<Vec<_>>()
        .join("\n");
    let body = issue.body.as_deref().unwrap_or("No description provided.");

    let mut doc = format!(
        "# Issue #{number}: {title}

**URL**: {url}
**Status**: {state}
**Author**: {author}
**Created**: {created}
**Updated**: {updated}
**Categories**: {categories}
**Priority**: {priority}
**Assignees**: {assignees}
**Milestone**: {milestone}

## Labels
{labels}

## Description
{body}

---

## Integration Impact
",
        number = issue.number,
        title = issue.title,
        url = issue.url,
        state = issue.state,
        author = issue.author.login,
        created = issue.created_at.format(DATE_FORMAT),
        updated = issue.updated_at.format(DATE_FORMAT),
        categories = category_list,
        priority = priority,
        assignees = issue.assignee_list(),
        milestone = issue.milestone_title(),
        labels = labels,
        body = body,
    );

    for line in IMPACT_LINES {
        let hit = line.triggers.iter().any(|t| categories.contains(t));
        let sentence = if hit { line.affirmative } else { line.review };
        doc.push_str(&format!("\n### {}\n{}\n", line.heading, sentence));
    }

    doc.push_str("\n## Implementation Checklist\n");
    for item in CHECKLIST {
        doc.push_str(&format!("- [ ] {}\n", item));
    }

    doc
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
