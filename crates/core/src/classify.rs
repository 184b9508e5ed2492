// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword/label classification of issues into categories and priorities.
//!
//! Both classifiers are pure functions over an [`Issue`] and the fixed
//! rule tables below. Table declaration order is significant: categories
//! are collected in table order, and the first matching priority level
//! wins.
//!
//! Matching is intentionally loose. Label names are compared exactly
//! (after lowercasing), but keywords are substring matches against the
//! lowercased title and body, so body text like "needs auth" attaches the
//! `security` category. That looseness is part of the contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Subject area assigned to an issue. An issue may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Frontend,
    Backend,
    Blockchain,
    AdminPanel,
    Database,
    Security,
    Performance,
    Documentation,
    Testing,
    Devops,
    /// Synthesized when no rule matches; never appears in the rule table.
    Uncategorized,
}

impl Category {
    /// Returns the bucket name used in directories, reports, and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Blockchain => "blockchain",
            Category::AdminPanel => "adminPanel",
            Category::Database => "database",
            Category::Security => "security",
            Category::Performance => "performance",
            Category::Documentation => "documentation",
            Category::Testing => "testing",
            Category::Devops => "devops",
            Category::Uncategorized => "uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "frontend" => Ok(Category::Frontend),
            "backend" => Ok(Category::Backend),
            "blockchain" => Ok(Category::Blockchain),
            "adminPanel" => Ok(Category::AdminPanel),
            "database" => Ok(Category::Database),
            "security" => Ok(Category::Security),
            "performance" => Ok(Category::Performance),
            "documentation" => Ok(Category::Documentation),
            "testing" => Ok(Category::Testing),
            "devops" => Ok(Category::Devops),
            "uncategorized" => Ok(Category::Uncategorized),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// Severity assigned to an issue. Exactly one per issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// All levels in precedence order (first match wins).
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Returns the bucket name used in directories, reports, and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// True for the levels surfaced in the report's high-priority section.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Priority::Critical | Priority::High)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// One row of the category table: which label names claim the category
/// outright, and which keywords claim it from title/body text.
struct CategoryRule {
    category: Category,
    keywords: &'static [&'static str],
    labels: &'static [&'static str],
}

/// Category rules in declaration order. One row per predefined category;
/// `uncategorized` is the fallback, not a row.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Frontend,
        keywords: &[
            "ui", "react", "frontend", "component", "interface", "design", "css", "tailwind",
        ],
        labels: &["frontend", "ui", "ux", "design", "react"],
    },
    CategoryRule {
        category: Category::Backend,
        keywords: &["api", "server", "backend", "endpoint", "route", "service"],
        labels: &["backend", "api", "server"],
    },
    CategoryRule {
        category: Category::Blockchain,
        keywords: &[
            "smart contract", "blockchain", "solidity", "web3", "ethereum", "besu",
        ],
        labels: &["blockchain", "smart-contract", "web3"],
    },
    CategoryRule {
        category: Category::AdminPanel,
        keywords: &["admin", "panel", "dashboard", "management", "administration"],
        labels: &["admin", "dashboard", "admin-panel"],
    },
    CategoryRule {
        category: Category::Database,
        keywords: &["database", "db", "postgresql", "sql", "migration", "schema"],
        labels: &["database", "db", "postgresql", "migration"],
    },
    CategoryRule {
        category: Category::Security,
        keywords: &["security", "auth", "authentication", "authorization", "pin", "kyc"],
        labels: &["security", "auth", "authentication"],
    },
    CategoryRule {
        category: Category::Performance,
        keywords: &["performance", "optimization", "slow", "cache", "speed"],
        labels: &["performance", "optimization"],
    },
    CategoryRule {
        category: Category::Documentation,
        keywords: &["documentation", "docs", "readme", "guide", "tutorial"],
        labels: &["documentation", "docs"],
    },
    CategoryRule {
        category: Category::Testing,
        keywords: &["test", "testing", "spec", "cypress", "jest", "e2e"],
        labels: &["testing", "test", "qa"],
    },
    CategoryRule {
        category: Category::Devops,
        keywords: &["deployment", "ci", "cd", "docker", "infrastructure"],
        labels: &["devops", "deployment", "ci-cd"],
    },
];

/// Priority words in precedence order. The same word list serves both the
/// label pass (exact match) and the text pass (substring match).
const PRIORITY_WORDS: &[(Priority, &[&str])] = &[
    (
        Priority::Critical,
        &["critical", "urgent", "security", "down", "broken"],
    ),
    (Priority::High, &["high", "important", "major", "bug"]),
    (Priority::Medium, &["medium", "enhancement", "feature"]),
    (Priority::Low, &["low", "minor", "nice-to-have", "documentation"]),
];

/// Assigns every category whose rule matches the issue.
///
/// Per rule: a label hit claims the category and skips its keyword check;
/// otherwise any keyword occurring in the lowered title or body claims it.
/// Returns `[Uncategorized]` when nothing matches, so the result is always
/// non-empty.
pub fn categorize(issue: &Issue) -> Vec<Category> {
    let title = issue.title.to_lowercase();
    let body = issue.body.as_deref().unwrap_or("").to_lowercase();
    let labels = issue.lowered_labels();

    let mut categories = Vec::new();

    for rule in CATEGORY_RULES {
        if labels.iter().any(|l| rule.labels.contains(&l.as_str())) {
            categories.push(rule.category);
            continue;
        }
        if rule
            .keywords
            .iter()
            .any(|k| title.contains(k) || body.contains(k))
        {
            categories.push(rule.category);
        }
    }

    if categories.is_empty() {
        categories.push(Category::Uncategorized);
    }
    categories
}

/// Assigns exactly one priority level to the issue.
///
/// Labels are checked for *all* levels before any free-text scan: a label
/// exactly named `low` wins over a body containing "critical". Only when
/// no label matches any level does the keyword substring pass run, again
/// in precedence order. Defaults to [`Priority::Medium`].
pub fn prioritize(issue: &Issue) -> Priority {
    let title = issue.title.to_lowercase();
    let body = issue.body.as_deref().unwrap_or("").to_lowercase();
    let labels = issue.lowered_labels();

    for (priority, words) in PRIORITY_WORDS {
        if labels.iter().any(|l| words.contains(&l.as_str())) {
            return *priority;
        }
    }

    for (priority, words) in PRIORITY_WORDS {
        if words.iter().any(|w| title.contains(w) || body.contains(w)) {
            return *priority;
        }
    }

    Priority::Medium
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
