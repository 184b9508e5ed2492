// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output filename derivation.
//!
//! Every bucket write for an issue uses the same name, so the same issue
//! is trivially findable across all four trees.

/// Derive the document filename for an issue.
///
/// The title is embedded with every character outside `[A-Za-z0-9]`
/// replaced one-for-one with `-`. Runs of punctuation become runs of
/// hyphens; nothing is collapsed or trimmed.
pub fn filename(number: u64, title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("issue-{}-{}.md", number, slug)
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
