// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use chrono::Utc;

use crate::config::Paths;
use crate::error::Result;
use crate::{loader, organize, report};

/// The full linear run: load, classify and fan out, summarize, recap.
pub fn run(base: &Path, input_override: Option<&str>) -> Result<()> {
    let paths = Paths::resolve(base, input_override)?;
    run_impl(&paths)
}

/// Internal implementation that accepts resolved paths for testing.
pub(crate) fn run_impl(paths: &Paths) -> Result<()> {
    let issues = loader::load_issues(&paths.input)?;
    println!("Loaded {} issues from {}", issues.len(), paths.input.display());

    let stats = organize::organize(&issues, paths)?;
    report::write_summary(&issues, &stats, Utc::now(), &paths.summary)?;

    println!("Organized {} issues into {}", issues.len(), paths.organized.display());
    println!("  categories: {}", stats.categories.len());
    println!("  priorities: {}", stats.priorities.len());
    println!("  statuses: {}", stats.statuses.len());
    println!("  milestones: {}", stats.milestones.len());
    println!("Summary written to {}", paths.summary.display());

    Ok(())
}

#[cfg(test)]
#[path = "organize_tests.rs"]
mod tests;
