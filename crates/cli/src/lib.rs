// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! siftrs - Snapshot triage library behind the `sift` CLI.
//!
//! `sift` reads a JSON export of issue-tracker data, tags every issue with
//! derived categories and a priority, fans the rendered Markdown documents
//! out into four directory trees (by category, priority, status, and
//! milestone), and writes an aggregate summary report.
//!
//! # Main Components
//!
//! - [`loader`] - all-or-nothing snapshot loading
//! - [`render`] - per-issue Markdown document template
//! - [`organize`] - directory reset, fan-out, and stat tallying
//! - [`report`] - the aggregate summary document
//! - [`config`] - fixed default paths plus `sift.toml`/flag overrides
//!
//! Classification itself lives in `sift-core`, which has no I/O.

mod cli;
pub mod colors;
mod commands;

pub mod config;
pub mod error;
pub mod loader;
pub mod organize;
pub mod render;
pub mod report;
pub mod sanitize;

pub use cli::{Cli, Command};
pub use config::Paths;
pub use error::{Error, Result};

use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;

/// Initialize tracing from the `SIFT_LOG` environment variable.
///
/// Diagnostics go to stderr so they never mix with the stdout recap.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("SIFT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let base = PathBuf::from(cli.directory.as_deref().unwrap_or("."));

    // A bare `sift` runs the full organize pass against the default paths.
    match cli.command.unwrap_or(Command::Organize { input: None }) {
        Command::Organize { input } => commands::organize::run(&base, input.as_deref()),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "sift", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
