// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::colors;

#[derive(Parser)]
#[command(name = "sift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Organize an exported issue-tracker snapshot into browsable Markdown trees")]
#[command(
    long_about = "Organize an exported issue-tracker snapshot into browsable Markdown trees.\n\n\
    Reads a JSON array of issues, tags each one with derived categories and a priority,\n\
    writes one document per issue into by-category/by-priority/by-status/by-milestone\n\
    trees, and generates an aggregate summary report."
)]
#[command(styles = colors::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if sift was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify issues and fan them out into the organized/ trees (default)
    #[command(after_help = colors::examples("\
Examples:
  sift                                   Organize using the default snapshot path
  sift organize --input issues.json      Organize a specific snapshot file
  sift -C ../tracker organize            Run against another project directory"))]
    Organize {
        /// Snapshot file to read (default: raw-data/all-issues-latest.json)
        #[arg(long, value_name = "FILE")]
        input: Option<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
