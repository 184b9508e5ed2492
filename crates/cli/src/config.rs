// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path configuration for a sift run.
//!
//! Every path is relative to a base directory (the current directory, or
//! whatever `-C/--directory` points at). The defaults reproduce the fixed
//! layout the tool was built around:
//!
//! - `raw-data/all-issues-latest.json` - the snapshot to read
//! - `organized/` - root of the four bucket trees
//! - `ISSUES_SUMMARY.md` - the aggregate report
//!
//! An optional `sift.toml` in the base directory may override any of the
//! three; a `--input` flag overrides the file in turn.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "sift.toml";
const DEFAULT_INPUT: &str = "raw-data/all-issues-latest.json";
const DEFAULT_ORGANIZED_DIR: &str = "organized";
const DEFAULT_SUMMARY_FILE: &str = "ISSUES_SUMMARY.md";

/// Optional overrides read from `sift.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file, relative to the base directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Root directory for the bucket trees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organized_dir: Option<String>,
    /// Summary report file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<String>,
}

impl Config {
    /// Loads `sift.toml` from the base directory.
    ///
    /// A missing file is not an error; malformed TOML is fatal.
    pub fn load(base: &Path) -> Result<Self> {
        let config_path = base.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", config_path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", config_path.display(), e)))?;
        Ok(config)
    }
}

/// Resolved filesystem locations for one run.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory all other paths were resolved against.
    pub base: PathBuf,
    /// Snapshot file to read.
    pub input: PathBuf,
    /// Root of the four bucket trees.
    pub organized: PathBuf,
    /// Summary report file.
    pub summary: PathBuf,
}

impl Paths {
    /// Resolve paths for `base`: defaults, then `sift.toml`, then the
    /// `--input` flag, each layer overriding the previous one.
    pub fn resolve(base: &Path, input_override: Option<&str>) -> Result<Self> {
        let config = Config::load(base)?;

        let input = input_override
            .map(str::to_string)
            .or(config.input)
            .unwrap_or_else(|| DEFAULT_INPUT.to_string());
        let organized = config
            .organized_dir
            .unwrap_or_else(|| DEFAULT_ORGANIZED_DIR.to_string());
        let summary = config
            .summary_file
            .unwrap_or_else(|| DEFAULT_SUMMARY_FILE.to_string());

        Ok(Paths {
            base: base.to_path_buf(),
            input: base.join(input),
            organized: base.join(organized),
            summary: base.join(summary),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
