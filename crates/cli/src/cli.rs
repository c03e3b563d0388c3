// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the screenshot checker.

use clap::Parser;
use std::path::PathBuf;

/// Screenshot regression checker
#[derive(Parser, Clone, Debug)]
#[command(
    name = "shotcheck",
    version,
    about = "Compare generated screenshots against golden baselines"
)]
pub struct Cli {
    /// Directory of generated screenshots to check
    #[arg(long, value_name = "DIR")]
    pub results: Option<PathBuf>,

    /// Directory of golden baseline screenshots
    #[arg(long, value_name = "DIR")]
    pub baselines: Option<PathBuf>,

    /// Screenshot file extension, without the leading dot
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// TOML config file supplying any of the above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
