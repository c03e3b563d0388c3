// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check configuration: built-in defaults, TOML file loading, CLI overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;

/// Default result directory, matching the layout the screenshot generation
/// step writes next to the checker.
const DEFAULT_RESULTS_DIR: &str = "../TestResult";
/// Default baseline directory.
const DEFAULT_BASELINE_DIR: &str = "../test-windows";
/// Default screenshot extension.
const DEFAULT_EXTENSION: &str = "png";

/// Resolved check configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Directory of generated screenshots.
    pub results_dir: PathBuf,
    /// Directory of golden baselines.
    pub baseline_dir: PathBuf,
    /// Extension the scan selects on, without the leading dot.
    pub extension: String,
}

/// On-disk configuration file contents. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub results_dir: Option<PathBuf>,
    #[serde(default)]
    pub baseline_dir: Option<PathBuf>,
    #[serde(default)]
    pub extension: Option<String>,
}

/// Errors raised while resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("extension must not be empty")]
    EmptyExtension,

    #[error("extension must not start with a dot: {0}")]
    DottedExtension(String),
}

impl CheckConfig {
    /// Resolve configuration from CLI flags, an optional config file, and
    /// built-in defaults, in that precedence order.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let config = Self {
            results_dir: cli
                .results
                .clone()
                .or(file.results_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR)),
            baseline_dir: cli
                .baselines
                .clone()
                .or(file.baseline_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BASELINE_DIR)),
            extension: cli
                .extension
                .clone()
                .or(file.extension)
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the resolved configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::DottedExtension(self.extension.clone()));
        }
        Ok(())
    }
}

impl ConfigFile {
    /// Load a TOML config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
