// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The regression check pass over a result directory.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::artifact::{scan_results, ScanError};
use crate::diff::{compare_files, Difference};

/// One failed comparison, named after the artifact that failed.
#[derive(Debug, Error)]
pub enum CheckFailure {
    /// Both artifacts exist but their contents differ.
    #[error("{name} is not equal ({difference})")]
    ContentMismatch { name: String, difference: Difference },

    /// The result artifact has no same-named baseline counterpart.
    #[error("{name} has no baseline")]
    MissingBaseline { name: String },

    /// Either side could not be read.
    #[error("{name} could not be compared: {source}")]
    Unreadable { name: String, source: io::Error },
}

impl CheckFailure {
    /// Name of the artifact this failure refers to.
    pub fn artifact(&self) -> &str {
        match self {
            Self::ContentMismatch { name, .. }
            | Self::MissingBaseline { name }
            | Self::Unreadable { name, .. } => name,
        }
    }
}

/// Aggregate outcome of one check run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of artifacts found in the result directory.
    pub checked: usize,
    /// Failures in artifact name order.
    pub failures: Vec<CheckFailure>,
}

impl RunReport {
    /// True when every comparison passed. Trivially true for zero artifacts.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the comparison pass: every result artifact against its baseline.
///
/// Comparisons are independent. A missing baseline or an unreadable file is
/// recorded as a failure for that artifact and the pass continues; the
/// overall outcome is the conjunction of all comparisons.
pub fn run_check(
    results_dir: &Path,
    baseline_dir: &Path,
    extension: &str,
) -> Result<RunReport, ScanError> {
    let artifacts = scan_results(results_dir, extension)?;
    let mut report = RunReport {
        checked: artifacts.len(),
        failures: Vec::new(),
    };

    for artifact in artifacts {
        let baseline = baseline_dir.join(&artifact.name);
        if !baseline.exists() {
            report.failures.push(CheckFailure::MissingBaseline {
                name: artifact.name,
            });
            continue;
        }
        match compare_files(&artifact.path, &baseline) {
            Ok(None) => {}
            Ok(Some(difference)) => report.failures.push(CheckFailure::ContentMismatch {
                name: artifact.name,
                difference,
            }),
            Err(source) => report.failures.push(CheckFailure::Unreadable {
                name: artifact.name,
                source,
            }),
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
