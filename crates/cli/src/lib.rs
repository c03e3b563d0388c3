// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Screenshot regression checker.
//!
//! Compares every screenshot found in a result directory against the
//! same-named golden image in a baseline directory, failing the run with the
//! name of each artifact that does not match byte-for-byte.

pub mod cli;
pub mod config;
pub mod output;

/// Re-exported comparison engine types from the shotcheck-compare crate.
pub mod compare {
    pub use shotcheck_compare::{
        compare_files, run_check, scan_results, Artifact, CheckFailure, Difference, RunReport,
        ScanError,
    };
}
