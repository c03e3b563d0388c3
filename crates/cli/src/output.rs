// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic and failure output for check runs.
//!
//! Provides ANSI color support with automatic terminal detection.

use std::io::{self, IsTerminal, Write};

use shotcheck_compare::RunReport;

/// Exit codes for the checker binary
pub mod exit_codes {
    /// Every comparison passed, or there was nothing to compare
    pub const SUCCESS: i32 = 0;
    /// At least one comparison failed or errored
    pub const CHECK_FAILED: i32 = 1;
    /// Configuration or setup error before any comparison ran
    pub const CONFIG_ERROR: i32 = 2;
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Write per-failure lines and a summary for a failing run.
///
/// A passing report writes nothing, so a clean run stays silent.
pub fn write_report<W: Write>(writer: &mut W, report: &RunReport) -> io::Result<()> {
    if report.passed() {
        return Ok(());
    }
    for failure in &report.failures {
        writeln!(writer, "FAIL: {}", failure)?;
    }
    writeln!(
        writer,
        "{} of {} screenshots failed",
        report.failures.len(),
        report.checked
    )
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
