// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Screenshot regression checker binary entry point.

use clap::Parser;

use shotcheck::cli::Cli;
use shotcheck::compare::run_check;
use shotcheck::config::CheckConfig;
use shotcheck::output::{exit_codes, print_error, write_report};

fn main() {
    let cli = Cli::parse();

    let config = match CheckConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::CONFIG_ERROR);
        }
    };

    let report = match run_check(&config.results_dir, &config.baseline_dir, &config.extension) {
        Ok(report) => report,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::CONFIG_ERROR);
        }
    };

    let _ = write_report(&mut std::io::stderr(), &report);
    if !report.passed() {
        std::process::exit(exit_codes::CHECK_FAILED);
    }
}
