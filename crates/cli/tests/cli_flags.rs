// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! CLI flag and configuration handling for the shotcheck binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn shotcheck() -> Command {
    Command::cargo_bin("shotcheck").unwrap()
}

/// Result/baseline directories holding one mismatched artifact.
fn mismatched_fixture() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("TestResult");
    let baselines = dir.path().join("test-windows");
    fs::create_dir(&results).unwrap();
    fs::create_dir(&baselines).unwrap();
    fs::write(results.join("home.png"), b"new").unwrap();
    fs::write(baselines.join("home.png"), b"old").unwrap();
    (dir, results, baselines)
}

// =============================================================================
// Informational flags
// =============================================================================

#[test]
fn version_flag_prints_and_exits_zero() {
    shotcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shotcheck"));
}

#[test]
fn help_lists_the_directory_flags() {
    shotcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--results"))
        .stdout(predicate::str::contains("--baselines"))
        .stdout(predicate::str::contains("--extension"))
        .stdout(predicate::str::contains("--config"));
}

// =============================================================================
// Config file handling
// =============================================================================

#[test]
fn config_file_directories_are_honored() {
    let (dir, results, baselines) = mismatched_fixture();
    let config = dir.path().join("check.toml");
    fs::write(
        &config,
        format!(
            "results_dir = \"{}\"\nbaseline_dir = \"{}\"\n",
            results.display(),
            baselines.display()
        ),
    )
    .unwrap();

    shotcheck()
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("home.png is not equal"));
}

#[test]
fn flags_override_the_config_file() {
    let (dir, results, baselines) = mismatched_fixture();
    let empty = dir.path().join("empty");
    fs::create_dir(&empty).unwrap();
    let config = dir.path().join("check.toml");
    fs::write(
        &config,
        format!(
            "results_dir = \"{}\"\nbaseline_dir = \"{}\"\n",
            results.display(),
            baselines.display()
        ),
    )
    .unwrap();

    // Pointing --results at an empty directory turns the failing run green.
    shotcheck()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--results",
            empty.to_str().unwrap(),
        ])
        .assert()
        .success();
}

#[test]
fn config_file_extension_is_honored() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("TestResult");
    let baselines = dir.path().join("test-windows");
    fs::create_dir(&results).unwrap();
    fs::create_dir(&baselines).unwrap();
    fs::write(results.join("frame.bmp"), b"new").unwrap();
    fs::write(baselines.join("frame.bmp"), b"old").unwrap();

    let config = dir.path().join("check.toml");
    fs::write(
        &config,
        format!(
            "results_dir = \"{}\"\nbaseline_dir = \"{}\"\nextension = \"bmp\"\n",
            results.display(),
            baselines.display()
        ),
    )
    .unwrap();

    shotcheck()
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("frame.bmp is not equal"));
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn missing_config_file_exits_two() {
    shotcheck()
        .args(["--config", "/no/such/check.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn malformed_config_file_exits_two() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("check.toml");
    fs::write(&config, "results_dir = [not toml").unwrap();

    shotcheck()
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn unknown_config_key_exits_two() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("check.toml");
    fs::write(&config, "threshold = 3\n").unwrap();

    shotcheck()
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn empty_extension_exits_two() {
    shotcheck()
        .args(["--extension", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("extension must not be empty"));
}

#[test]
fn dotted_extension_exits_two() {
    shotcheck()
        .args(["--extension", ".png"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "extension must not start with a dot",
        ));
}
