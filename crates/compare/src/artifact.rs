// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact discovery in a result directory.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single generated or reference file, identified by its base name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// File name including extension, e.g. `login.png`.
    pub name: String,
    /// Full path to the file on disk.
    pub path: PathBuf,
}

/// Errors raised while scanning a result directory
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("result directory path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("invalid scan pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to read directory entry: {0}")]
    Entry(#[from] glob::GlobError),
}

/// List the artifacts in `dir` whose names end in `.extension`.
///
/// Selection matches the glob pattern `<dir>/*.<extension>`, so a directory
/// that does not exist matches nothing and yields an empty set. Entries come
/// back in alphabetical order.
pub fn scan_results(dir: &Path, extension: &str) -> Result<Vec<Artifact>, ScanError> {
    let dir = dir
        .to_str()
        .ok_or_else(|| ScanError::NonUtf8Path(dir.to_path_buf()))?;
    let pattern = format!("{}/*.{}", dir, extension);

    let mut artifacts = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        artifacts.push(Artifact { name, path });
    }
    Ok(artifacts)
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
