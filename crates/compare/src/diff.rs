// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact byte comparison of artifact pairs.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read size for the chunked comparison loop.
const CHUNK_SIZE: usize = 8 * 1024;

/// How two same-named artifacts diverge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difference {
    /// The files have different byte lengths.
    Length { result: u64, baseline: u64 },
    /// Same length, first differing byte at this offset.
    Byte { offset: u64 },
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { result, baseline } => {
                write!(f, "{} bytes, baseline has {}", result, baseline)
            }
            Self::Byte { offset } => write!(f, "first differing byte at offset {}", offset),
        }
    }
}

/// Compare two files for exact byte equality.
///
/// Byte lengths are checked first so files of different sizes are rejected
/// without reading their contents; equal-length files are then read in
/// fixed-size chunks. Returns `None` when the files are identical.
pub fn compare_files(result: &Path, baseline: &Path) -> io::Result<Option<Difference>> {
    let result_len = result.metadata()?.len();
    let baseline_len = baseline.metadata()?.len();
    if result_len != baseline_len {
        return Ok(Some(Difference::Length {
            result: result_len,
            baseline: baseline_len,
        }));
    }

    let mut result_file = File::open(result)?;
    let mut baseline_file = File::open(baseline)?;
    let mut result_buf = [0u8; CHUNK_SIZE];
    let mut baseline_buf = [0u8; CHUNK_SIZE];
    let mut offset = 0u64;

    loop {
        let read_a = fill(&mut result_file, &mut result_buf)?;
        let read_b = fill(&mut baseline_file, &mut baseline_buf)?;
        let common = read_a.min(read_b);

        if let Some(i) = result_buf[..common]
            .iter()
            .zip(&baseline_buf[..common])
            .position(|(a, b)| a != b)
        {
            return Ok(Some(Difference::Byte {
                offset: offset + i as u64,
            }));
        }
        if read_a != read_b {
            // A file changed length between the metadata check and the read.
            return Ok(Some(Difference::Byte {
                offset: offset + common as u64,
            }));
        }
        if read_a == 0 {
            return Ok(None);
        }
        offset += read_a as u64;
    }
}

/// Read until `buf` is full or the file is exhausted.
fn fill(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
