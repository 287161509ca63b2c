// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{error, fmt, io};

#[derive(Debug)]
pub enum AlignError {
    Io(io::Error),
    Json(serde_json::Error),
    // No '>' header anywhere in the input.
    InvalidFormat(String),
    // Number of records actually found (always < 2).
    InsufficientSequences(usize),
    TooLarge { cells: u64, max: u64 },
    MissingParameter(&'static str),
    UnsupportedUrl(String),
    Config(String),
}

// These allow conversion to AlignError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for AlignError {
    fn from(e: io::Error) -> Self {
        AlignError::Io(e)
    }
}

impl From<serde_json::Error> for AlignError {
    fn from(e: serde_json::Error) -> Self {
        AlignError::Json(e)
    }
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::Io(e) => write!(f, "I/O error: {}", e),
            AlignError::Json(e) => write!(f, "JSON error: {}", e),
            AlignError::InvalidFormat(msg) => write!(f, "Invalid FASTA format: {}", msg),
            AlignError::InsufficientSequences(n) => write!(
                f,
                "At least two sequences are required for alignment (found {})",
                n
            ),
            AlignError::TooLarge { cells, max } => write!(
                f,
                "Score matrix would have {} cells (maximum is {})",
                cells, max
            ),
            AlignError::MissingParameter(name) => write!(f, "Missing parameter: {}", name),
            AlignError::UnsupportedUrl(url) => write!(f, "Unsupported file URL: {}", url),
            AlignError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl error::Error for AlignError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AlignError::Io(e) => Some(e),
            AlignError::Json(e) => Some(e),
            _ => None,
        }
    }
}
