// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum DissimError {
    Io(io::Error),
    Format(String),
    Config(String),
    InputNotFound(PathBuf),
    // A header without the accession or gene markers. `record` is 1-based.
    MalformedRecord {
        source: String,
        record: usize,
        header: String,
        reason: String,
    },
    // Both sequences of a scored pair are empty; the string names the pair.
    EmptySequenceComparison(String),
}

// These allow conversion to DissimError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for DissimError {
    fn from(e: io::Error) -> Self {
        DissimError::Io(e)
    }
}

impl From<serde_json::Error> for DissimError {
    fn from(e: serde_json::Error) -> Self {
        DissimError::Config(e.to_string())
    }
}

impl fmt::Display for DissimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DissimError::Io(e) => write!(f, "I/O error: {}", e),
            DissimError::Format(msg) => write!(f, "Format error: {}", msg),
            DissimError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DissimError::InputNotFound(path) => {
                write!(f, "Input not found: {}", path.display())
            }
            DissimError::MalformedRecord {
                source,
                record,
                header,
                reason,
            } => write!(
                f,
                "Malformed record #{} in {}: {} (header: '{}')",
                record, source, reason, header
            ),
            DissimError::EmptySequenceComparison(pair) => {
                write!(f, "Cannot compare two empty sequences: {}", pair)
            }
        }
    }
}

impl std::error::Error for DissimError {}
