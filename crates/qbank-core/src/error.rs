//! # Error Types
//!
//! Errors shared across the qbank workspace. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Malformed input files fail loudly with full context (path + parser
//!   message) and abort the run.
//! - Schema/content violations are NOT errors in this sense: they are
//!   collected as `Violation` values by the validation pass and surfaced
//!   in the report. Only unrecoverable conditions live here.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the qbank toolchain.
#[derive(Error, Debug)]
pub enum QbankError {
    /// An input file was not valid JSON. Fatal: the whole run aborts
    /// with no partial report written.
    #[error("malformed JSON in '{path}': {reason}")]
    MalformedJson {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parser error message.
        reason: String,
    },

    /// The input directory could not be enumerated.
    #[error("cannot read question directory '{path}': {reason}")]
    DirectoryRead {
        /// Path to the directory.
        path: PathBuf,
        /// Underlying io error message.
        reason: String,
    },

    /// An output file (report or consolidated dataset) could not be written.
    #[error("cannot write output '{path}': {reason}")]
    OutputWrite {
        /// Path to the output file.
        path: PathBuf,
        /// Underlying io error message.
        reason: String,
    },

    /// A string did not name a known section.
    #[error("unknown section: {0:?}")]
    UnknownSection(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
