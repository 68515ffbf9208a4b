//! # Exam Sections — Single Source of Truth
//!
//! Defines the `Section` enum with the three exam sections. This is the
//! ONE definition used across the toolchain. Every `match` on `Section`
//! must be exhaustive — adding a section forces every consumer (loader,
//! rules, report, consolidated writer) to handle it at compile time.
//!
//! ## Classification Invariant
//!
//! A file belongs to a section based solely on its basename's leading
//! token. File content is never inspected for classification, so the
//! consolidated output (`all_questions.json`) written into the input
//! directory is skipped on re-runs rather than re-ingested.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::QbankError;

/// The three exam sections of the question bank.
///
/// Each section has its own structural expectations: reading files carry
/// passages alongside questions, and only math admits grid-in questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Mathematics.
    Math,
    /// ELA reading comprehension (passage-based).
    ElaReading,
    /// ELA revising/editing.
    ElaRevising,
}

impl Section {
    /// Returns all sections in canonical (report) order.
    pub fn all_sections() -> &'static [Section] {
        &[Self::Math, Self::ElaReading, Self::ElaRevising]
    }

    /// Returns the snake_case string identifier for this section.
    ///
    /// This must match the serde serialization format and the top-level
    /// keys of the consolidated dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::ElaReading => "ela_reading",
            Self::ElaRevising => "ela_revising",
        }
    }

    /// Human-readable label used in the report tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::ElaReading => "ELA Reading",
            Self::ElaRevising => "ELA Revising",
        }
    }

    /// Hard-coded expected question count, kept in the report for manual
    /// comparison against the live corpus.
    pub fn expected_count(&self) -> usize {
        match self {
            Self::Math => 287,
            Self::ElaReading => 105,
            Self::ElaRevising => 110,
        }
    }

    /// Classify a file path into a section by its basename prefix.
    ///
    /// Returns `None` for files that belong to no section; callers skip
    /// those silently. Matching is prefix-only: `math_geometry.json` and
    /// `math2.json` are both math.
    pub fn classify(path: &Path) -> Option<Section> {
        let name = path.file_name()?.to_str()?;
        if name.starts_with("math") {
            Some(Self::Math)
        } else if name.starts_with("ela_reading") {
            Some(Self::ElaReading)
        } else if name.starts_with("ela_revising") {
            Some(Self::ElaRevising)
        } else {
            None
        }
    }
}

/// Expected total across all sections, kept for the report footer row.
pub const EXPECTED_TOTAL: usize = 502;

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = QbankError;

    /// Parse a section from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by [`Section::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "math" => Ok(Self::Math),
            "ela_reading" => Ok(Self::ElaReading),
            "ela_revising" => Ok(Self::ElaRevising),
            other => Err(QbankError::UnknownSection(other.to_string())),
        }
    }
}
