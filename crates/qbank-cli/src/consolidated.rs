//! # Consolidated Dataset Writer
//!
//! Serializes the whole corpus into one JSON document for downstream
//! consumption:
//!
//! ```json
//! {
//!   "math": [...],
//!   "ela_reading": { "passages": [...], "questions": [...] },
//!   "ela_revising": [...]
//! }
//! ```
//!
//! Records pass through losslessly (unknown fields included). Any
//! existing output file is overwritten unconditionally.

use std::path::Path;

use qbank_core::{QbankError, Section};
use qbank_validate::Corpus;
use serde_json::json;

/// Build the consolidated document.
pub fn document(corpus: &Corpus) -> serde_json::Value {
    json!({
        "math": corpus.questions(Section::Math),
        "ela_reading": {
            "passages": corpus.passages(),
            "questions": corpus.questions(Section::ElaReading),
        },
        "ela_revising": corpus.questions(Section::ElaRevising),
    })
}

/// Write the consolidated document to `path`, pretty-printed.
pub fn write(corpus: &Corpus, path: &Path) -> Result<(), QbankError> {
    let rendered =
        serde_json::to_string_pretty(&document(corpus)).map_err(|e| QbankError::OutputWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    std::fs::write(path, rendered).map_err(|e| QbankError::OutputWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
