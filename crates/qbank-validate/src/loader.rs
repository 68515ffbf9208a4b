//! # File Discovery and Section Loading
//!
//! Discovers `*.json` files in the bank directory (sorted filename order
//! — processing order is part of the deterministic output contract) and
//! turns parsed file content into question and passage records according
//! to the per-section shape contract:
//!
//! - a bare list of questions;
//! - an object with a `questions` list — reading files may also carry a
//!   `passages` list;
//! - an object with an `items` list as fallback (non-reading sections);
//! - anything else loads as zero questions, without error.
//!
//! Malformed JSON is the one fatal condition: the error propagates and
//! the whole run aborts with no partial outputs.

use std::path::{Path, PathBuf};

use qbank_core::{PassageRecord, QbankError, QuestionRecord, Section};
use serde_json::Value;

/// All `*.json` files in `dir`, sorted by filename.
///
/// Subdirectories are not descended into. Classification happens later;
/// this returns every JSON file so the console's file count matches the
/// directory contents.
///
/// # Errors
///
/// Returns [`QbankError::DirectoryRead`] if the directory cannot be
/// enumerated.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>, QbankError> {
    let entries = std::fs::read_dir(dir).map_err(|e| QbankError::DirectoryRead {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read and parse one input file as JSON.
///
/// # Errors
///
/// Returns [`QbankError::MalformedJson`] if the content is not valid
/// JSON — fatal by design, per the error-handling contract.
pub fn parse_file(path: &Path) -> Result<Value, QbankError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| QbankError::MalformedJson {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Questions (and, for reading, passages) loaded from one file.
#[derive(Debug, Default)]
pub struct SectionContents {
    /// Question records in file order.
    pub questions: Vec<QuestionRecord>,
    /// Passage records in file order; empty outside the reading section.
    pub passages: Vec<PassageRecord>,
}

/// Apply the section shape contract to one parsed file.
pub fn load_section(value: Value, section: Section) -> SectionContents {
    let mut contents = SectionContents::default();
    match section {
        Section::ElaReading => match value {
            Value::Object(mut map) => {
                if let Some(passages) = map.remove("passages") {
                    contents.passages = collect_passages(passages);
                }
                if let Some(questions) = map.remove("questions") {
                    contents.questions = collect_questions(questions);
                }
            }
            Value::Array(_) => contents.questions = collect_questions(value),
            _ => {}
        },
        Section::Math | Section::ElaRevising => match value {
            Value::Array(_) => contents.questions = collect_questions(value),
            Value::Object(mut map) => {
                let list = map.remove("questions").or_else(|| map.remove("items"));
                if let Some(list) = list {
                    contents.questions = collect_questions(list);
                }
            }
            _ => {}
        },
    }
    contents
}

fn collect_questions(value: Value) -> Vec<QuestionRecord> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| {
            let record = QuestionRecord::from_value(item);
            if record.is_none() {
                tracing::warn!("skipping non-object entry in question list");
            }
            record
        })
        .collect()
}

fn collect_passages(value: Value) -> Vec<PassageRecord> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| {
            let record = PassageRecord::from_value(item);
            if record.is_none() {
                tracing::warn!("skipping non-object entry in passage list");
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_discover_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["math_b.json", "math_a.json", "notes.txt", "ela_reading_1.json"] {
            std::fs::File::create(dir.path().join(name))
                .unwrap()
                .write_all(b"[]")
                .unwrap();
        }
        let files = discover_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["ela_reading_1.json", "math_a.json", "math_b.json"]);
    }

    #[test]
    fn test_parse_file_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("math_bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = parse_file(&path).unwrap_err();
        assert!(matches!(err, QbankError::MalformedJson { .. }), "got {err}");
    }

    #[test]
    fn test_bare_list_shape() {
        let contents = load_section(json!([{"id": "m1"}, {"id": "m2"}]), Section::Math);
        assert_eq!(contents.questions.len(), 2);
        assert!(contents.passages.is_empty());
    }

    #[test]
    fn test_questions_key_shape() {
        let contents = load_section(json!({"questions": [{"id": "m1"}]}), Section::Math);
        assert_eq!(contents.questions.len(), 1);
    }

    #[test]
    fn test_items_fallback_shape() {
        let contents = load_section(json!({"items": [{"id": "m1"}, {"id": "m2"}]}), Section::ElaRevising);
        assert_eq!(contents.questions.len(), 2);
    }

    #[test]
    fn test_questions_key_wins_over_items() {
        let contents = load_section(
            json!({"questions": [{"id": "a"}], "items": [{"id": "b"}, {"id": "c"}]}),
            Section::Math,
        );
        assert_eq!(contents.questions.len(), 1);
        assert_eq!(contents.questions[0].display_id(), "a");
    }

    #[test]
    fn test_reading_object_shape_loads_passages() {
        let contents = load_section(
            json!({
                "passages": [{"id": "P1", "title": "The Harbor"}],
                "questions": [{"id": "q1", "passageId": "P1"}]
            }),
            Section::ElaReading,
        );
        assert_eq!(contents.passages.len(), 1);
        assert_eq!(contents.questions.len(), 1);
    }

    #[test]
    fn test_reading_bare_list_has_no_passages() {
        let contents = load_section(json!([{"id": "q1"}]), Section::ElaReading);
        assert_eq!(contents.questions.len(), 1);
        assert!(contents.passages.is_empty());
    }

    #[test]
    fn test_reading_ignores_items_fallback() {
        // The items fallback applies to math/revising only.
        let contents = load_section(json!({"items": [{"id": "q1"}]}), Section::ElaReading);
        assert!(contents.questions.is_empty());
    }

    #[test]
    fn test_other_shapes_load_empty() {
        for value in [json!("text"), json!(42), json!(null), json!({"meta": {}})] {
            let contents = load_section(value, Section::Math);
            assert!(contents.questions.is_empty());
        }
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let contents = load_section(json!([{"id": "m1"}, "stray", 4]), Section::Math);
        assert_eq!(contents.questions.len(), 1);
    }
}
