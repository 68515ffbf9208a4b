//! # Quality Audit Lints
//!
//! Deeper content checks than the schema rules: option-list shape,
//! `commonMistakes` formatting, and corpus-wide duplicate stems. These
//! run under the separate `qbank audit` subcommand and print to the
//! console only — the validation report's layout stays untouched.
//!
//! Option lists come in two shapes in the bank: plain strings, or
//! labeled objects `{"label": "A", "text": "..."}`. The label check only
//! applies to fully labeled lists.

use std::collections::BTreeMap;
use std::fmt;

use qbank_core::{QuestionRecord, Section};
use serde_json::Value;

use crate::corpus::Corpus;

/// The audit check a finding belongs to, for per-check summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuditCheck {
    /// Options list does not hold exactly four entries.
    OptionCount,
    /// An option has empty or whitespace-only text.
    EmptyOption,
    /// Two options in one question carry the same text.
    DuplicateOptions,
    /// A labeled options list is not labeled exactly A, B, C, D.
    OptionLabels,
    /// `commonMistakes` is malformed or mixes entry formats.
    MistakeFormat,
    /// The same stem appears on more than one question.
    DuplicateStems,
}

impl AuditCheck {
    /// Summary label for console output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OptionCount => "option count",
            Self::EmptyOption => "empty options",
            Self::DuplicateOptions => "duplicate options",
            Self::OptionLabels => "option labels",
            Self::MistakeFormat => "commonMistakes format",
            Self::DuplicateStems => "duplicate stems",
        }
    }
}

/// One audit finding. Corpus-level findings (duplicate stems) carry no
/// single question id.
#[derive(Debug, Clone)]
pub struct AuditFinding {
    /// The check that fired.
    pub check: AuditCheck,
    /// Question the finding is bound to, if any.
    pub question_id: Option<String>,
    /// Human-readable detail.
    pub detail: String,
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.question_id {
            Some(id) => write!(f, "{id}: {}", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

/// Run every audit check over the whole corpus.
///
/// Findings come out grouped per question in load order, section by
/// section, with corpus-wide stem collisions last.
pub fn audit_corpus(corpus: &Corpus) -> Vec<AuditFinding> {
    let mut findings = Vec::new();
    let mut stems: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for section in Section::all_sections() {
        for question in corpus.questions(*section) {
            audit_question(question, &mut findings);
            if let Some(stem) = question.stem() {
                let stem = stem.trim();
                if !stem.is_empty() {
                    stems
                        .entry(stem.to_string())
                        .or_default()
                        .push(question.display_id());
                }
            }
        }
    }

    for (stem, ids) in stems {
        if ids.len() > 1 {
            let mut preview: String = stem.chars().take(60).collect();
            if stem.chars().count() > 60 {
                preview.push_str("...");
            }
            findings.push(AuditFinding {
                check: AuditCheck::DuplicateStems,
                question_id: None,
                detail: format!(
                    "duplicate stem ({} questions): \"{preview}\" - ids: {}",
                    ids.len(),
                    ids.join(", ")
                ),
            });
        }
    }

    findings
}

fn audit_question(question: &QuestionRecord, findings: &mut Vec<AuditFinding>) {
    let id = question.display_id();
    let mut push = |check: AuditCheck, detail: String| {
        findings.push(AuditFinding {
            check,
            question_id: Some(id.clone()),
            detail,
        });
    };

    if let Some(options) = question.options() {
        if options.len() != 4 {
            push(
                AuditCheck::OptionCount,
                format!("has {} options, should be 4", options.len()),
            );
        }

        for option in options {
            if option_text_is_empty(option) {
                push(
                    AuditCheck::EmptyOption,
                    format!("empty option text for label '{}'", option_label(option)),
                );
                break;
            }
        }

        let texts: Vec<String> = options
            .iter()
            .filter_map(option_text)
            .map(|t| t.trim().to_lowercase())
            .collect();
        let mut unique = texts.clone();
        unique.sort();
        unique.dedup();
        if unique.len() != texts.len() {
            push(
                AuditCheck::DuplicateOptions,
                "has duplicate option texts".to_string(),
            );
        }

        let labels: Vec<&str> = options
            .iter()
            .filter_map(|o| o.get("label").and_then(Value::as_str))
            .collect();
        if labels.len() == options.len() && !labels.is_empty() {
            let mut sorted = labels.clone();
            sorted.sort_unstable();
            if sorted != ["A", "B", "C", "D"] {
                push(
                    AuditCheck::OptionLabels,
                    format!("incorrect option labels: {}", labels.join(", ")),
                );
            }
        }
    }

    audit_mistakes(question, &mut push);
}

fn audit_mistakes(
    question: &QuestionRecord,
    push: &mut impl FnMut(AuditCheck, String),
) {
    let Some(mistakes) = question.common_mistakes() else {
        return;
    };
    let Some(entries) = mistakes.as_array() else {
        push(
            AuditCheck::MistakeFormat,
            "commonMistakes is not an array".to_string(),
        );
        return;
    };

    let mut has_plain = false;
    let mut has_labeled = false;
    for entry in entries {
        match entry {
            Value::String(_) => has_plain = true,
            Value::Object(map)
                if map.get("label").is_some_and(Value::is_string)
                    && map.get("explanation").is_some_and(Value::is_string) =>
            {
                has_labeled = true;
            }
            other => {
                push(
                    AuditCheck::MistakeFormat,
                    format!("invalid commonMistakes entry: {other}"),
                );
                return;
            }
        }
    }
    if has_plain && has_labeled {
        push(
            AuditCheck::MistakeFormat,
            "mixed commonMistakes format (both string and object)".to_string(),
        );
    }
}

/// Option text: the string itself for plain entries, the `text` field
/// for labeled objects. `None` when neither applies.
fn option_text(option: &Value) -> Option<&str> {
    match option {
        Value::String(s) => Some(s),
        Value::Object(map) => map.get("text").and_then(Value::as_str),
        _ => None,
    }
}

/// A labeled object with no usable `text` counts as empty; non-object,
/// non-string entries are left to the schema rules.
fn option_text_is_empty(option: &Value) -> bool {
    match option {
        Value::String(s) => s.trim().is_empty(),
        Value::Object(map) => map
            .get("text")
            .and_then(Value::as_str)
            .map_or(true, |text| text.trim().is_empty()),
        _ => false,
    }
}

fn option_label(option: &Value) -> String {
    option
        .get("label")
        .and_then(Value::as_str)
        .unwrap_or("?")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::{Path, PathBuf};

    fn write_file(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn question(id: &str, overrides: serde_json::Value) -> serde_json::Value {
        let mut q = json!({
            "id": id,
            "category": "algebra.linear",
            "difficulty": 1,
            "type": "multiple_choice",
            "stem": format!("stem for {id}"),
            "options": ["1", "2", "3", "4"],
            "correctAnswer": "1",
            "explanation": "because",
            "commonMistakes": ["sign error"]
        });
        for (k, v) in overrides.as_object().unwrap() {
            q[k] = v.clone();
        }
        q
    }

    fn corpus_of(questions: Vec<serde_json::Value>) -> Corpus {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "math_a.json", json!(questions));
        let mut corpus = Corpus::new();
        corpus.ingest(&path, Section::Math).unwrap();
        corpus
    }

    fn checks(findings: &[AuditFinding]) -> Vec<AuditCheck> {
        findings.iter().map(|f| f.check).collect()
    }

    #[test]
    fn test_clean_corpus_has_no_findings() {
        let corpus = corpus_of(vec![question("m1", json!({})), question("m2", json!({}))]);
        assert!(audit_corpus(&corpus).is_empty());
    }

    #[test]
    fn test_wrong_option_count() {
        let corpus = corpus_of(vec![question("m1", json!({"options": ["1", "2"]}))]);
        let findings = audit_corpus(&corpus);
        assert_eq!(checks(&findings), vec![AuditCheck::OptionCount]);
        assert_eq!(findings[0].to_string(), "m1: has 2 options, should be 4");
    }

    #[test]
    fn test_empty_option_text_fires_once_per_question() {
        let corpus = corpus_of(vec![question(
            "m1",
            json!({"options": [
                {"label": "A", "text": "  "},
                {"label": "B", "text": ""},
                {"label": "C", "text": "ok"},
                {"label": "D", "text": "fine"}
            ]}),
        )]);
        let findings = audit_corpus(&corpus);
        assert_eq!(checks(&findings), vec![AuditCheck::EmptyOption]);
        assert_eq!(
            findings[0].to_string(),
            "m1: empty option text for label 'A'"
        );
    }

    #[test]
    fn test_duplicate_option_texts_case_insensitive() {
        let corpus = corpus_of(vec![question(
            "m1",
            json!({"options": ["Paris", "paris ", "Rome", "Lyon"]}),
        )]);
        let findings = audit_corpus(&corpus);
        assert_eq!(checks(&findings), vec![AuditCheck::DuplicateOptions]);
    }

    #[test]
    fn test_incorrect_option_labels() {
        let corpus = corpus_of(vec![question(
            "m1",
            json!({"options": [
                {"label": "A", "text": "1"},
                {"label": "B", "text": "2"},
                {"label": "C", "text": "3"},
                {"label": "E", "text": "4"}
            ]}),
        )]);
        let findings = audit_corpus(&corpus);
        assert_eq!(checks(&findings), vec![AuditCheck::OptionLabels]);
        assert_eq!(
            findings[0].to_string(),
            "m1: incorrect option labels: A, B, C, E"
        );
    }

    #[test]
    fn test_label_check_skips_partially_labeled_lists() {
        // Plain-string options carry no labels; nothing to check.
        let corpus = corpus_of(vec![question("m1", json!({}))]);
        assert!(audit_corpus(&corpus).is_empty());
    }

    #[test]
    fn test_mistakes_must_be_an_array() {
        let corpus = corpus_of(vec![question("m1", json!({"commonMistakes": "oops"}))]);
        let findings = audit_corpus(&corpus);
        assert_eq!(checks(&findings), vec![AuditCheck::MistakeFormat]);
        assert_eq!(
            findings[0].to_string(),
            "m1: commonMistakes is not an array"
        );
    }

    #[test]
    fn test_mixed_mistake_formats_flagged() {
        let corpus = corpus_of(vec![question(
            "m1",
            json!({"commonMistakes": [
                "plain string",
                {"label": "A", "explanation": "why"}
            ]}),
        )]);
        let findings = audit_corpus(&corpus);
        assert_eq!(checks(&findings), vec![AuditCheck::MistakeFormat]);
        assert_eq!(
            findings[0].to_string(),
            "m1: mixed commonMistakes format (both string and object)"
        );
    }

    #[test]
    fn test_invalid_mistake_entry_flagged() {
        let corpus = corpus_of(vec![question("m1", json!({"commonMistakes": [42]}))]);
        let findings = audit_corpus(&corpus);
        assert_eq!(checks(&findings), vec![AuditCheck::MistakeFormat]);
        assert_eq!(
            findings[0].to_string(),
            "m1: invalid commonMistakes entry: 42"
        );
    }

    #[test]
    fn test_duplicate_stems_reported_with_all_ids() {
        let corpus = corpus_of(vec![
            question("m1", json!({"stem": "What is 2 + 2?"})),
            question("m2", json!({"stem": "  What is 2 + 2?  "})),
            question("m3", json!({"stem": "What is 3 + 3?"})),
        ]);
        let findings = audit_corpus(&corpus);
        assert_eq!(checks(&findings), vec![AuditCheck::DuplicateStems]);
        assert_eq!(
            findings[0].to_string(),
            "duplicate stem (2 questions): \"What is 2 + 2?\" - ids: m1, m2"
        );
    }
}
