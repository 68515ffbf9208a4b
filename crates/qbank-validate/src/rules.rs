//! # Per-Question Validation Rules
//!
//! Runs every rule against a single question record and collects one
//! [`Violation`] per broken rule. Rules are independent and all evaluated
//! — a question missing every field produces eight messages, not one.
//!
//! ## Compatibility Invariant
//!
//! The rendered message strings are consumed by downstream report-diffing
//! workflows and must not change. `Violation` keeps the structured parts
//! (question id, rule, source file) for programmatic use; `Display`
//! produces the exact legacy wording.

use std::fmt;
use std::path::Path;

use qbank_core::{is_valid_category, QuestionRecord, QuestionType, Section, REQUIRED_FIELDS};
use serde_json::Value;

/// The rule a violation was raised under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A required field is absent.
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
    /// A multiple-choice question has no `options` list.
    MissingOptions,
    /// Difficulty is not exactly 1, 2, or 3.
    InvalidDifficulty {
        /// Raw difficulty value, rendered; absent renders as `None`.
        raw: String,
    },
    /// Type tag is outside the section's allowed set.
    InvalidType {
        /// Raw type tag, rendered; absent renders as the empty string.
        raw: String,
        /// Section whose allowed set was violated.
        section: Section,
    },
    /// A reading question carries no `passageId` field.
    MissingPassageRef,
    /// Category does not follow dot notation.
    BadCategory {
        /// Raw category value, rendered; absent renders as the empty string.
        raw: String,
    },
    /// Phase-1 cross-check: the referenced passage had not been loaded yet
    /// when the question was ingested. Can be a false positive for
    /// passages defined in a later file; deliberately retained.
    PassageNotYetSeen {
        /// The unresolved passage reference.
        passage_id: String,
    },
    /// Phase-2 cross-check: the referenced passage exists in no file.
    DanglingPassageRef {
        /// The dangling passage reference.
        passage_id: String,
    },
}

/// One broken rule, bound to a question identity and its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Question id, or the `UNKNOWN` placeholder.
    pub question_id: String,
    /// Basename of the file the question was loaded from.
    pub file: String,
    /// The rule that was broken.
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = &self.question_id;
        match &self.rule {
            Rule::MissingField { field } => {
                write!(f, "{id}: missing field '{field}' in {}", self.file)
            }
            Rule::MissingOptions => {
                write!(f, "{id}: missing 'options' for mc question")
            }
            Rule::InvalidDifficulty { raw } => {
                write!(f, "{id}: invalid difficulty {raw}")
            }
            Rule::InvalidType { raw, section } => {
                write!(f, "{id}: invalid type '{raw}' for section {section}")
            }
            Rule::MissingPassageRef => {
                write!(f, "{id}: ELA reading question missing passageId")
            }
            Rule::BadCategory { raw } => {
                write!(f, "{id}: category '{raw}' doesn't follow dot-notation")
            }
            Rule::PassageNotYetSeen { passage_id } => {
                write!(f, "{id}: passageId '{passage_id}' not found in any passage list")
            }
            Rule::DanglingPassageRef { passage_id } => {
                write!(f, "{id}: passageId '{passage_id}' references missing passage")
            }
        }
    }
}

/// Basename of a path for violation messages.
pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Validate one question record against every rule.
///
/// Never fails — well-formed-but-invalid content produces violations,
/// not errors. The returned order is fixed: required fields (in
/// declaration order), options, difficulty, type, passage reference,
/// category.
pub fn validate_question(
    question: &QuestionRecord,
    section: Section,
    file: &Path,
) -> Vec<Violation> {
    let id = question.display_id();
    let file = basename(file);
    let mut violations = Vec::new();
    let mut push = |rule: Rule| {
        violations.push(Violation {
            question_id: id.clone(),
            file: file.clone(),
            rule,
        });
    };

    for field in REQUIRED_FIELDS {
        if !question.contains(field) {
            push(Rule::MissingField { field });
        }
    }

    let type_tag = question.type_label();
    let parsed_type = QuestionType::parse_tag(&type_tag);

    if parsed_type == Some(QuestionType::MultipleChoice) && !question.contains("options") {
        push(Rule::MissingOptions);
    }

    if question.difficulty().is_none() {
        push(Rule::InvalidDifficulty {
            raw: question.difficulty_label(),
        });
    }

    if !parsed_type.is_some_and(|t| t.allowed_in(section)) {
        push(Rule::InvalidType {
            raw: type_tag,
            section,
        });
    }

    if section == Section::ElaReading && !question.contains("passageId") {
        push(Rule::MissingPassageRef);
    }

    let category_ok = question
        .get("category")
        .and_then(Value::as_str)
        .is_some_and(is_valid_category);
    if !category_ok {
        push(Rule::BadCategory {
            raw: raw_category(question),
        });
    }

    violations
}

/// Raw category for the violation message: absent renders as the empty
/// string (the counters use `unknown` instead — different surface).
fn raw_category(question: &QuestionRecord) -> String {
    match question.get("category") {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
