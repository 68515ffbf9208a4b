//! # Raw Question and Passage Records
//!
//! Records are thin wrappers over raw JSON objects rather than typed
//! structs. The validation pass must be able to see exactly what is in
//! the data (missing fields, wrong-typed fields, unknown extras), and the
//! consolidated dataset must carry every field through losslessly —
//! deserializing into a fixed struct would silently repair or drop both.
//!
//! Accessors return `Option` for fields that may be absent or mistyped;
//! the `*_label()` variants render a display form for violation messages.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::difficulty::Difficulty;

/// Placeholder identity for a question with no `id` field.
pub const UNKNOWN_ID: &str = "UNKNOWN";

/// The eight fields every question must carry, in message order.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "id",
    "category",
    "difficulty",
    "type",
    "stem",
    "correctAnswer",
    "explanation",
    "commonMistakes",
];

/// One question as it appears in an input file.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct QuestionRecord {
    fields: Map<String, Value>,
}

impl QuestionRecord {
    /// Wrap a JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<QuestionRecord> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Whether the record carries the given field at all.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Raw field access.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The question identifier, when present and a string.
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    /// Identity for violation messages and duplicate counting:
    /// the id field rendered as text, or [`UNKNOWN_ID`] when absent.
    pub fn display_id(&self) -> String {
        match self.fields.get("id") {
            None => UNKNOWN_ID.to_string(),
            Some(value) => render(value),
        }
    }

    /// The raw category label for the per-category counters:
    /// `unknown` when absent, otherwise rendered as-is (valid or not).
    pub fn category_label(&self) -> String {
        match self.fields.get("category") {
            None => "unknown".to_string(),
            Some(value) => render(value),
        }
    }

    /// The validated difficulty, when the raw value is exactly 1, 2, or 3.
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_value(self.fields.get("difficulty"))
    }

    /// Display form of the raw difficulty value; absent renders as `None`.
    pub fn difficulty_label(&self) -> String {
        match self.fields.get("difficulty") {
            None => "None".to_string(),
            Some(value) => render(value),
        }
    }

    /// The raw type tag, rendered; absent renders as the empty string.
    pub fn type_label(&self) -> String {
        match self.fields.get("type") {
            None => String::new(),
            Some(value) => render(value),
        }
    }

    /// The passage reference, when present and a string.
    pub fn passage_id(&self) -> Option<&str> {
        self.fields.get("passageId").and_then(Value::as_str)
    }

    /// The prompt text, when present and a string.
    pub fn stem(&self) -> Option<&str> {
        self.fields.get("stem").and_then(Value::as_str)
    }

    /// The options list, when present and an array.
    pub fn options(&self) -> Option<&Vec<Value>> {
        self.fields.get("options").and_then(Value::as_array)
    }

    /// The common-mistakes field, raw.
    pub fn common_mistakes(&self) -> Option<&Value> {
        self.fields.get("commonMistakes")
    }
}

/// One reading passage as it appears in an input file.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct PassageRecord {
    fields: Map<String, Value>,
}

impl PassageRecord {
    /// Wrap a JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<PassageRecord> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// The passage identifier, when present and a string.
    ///
    /// An id-less passage is still stored (first occurrence wins under
    /// the absent-id slot) so it survives into the consolidated output.
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }
}

/// Render a JSON value for a human-readable message: strings bare,
/// everything else in JSON text form.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
