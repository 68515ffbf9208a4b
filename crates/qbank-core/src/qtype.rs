//! # Question Types
//!
//! The fixed set of question type tags. Each concept has two accepted
//! spellings in the data (`multiple_choice`/`mc`, `grid-in`/`grid_in`);
//! both parse to the same variant. Grid-in is a math-only type — the ELA
//! sections accept multiple choice exclusively.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// A recognized question type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Multiple choice with an options list. Spellings: `multiple_choice`, `mc`.
    MultipleChoice,
    /// Student-produced numeric response. Spellings: `grid-in`, `grid_in`.
    GridIn,
}

impl QuestionType {
    /// Parse a raw type tag, accepting both spellings of each concept.
    ///
    /// Returns `None` for unknown tags; the caller reports those as
    /// violations against the section's allowed set.
    pub fn parse_tag(tag: &str) -> Option<QuestionType> {
        match tag {
            "multiple_choice" | "mc" => Some(Self::MultipleChoice),
            "grid-in" | "grid_in" => Some(Self::GridIn),
            _ => None,
        }
    }

    /// Canonical spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::GridIn => "grid_in",
        }
    }

    /// Whether this type is allowed in the given section.
    ///
    /// Grid-in exists only in math; every section allows multiple choice.
    pub fn allowed_in(&self, section: Section) -> bool {
        match self {
            Self::MultipleChoice => true,
            Self::GridIn => section == Section::Math,
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_spellings() {
        assert_eq!(QuestionType::parse_tag("multiple_choice"), Some(QuestionType::MultipleChoice));
        assert_eq!(QuestionType::parse_tag("mc"), Some(QuestionType::MultipleChoice));
        assert_eq!(QuestionType::parse_tag("grid-in"), Some(QuestionType::GridIn));
        assert_eq!(QuestionType::parse_tag("grid_in"), Some(QuestionType::GridIn));
    }

    #[test]
    fn test_parse_unknown_tags() {
        assert_eq!(QuestionType::parse_tag("multiple-choice"), None);
        assert_eq!(QuestionType::parse_tag("MC"), None);
        assert_eq!(QuestionType::parse_tag("fill_in"), None);
        assert_eq!(QuestionType::parse_tag(""), None);
    }

    #[test]
    fn test_grid_in_is_math_only() {
        assert!(QuestionType::GridIn.allowed_in(Section::Math));
        assert!(!QuestionType::GridIn.allowed_in(Section::ElaReading));
        assert!(!QuestionType::GridIn.allowed_in(Section::ElaRevising));
        for section in Section::all_sections() {
            assert!(QuestionType::MultipleChoice.allowed_in(*section));
        }
    }
}
