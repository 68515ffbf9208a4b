//! # Difficulty Levels
//!
//! The three-point difficulty scale used by every question. Raw records
//! carry difficulty as an arbitrary JSON value; only the exact integers
//! 1, 2, 3 are valid. Anything else (absent, float, bool, string) fails
//! conversion and is excluded from the per-difficulty counters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    /// Level 1 — easy.
    Easy,
    /// Level 2 — medium.
    Medium,
    /// Level 3 — hard.
    Hard,
}

impl Difficulty {
    /// Returns all levels in ascending order.
    pub fn all_levels() -> &'static [Difficulty] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }

    /// The numeric level (1, 2, or 3).
    pub fn level(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Report table label, e.g. `1 (Easy)`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "1 (Easy)",
            Self::Medium => "2 (Medium)",
            Self::Hard => "3 (Hard)",
        }
    }

    /// Convert a raw JSON value into a difficulty.
    ///
    /// Only integer 1/2/3 convert; `None` for everything else, including
    /// JSON floats like `1.0` and booleans.
    pub fn from_value(value: Option<&Value>) -> Option<Difficulty> {
        match value?.as_i64()? {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(format!("difficulty must be 1, 2, or 3, got {other}")),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.level()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level())
    }
}
