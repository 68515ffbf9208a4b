//! # Category Paths — Dot-Notation Topic Labels
//!
//! Questions are tagged with hierarchical topic labels like
//! `algebra.linear_equations` or `ela.reading.main_idea`: lowercase
//! tokens (letters, digits, underscores, starting with a letter) joined
//! by periods, with at least one period. Single-token labels are
//! rejected — the hierarchy is mandatory.
//!
//! The aggregation counters deliberately use the RAW label string, valid
//! or not, so the report's category table reflects exactly what is in the
//! data. Pattern validity is a separate per-question rule.

use regex::Regex;
use std::sync::LazyLock;

/// Dot-notation pattern: `token(.token)+` with lowercase tokens.
static CATEGORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)+$")
        .expect("category pattern is a valid regex")
});

/// Whether a raw category label follows dot notation.
pub fn is_valid_category(label: &str) -> bool {
    CATEGORY_PATTERN.is_match(label)
}
