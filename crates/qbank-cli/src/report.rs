//! # Validation Report Renderer
//!
//! Builds the Markdown report from an aggregated corpus. Section order,
//! table layout, and the hard-coded expected totals are all part of the
//! compatibility surface; the generation date is the single
//! nondeterministic value in the whole output.

use chrono::Utc;
use qbank_core::{Difficulty, Section, EXPECTED_TOTAL};
use qbank_validate::Corpus;

/// Today's date for the report header, `YYYY-MM-DD`.
pub fn generation_date() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Render the full report.
///
/// `file_count` is the number of discovered JSON files, classified or
/// not — it mirrors the console's `Found N JSON files` line.
pub fn render(corpus: &Corpus, file_count: usize, generated: &str) -> String {
    let mut out = String::new();

    out.push_str("# SHSAT Question Bank Validation Report\n");
    out.push_str(&format!("\nGenerated: {generated}\n"));

    out.push_str("\n## File Count\n");
    out.push_str(&format!("- JSON files found: {file_count}\n"));

    out.push_str("\n## Question Totals\n");
    out.push_str("| Section | Count | Expected |\n");
    out.push_str("|---------|-------|----------|\n");
    for section in Section::all_sections() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            section.label(),
            corpus.section_total(*section),
            section.expected_count()
        ));
    }
    out.push_str(&format!(
        "| **Total** | **{}** | **{EXPECTED_TOTAL}** |\n",
        corpus.total_questions()
    ));

    out.push_str("\n## By Difficulty\n");
    out.push_str("| Difficulty | Count |\n");
    out.push_str("|-----------|-------|\n");
    for level in Difficulty::all_levels() {
        out.push_str(&format!(
            "| {} | {} |\n",
            level.label(),
            corpus.difficulty_count(*level)
        ));
    }

    out.push_str("\n## By Category\n");
    out.push_str("| Category | Count |\n");
    out.push_str("|----------|-------|\n");
    for (category, count) in corpus.by_category() {
        out.push_str(&format!("| {category} | {count} |\n"));
    }

    out.push_str("\n## Duplicate IDs\n");
    let duplicates = corpus.duplicates();
    if duplicates.is_empty() {
        out.push_str("None found ✅\n");
    } else {
        for (id, count) in duplicates {
            out.push_str(&format!("- `{id}` appears {count} times\n"));
        }
    }

    let violations = corpus.violations();
    out.push_str(&format!("\n## Validation Errors ({})\n", violations.len()));
    if violations.is_empty() {
        out.push_str("None found ✅\n");
    } else {
        for violation in violations {
            out.push_str(&format!("- {violation}\n"));
        }
    }

    out.push_str("\n## Passages (ELA Reading)\n");
    out.push_str(&format!("- Total passages: {}\n", corpus.passages().len()));
    out.push_str(&format!(
        "- Passage IDs: {}\n",
        corpus.sorted_passage_ids().join(", ")
    ));

    out
}
