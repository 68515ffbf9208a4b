//! # Validate Subcommand
//!
//! The one-shot batch pass: discover files, build the corpus, print the
//! console summary, write `VALIDATION_REPORT.md` and
//! `all_questions.json` into the bank directory.
//!
//! The console lines and both output files are a compatibility surface
//! for downstream comparison workflows — field order, wording, and the
//! hard-coded expected totals must not drift.
//!
//! The process exits zero however many validation findings there are;
//! only fatal conditions (unreadable directory, malformed JSON,
//! unwritable outputs) propagate as errors.

use std::path::PathBuf;

use clap::Args;
use qbank_core::{QbankError, Section};
use qbank_validate::{discover_files, Corpus};

use crate::{consolidated, report};

/// Report filename, written into the bank directory.
pub const REPORT_FILE: &str = "VALIDATION_REPORT.md";
/// Consolidated dataset filename, written into the bank directory.
pub const CONSOLIDATED_FILE: &str = "all_questions.json";

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory holding the question JSON files. Outputs are written
    /// alongside them.
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

/// Run the full validation pass.
pub fn run(args: &ValidateArgs) -> Result<(), QbankError> {
    let files = discover_files(&args.dir)?;
    println!("Found {} JSON files", files.len());

    let mut corpus = Corpus::new();
    for file in &files {
        match Section::classify(file) {
            Some(section) => corpus.ingest(file, section)?,
            None => tracing::debug!(file = %file.display(), "no section prefix, skipping"),
        }
    }

    println!("\nTotal questions: {}", corpus.total_questions());
    for section in Section::all_sections() {
        println!("  {}: {}", section.label(), corpus.section_total(*section));
    }
    println!("Duplicates: {}", corpus.duplicates().len());
    // The count printed here predates the phase-2 cross-check below, so
    // the report's error section can be longer. Legacy behavior, kept.
    println!("Errors: {}", corpus.violations().len());

    corpus.recheck_passage_refs();

    let report_path = args.dir.join(REPORT_FILE);
    let rendered = report::render(&corpus, files.len(), &report::generation_date());
    std::fs::write(&report_path, rendered).map_err(|e| QbankError::OutputWrite {
        path: report_path,
        reason: e.to_string(),
    })?;

    consolidated::write(&corpus, &args.dir.join(CONSOLIDATED_FILE))?;

    println!("\nWrote {REPORT_FILE} and {CONSOLIDATED_FILE}");

    let error_count = corpus.violations().len();
    if error_count > 0 {
        println!("\n⚠️  {error_count} errors found. Check report for details.");
    } else {
        println!("\n✅ All validations passed!");
    }

    Ok(())
}
