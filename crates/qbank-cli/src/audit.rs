//! # Audit Subcommand
//!
//! Content-quality lints over the same corpus the validate pass loads:
//! option-list shape, `commonMistakes` formatting, duplicate stems.
//! Console output only; no files are written and the exit code stays
//! zero whatever is found.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use qbank_core::{QbankError, Section};
use qbank_validate::{audit_corpus, discover_files, Corpus};

/// Arguments for the audit subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Directory holding the question JSON files.
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

/// Run the quality audit.
pub fn run(args: &AuditArgs) -> Result<(), QbankError> {
    let files = discover_files(&args.dir)?;
    let mut corpus = Corpus::new();
    for file in &files {
        if let Some(section) = Section::classify(file) {
            corpus.ingest(file, section)?;
        }
    }

    println!("Auditing {} questions...", corpus.total_questions());

    let findings = audit_corpus(&corpus);
    let mut per_check: BTreeMap<&'static str, usize> = BTreeMap::new();
    for finding in &findings {
        *per_check.entry(finding.check.label()).or_insert(0) += 1;
    }

    println!();
    for (label, count) in &per_check {
        println!("  {label}: {count}");
    }

    if findings.is_empty() {
        println!("\n✅ No quality issues found.");
    } else {
        println!("\n⚠️  {} quality issues:", findings.len());
        for finding in &findings {
            println!("  - {finding}");
        }
    }

    Ok(())
}
