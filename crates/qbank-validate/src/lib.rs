//! # qbank-validate — The Validation Pass
//!
//! One linear pass over a directory of question files: discover and
//! classify, load per the section shape contract, validate every
//! question, accumulate corpus statistics, then run the authoritative
//! passage cross-check.
//!
//! ## Two-Phase Cross-Check
//!
//! Passage references are checked twice: opportunistically while each
//! file loads ([`Corpus::ingest`]) and exhaustively once everything is
//! loaded ([`Corpus::recheck_passage_refs`]). The first phase can flag a
//! forward reference to a passage in a later file; that message stays in
//! the list. Both phases and their distinct wordings are a compatibility
//! surface — do not consolidate them.
//!
//! ## Crate Policy
//!
//! - Content violations are data ([`Violation`] values), never `Err`.
//!   Only unreadable directories and malformed JSON abort the run.
//! - Output strings rendered from [`Violation`] must not change.

pub mod audit;
pub mod corpus;
pub mod crossref;
pub mod loader;
pub mod rules;

pub use audit::{audit_corpus, AuditCheck, AuditFinding};
pub use corpus::Corpus;
pub use loader::{discover_files, load_section, parse_file, SectionContents};
pub use rules::{validate_question, Rule, Violation};
