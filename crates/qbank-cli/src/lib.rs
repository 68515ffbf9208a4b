//! # qbank-cli — Question Bank Command-Line Interface
//!
//! Replaces the ad-hoc validation script that used to live alongside the
//! question files with a structured clap-based CLI. The console lines,
//! report layout, and consolidated dataset shape of the original are
//! preserved for downstream comparison workflows.
//!
//! ## Subcommands
//!
//! - `validate` — One-shot bank validation; writes `VALIDATION_REPORT.md`
//!   and `all_questions.json` into the bank directory.
//! - `audit` — Content-quality lints (options shape, commonMistakes
//!   format, duplicate stems); console only.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from the
//!   validation logic, which lives in `qbank-validate`.
//! - Output format is a compatibility surface — wording and ordering
//!   must match the legacy script exactly.

pub mod audit;
pub mod consolidated;
pub mod report;
pub mod validate;
