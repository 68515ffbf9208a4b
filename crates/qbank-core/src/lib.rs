//! # qbank-core — Foundational Types for the Question Bank Toolchain
//!
//! This crate defines the type-system primitives shared by the validation
//! pass and the CLI. Every other crate in the workspace depends on
//! `qbank-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Section` enum.** One definition, three variants, exhaustive
//!    `match` everywhere. Adding a section forces every consumer to handle
//!    it at compile time.
//!
//! 2. **Raw record wrappers.** `QuestionRecord` and `PassageRecord` wrap
//!    raw JSON objects instead of typed structs, so validation sees
//!    missing and mistyped fields instead of deserialization repairing
//!    them, and the consolidated output carries unknown fields through.
//!
//! 3. **Validated scalar types.** `Difficulty` and `QuestionType` convert
//!    fallibly from raw values; invalid data stays visible as `None`
//!    rather than defaulting.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `qbank-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod difficulty;
pub mod error;
pub mod qtype;
pub mod record;
pub mod section;

// Re-export primary types for ergonomic imports.
pub use category::is_valid_category;
pub use difficulty::Difficulty;
pub use error::QbankError;
pub use qtype::QuestionType;
pub use record::{PassageRecord, QuestionRecord, REQUIRED_FIELDS, UNKNOWN_ID};
pub use section::{Section, EXPECTED_TOTAL};
