//! # Corpus Aggregation
//!
//! [`Corpus`] accumulates everything the report and the consolidated
//! dataset need across one run: per-section totals and record lists,
//! difficulty and category counters, the first-seen-wins passage store,
//! the identifier frequency map for duplicate detection, and the flat
//! violation list.
//!
//! All state is run-local; a corpus is built from scratch each invocation
//! and discarded after the outputs are written.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use qbank_core::{Difficulty, PassageRecord, QbankError, QuestionRecord, Section};

use crate::loader::{load_section, parse_file};
use crate::rules::{basename, validate_question, Rule, Violation};

/// A reading question's passage reference, retained for the phase-2
/// cross-check after all files are loaded.
#[derive(Debug, Clone)]
pub(crate) struct PassageRef {
    pub(crate) question_id: String,
    pub(crate) passage_id: String,
    pub(crate) file: String,
}

/// Accumulated state of one validation run.
#[derive(Debug, Default)]
pub struct Corpus {
    section_totals: HashMap<Section, usize>,
    questions: HashMap<Section, Vec<QuestionRecord>>,
    by_difficulty: BTreeMap<Difficulty, usize>,
    by_category: BTreeMap<String, usize>,
    passages: Vec<PassageRecord>,
    /// Passage identities already stored; `None` is the slot for the
    /// first id-less passage (later id-less passages are dropped too).
    passage_ids_seen: HashSet<Option<String>>,
    id_counts: BTreeMap<String, usize>,
    violations: Vec<Violation>,
    pub(crate) reading_refs: Vec<PassageRef>,
}

impl Corpus {
    /// An empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one classified file into the corpus: parse, apply the shape
    /// contract, store passages (first occurrence per id wins), then
    /// validate and count every question.
    ///
    /// Reading questions with a non-empty passage reference also run the
    /// phase-1 cross-check here, against the passages seen SO FAR. A
    /// reference to a passage in a later file is flagged now (false
    /// positive, deliberately retained) and vindicated only silently by
    /// the phase-2 re-check.
    ///
    /// # Errors
    ///
    /// Returns [`QbankError::MalformedJson`] for unparseable content —
    /// fatal, the run must abort.
    pub fn ingest(&mut self, path: &Path, section: Section) -> Result<(), QbankError> {
        let contents = load_section(parse_file(path)?, section);
        tracing::debug!(
            file = %path.display(),
            section = %section,
            questions = contents.questions.len(),
            passages = contents.passages.len(),
            "loaded file"
        );

        for passage in contents.passages {
            let identity = passage.id().map(str::to_string);
            if self.passage_ids_seen.insert(identity) {
                self.passages.push(passage);
            }
        }

        let file = basename(path);
        for question in contents.questions {
            let id = question.display_id();
            *self.id_counts.entry(id.clone()).or_insert(0) += 1;

            self.violations
                .extend(validate_question(&question, section, path));

            if let Some(difficulty) = question.difficulty() {
                *self.by_difficulty.entry(difficulty).or_insert(0) += 1;
            }
            *self
                .by_category
                .entry(question.category_label())
                .or_insert(0) += 1;

            *self.section_totals.entry(section).or_insert(0) += 1;

            if section == Section::ElaReading {
                if let Some(pid) = question.passage_id().filter(|p| !p.is_empty()) {
                    if !self.has_passage(pid) {
                        self.violations.push(Violation {
                            question_id: id.clone(),
                            file: file.clone(),
                            rule: Rule::PassageNotYetSeen {
                                passage_id: pid.to_string(),
                            },
                        });
                    }
                    self.reading_refs.push(PassageRef {
                        question_id: id.clone(),
                        passage_id: pid.to_string(),
                        file: file.clone(),
                    });
                }
            }

            self.questions.entry(section).or_default().push(question);
        }

        Ok(())
    }

    pub(crate) fn has_passage(&self, passage_id: &str) -> bool {
        self.passage_ids_seen
            .contains(&Some(passage_id.to_string()))
    }

    pub(crate) fn push_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Question count for one section.
    pub fn section_total(&self, section: Section) -> usize {
        self.section_totals.get(&section).copied().unwrap_or(0)
    }

    /// Question count across all sections.
    pub fn total_questions(&self) -> usize {
        Section::all_sections()
            .iter()
            .map(|s| self.section_total(*s))
            .sum()
    }

    /// Count of questions with the given valid difficulty.
    pub fn difficulty_count(&self, difficulty: Difficulty) -> usize {
        self.by_difficulty.get(&difficulty).copied().unwrap_or(0)
    }

    /// Per-category counts over raw labels, sorted alphabetically.
    pub fn by_category(&self) -> &BTreeMap<String, usize> {
        &self.by_category
    }

    /// Identifiers appearing more than once, with their multiplicity,
    /// sorted. Includes the `UNKNOWN` placeholder when several questions
    /// lack ids.
    pub fn duplicates(&self) -> BTreeMap<&str, usize> {
        self.id_counts
            .iter()
            .filter(|(_, &count)| count > 1)
            .map(|(id, &count)| (id.as_str(), count))
            .collect()
    }

    /// All collected violations, in detection order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Stored question records for one section, in load order.
    pub fn questions(&self, section: Section) -> &[QuestionRecord] {
        self.questions.get(&section).map_or(&[], Vec::as_slice)
    }

    /// Stored passages, first occurrence per id, in load order.
    pub fn passages(&self) -> &[PassageRecord] {
        &self.passages
    }

    /// Sorted non-empty passage ids for the report summary.
    pub fn sorted_passage_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .passage_ids_seen
            .iter()
            .filter_map(|id| id.as_deref())
            .filter(|id| !id.is_empty())
            .collect();
        ids.sort_unstable();
        ids
    }
}
