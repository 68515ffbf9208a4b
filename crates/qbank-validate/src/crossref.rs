//! # Phase-2 Passage Cross-Check
//!
//! After all files are loaded, every reading question's passage reference
//! is re-checked against the complete passage set. This pass is
//! authoritative: a reference that phase 1 flagged only because its
//! passage lived in a later file resolves silently here, while a truly
//! dangling reference gains a second message with its own wording.
//!
//! Phase 1 (in [`Corpus::ingest`]) and this pass are both kept on
//! purpose, stale phase-1 messages included — the pair of message lists
//! is a compatibility surface for downstream report diffing.

use crate::corpus::Corpus;
use crate::rules::{Rule, Violation};

impl Corpus {
    /// Run the authoritative passage cross-check and append one
    /// violation per reference that matches no loaded passage.
    pub fn recheck_passage_refs(&mut self) {
        let dangling: Vec<Violation> = self
            .reading_refs
            .iter()
            .filter(|r| !self.has_passage(&r.passage_id))
            .map(|r| Violation {
                question_id: r.question_id.clone(),
                file: r.file.clone(),
                rule: Rule::DanglingPassageRef {
                    passage_id: r.passage_id.clone(),
                },
            })
            .collect();

        for violation in dangling {
            tracing::debug!(%violation, "dangling passage reference");
            self.push_violation(violation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbank_core::Section;
    use serde_json::json;
    use std::path::{Path, PathBuf};

    fn write_file(dir: &Path, name: &str, value: serde_json::Value) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn reading_question(id: &str, passage: &str) -> serde_json::Value {
        json!({
            "id": id,
            "category": "ela.reading.main_idea",
            "difficulty": 2,
            "type": "mc",
            "options": ["A", "B", "C", "D"],
            "stem": "stem",
            "correctAnswer": "A",
            "explanation": "because",
            "commonMistakes": [],
            "passageId": passage
        })
    }

    #[test]
    fn test_forward_reference_keeps_phase_one_message_only() {
        let dir = tempfile::tempdir().unwrap();
        // The question file sorts before the passage file, so phase 1
        // sees the reference before the passage exists.
        let questions = write_file(
            dir.path(),
            "ela_reading_a.json",
            json!({"questions": [reading_question("q1", "P1")]}),
        );
        let passages = write_file(
            dir.path(),
            "ela_reading_b.json",
            json!({"passages": [{"id": "P1"}], "questions": []}),
        );

        let mut corpus = Corpus::new();
        corpus.ingest(&questions, Section::ElaReading).unwrap();
        corpus.ingest(&passages, Section::ElaReading).unwrap();
        corpus.recheck_passage_refs();

        let rendered: Vec<String> = corpus.violations().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["q1: passageId 'P1' not found in any passage list".to_string()],
            "phase 2 must stay silent for a forward reference, but the stale phase-1 message is retained"
        );
    }

    #[test]
    fn test_dangling_reference_gets_one_message_per_phase() {
        let dir = tempfile::tempdir().unwrap();
        let questions = write_file(
            dir.path(),
            "ela_reading_a.json",
            json!({"passages": [{"id": "P1"}], "questions": [reading_question("q1", "P404")]}),
        );

        let mut corpus = Corpus::new();
        corpus.ingest(&questions, Section::ElaReading).unwrap();
        corpus.recheck_passage_refs();

        let rendered: Vec<String> = corpus.violations().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "q1: passageId 'P404' not found in any passage list".to_string(),
                "q1: passageId 'P404' references missing passage".to_string(),
            ]
        );
    }

    #[test]
    fn test_resolved_reference_is_silent_in_both_phases() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(
            dir.path(),
            "ela_reading_a.json",
            json!({"passages": [{"id": "P1"}], "questions": [reading_question("q1", "P1")]}),
        );
        let mut corpus = Corpus::new();
        corpus.ingest(&file, Section::ElaReading).unwrap();
        corpus.recheck_passage_refs();
        assert!(corpus.violations().is_empty(), "{:?}", corpus.violations());
    }
}
