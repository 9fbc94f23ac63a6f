//! The question bank: an ordered, read-only collection of questions plus the
//! per-question choice-score table.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::model::{AnswerKind, Category, Question};

/// TOML source of the built-in Corporate Trainer bank.
pub const BUILTIN_BANK_TOML: &str = include_str!("../../../banks/corporate-trainer.toml");

static BUILTIN: Lazy<QuestionBank> = Lazy::new(|| {
    crate::parser::parse_bank_str(BUILTIN_BANK_TOML, std::path::Path::new("builtin"))
        .expect("embedded bank must parse")
});

/// A fixed, ordered question bank with its choice-score table.
///
/// Fixed at load time and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Role name, e.g. "Corporate Trainer".
    pub name: String,
    /// Title shown when the assessment starts.
    #[serde(default)]
    pub title: String,
    /// Description of what the bank assesses.
    #[serde(default)]
    pub description: String,
    /// Questions in presentation order.
    pub questions: Vec<Question>,
    /// Per-question, per-option scores for choice questions, keyed by
    /// question id. A missing row scores as [`crate::scoring::DEFAULT_CHOICE_SCORE`].
    #[serde(default)]
    pub choice_scores: HashMap<String, Vec<u8>>,
}

impl QuestionBank {
    /// The embedded Corporate Trainer bank.
    ///
    /// Parsed lazily on first use; a unit test pins its validity.
    pub fn builtin() -> &'static QuestionBank {
        &BUILTIN
    }

    /// Number of questions in the bank.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Zero-based position of a question in presentation order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    /// Questions matching a `(category, subcategory)` selector, in order.
    pub fn questions_in(&self, category: Category, subcategory: &str) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category && q.subcategory == subcategory)
            .collect()
    }

    /// Score for one option of a choice question, if a table row covers it.
    pub fn choice_score(&self, question_id: &str, option_index: usize) -> Option<u8> {
        self.choice_scores
            .get(question_id)
            .and_then(|row| row.get(option_index))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_shape() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.id, "corporate-trainer");
        assert_eq!(bank.len(), 26);

        let per_category = |c: Category| bank.questions.iter().filter(|q| q.category == c).count();
        assert_eq!(per_category(Category::Personality), 13);
        assert_eq!(per_category(Category::Technical), 7);
        assert_eq!(per_category(Category::Holistic), 6);
    }

    #[test]
    fn builtin_bank_validates_clean() {
        let warnings = crate::parser::validate_bank(QuestionBank::builtin());
        assert!(warnings.is_empty(), "builtin bank warnings: {warnings:?}");
    }

    #[test]
    fn builtin_choice_scores() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.choice_score("t1", 1), Some(90));
        assert_eq!(bank.choice_score("t2", 0), Some(95));
        assert_eq!(bank.choice_score("t4", 3), Some(95));
        assert_eq!(bank.choice_score("t1", 9), None);
        assert_eq!(bank.choice_score("p1", 0), None);
    }

    #[test]
    fn lookups() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.position("p1"), Some(0));
        assert_eq!(bank.position("w6"), Some(25));
        assert!(bank.question("nope").is_none());

        let interest = bank.questions_in(Category::Personality, "interest");
        assert_eq!(interest.len(), 5);
        assert!(interest.iter().all(|q| q.kind == AnswerKind::Scale));

        let aptitude = bank.questions_in(Category::Technical, "aptitude");
        assert_eq!(aptitude.len(), 4);
        assert!(aptitude
            .iter()
            .all(|q| matches!(q.kind, AnswerKind::Choice { .. })));
    }
}
