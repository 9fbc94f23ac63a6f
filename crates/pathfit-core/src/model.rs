//! Core data model types for pathfit.
//!
//! These are the fundamental types that the entire pathfit system uses
//! to represent questions, answers, and recorded responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Labels for the five-point agreement scale, indexed by answer value.
pub const SCALE_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Highest legal value for a scale answer (indices run 0..=4).
pub const SCALE_MAX: u8 = 4;

/// A single assessment question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the bank.
    pub id: String,
    /// Top-level scoring category.
    pub category: Category,
    /// Groups questions into a scored sub-dimension within the category.
    pub subcategory: String,
    /// The prompt shown to the user.
    pub prompt: String,
    /// How the question is answered.
    pub kind: AnswerKind,
    /// Relative weight within the subcategory.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Question {
    /// Highest legal answer value for this question.
    pub fn max_value(&self) -> u8 {
        match &self.kind {
            AnswerKind::Scale => SCALE_MAX,
            AnswerKind::Choice { options } => (options.len().saturating_sub(1)) as u8,
        }
    }

    /// The answer options shown to the user, in order.
    pub fn options(&self) -> Vec<&str> {
        match &self.kind {
            AnswerKind::Scale => SCALE_LABELS.to_vec(),
            AnswerKind::Choice { options } => options.iter().map(String::as_str).collect(),
        }
    }
}

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnswerKind {
    /// Five-point agreement scale (0 = Strongly Disagree .. 4 = Strongly Agree).
    Scale,
    /// Pick one of the listed options; scored via the bank's choice-score table.
    Choice { options: Vec<String> },
}

/// Top-level question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personality,
    Technical,
    Holistic,
}

impl Category {
    /// Display label for section headers and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personality => "Personality Fit",
            Category::Technical => "Technical Readiness",
            Category::Holistic => "Holistic Readiness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Personality => write!(f, "personality"),
            Category::Technical => write!(f, "technical"),
            Category::Holistic => write!(f, "holistic"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personality" | "psychometric" => Ok(Category::Personality),
            "technical" => Ok(Category::Technical),
            "holistic" | "wiscar" => Ok(Category::Holistic),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A recorded answer to a single question.
///
/// At most one response exists per question id; re-answering replaces the
/// previous value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// The question this answers.
    pub question_id: String,
    /// Scale index (0..=4) for scale questions, option index for choice questions.
    pub value: u8,
    /// When the answer was recorded. Informational only.
    pub recorded_at: DateTime<Utc>,
}

impl Response {
    /// Build a response stamped with the current time.
    pub fn new(question_id: impl Into<String>, value: u8) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            recorded_at: Utc::now(),
        }
    }
}
