//! The response store: one assessment session's recorded answers, navigation
//! cursor, and completion lifecycle.
//!
//! Validation happens here, at the store boundary. The scoring engine never
//! sees an unknown question id or an out-of-range value.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::bank::QuestionBank;
use crate::model::{Question, Response};
use crate::results::AssessmentResult;
use crate::scoring;

/// Errors rejected at the response store boundary.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The response references a question not in the bank.
    #[error("unknown question id: {id}")]
    UnknownQuestion { id: String },

    /// The value is outside the legal domain for the question's answer kind.
    #[error("value {value} out of range for question {id} (max {max})")]
    ValueOutOfRange { id: String, value: u8, max: u8 },
}

/// Outcome of an `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Cursor moved to the next question.
    Moved,
    /// Cursor moved past the last question; the session just completed and
    /// the result was computed.
    Completed,
    /// The session was already complete; nothing changed.
    AlreadyComplete,
}

/// One user's assessment session over a shared, read-only bank.
///
/// Single-actor by design: `record`, `advance`, and `retreat` are driven
/// strictly sequentially. The result is computed exactly once, from the
/// response snapshot at completion, and is immutable until `reset`.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    responses: Vec<Response>,
    cursor: usize,
    started_at: DateTime<Utc>,
    result: Option<AssessmentResult>,
}

impl AssessmentSession {
    /// Start a fresh session over a bank.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            responses: Vec::new(),
            cursor: 0,
            started_at: Utc::now(),
            result: None,
        }
    }

    /// The bank this session runs over.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// When the session started (or was last reset).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Upsert a response. At most one response exists per question id;
    /// re-answering replaces the previous value.
    pub fn record(&mut self, question_id: &str, value: u8) -> Result<(), ResponseError> {
        let question = self
            .bank
            .question(question_id)
            .ok_or_else(|| ResponseError::UnknownQuestion {
                id: question_id.to_string(),
            })?;

        let max = question.max_value();
        if value > max {
            return Err(ResponseError::ValueOutOfRange {
                id: question_id.to_string(),
                value,
                max,
            });
        }

        let response = Response::new(question_id, value);
        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == question_id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
        Ok(())
    }

    /// Record against the question under the cursor.
    pub fn record_current(&mut self, value: u8) -> Result<(), ResponseError> {
        let id = self
            .current_question()
            .map(|q| q.id.clone())
            .ok_or(ResponseError::UnknownQuestion {
                id: "<past end>".to_string(),
            })?;
        self.record(&id, value)
    }

    /// The recorded value for a question, if any.
    pub fn response(&self, question_id: &str) -> Option<u8> {
        self.responses
            .iter()
            .find(|r| r.question_id == question_id)
            .map(|r| r.value)
    }

    /// Snapshot of all recorded responses, in first-recorded order.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Number of distinct questions answered.
    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    /// The question under the cursor, `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.questions.get(self.cursor)
    }

    /// Zero-based cursor position.
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    /// Whether the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    /// Progress fraction `(index + 1) / total`, clamped to 1.0.
    pub fn progress(&self) -> f64 {
        if self.bank.is_empty() {
            return 1.0;
        }
        ((self.cursor + 1) as f64 / self.bank.len() as f64).min(1.0)
    }

    /// Whether `retreat` would move the cursor.
    pub fn can_retreat(&self) -> bool {
        self.cursor > 0 && !self.is_complete()
    }

    /// UI-level gate: the current question has a recorded response. The store
    /// itself never requires this before `advance`.
    pub fn can_advance(&self) -> bool {
        self.current_question()
            .is_some_and(|q| self.response(&q.id).is_some())
    }

    /// Move the cursor forward. Advancing past the last question completes
    /// the session and computes the result exactly once.
    pub fn advance(&mut self) -> Advance {
        if self.result.is_some() {
            return Advance::AlreadyComplete;
        }

        self.cursor += 1;
        if self.cursor >= self.bank.len() {
            self.result = Some(scoring::score(&self.bank, &self.responses));
            Advance::Completed
        } else {
            Advance::Moved
        }
    }

    /// Move the cursor back. No-op at index 0 and after completion.
    pub fn retreat(&mut self) {
        if self.can_retreat() {
            self.cursor -= 1;
        }
    }

    /// Complete immediately from wherever the cursor is. Scoring is total,
    /// so early abandonment still yields a (degraded) result.
    pub fn finish(&mut self) -> &AssessmentResult {
        let Self {
            bank,
            responses,
            cursor,
            result,
            ..
        } = self;
        if result.is_none() {
            *cursor = bank.len();
        }
        result.get_or_insert_with(|| scoring::score(bank, responses))
    }

    /// Whether the session has completed and holds a result.
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// The computed result, once complete.
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Clear all responses, reset the cursor to 0, and discard the result.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.cursor = 0;
        self.started_at = Utc::now();
        self.result = None;
    }
}
