use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::values::Answer;

/// One student's attempt at one exam.
///
/// Owns its recorded answers, at most one per question. The collection is
/// loaded together with the state row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttenderState {
    pub id: i64,
    pub exam_id: i64,
    pub student_id: i64,
    pub answers: Vec<AttenderAnswer>,
    pub created_at: DateTime<Utc>,
}

impl AttenderState {
    /// Owned answer recorded for `question_id`, scanning the loaded collection.
    #[must_use]
    pub fn answer_for(&self, question_id: i64) -> Option<&AttenderAnswer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }
}

/// A student's recorded answer to one question within an attempt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttenderAnswer {
    pub id: i64,
    pub attender_state_id: i64,
    pub question_id: i64,
    pub answer: Answer,
    pub created_at: DateTime<Utc>,
}
