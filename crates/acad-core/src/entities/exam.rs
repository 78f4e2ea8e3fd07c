use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::values::{Answer, MultipleChoice};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Exam {
    pub id: i64,
    pub classroom_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// One exam question. `answer` and `choice` are stored as codec-encoded text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub exam_id: i64,
    pub content: String,
    pub answer: Answer,
    pub choice: MultipleChoice,
    pub created_at: DateTime<Utc>,
}
