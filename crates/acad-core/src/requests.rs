//! Inbound question payload shapes.
//!
//! Every field is optional at the type level so a payload with nulls or
//! missing keys still deserializes; rejection is the job of [`crate::validate`].
//! JSON keys are camelCase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::values::{Answer, MultipleChoice};

/// The editable content of one question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionConfig {
    pub content: Option<String>,
    pub answer: Option<String>,
    pub choice: Option<Vec<Option<String>>>,
}

impl QuestionConfig {
    /// Convenience constructor for a fully populated config.
    pub fn new<C, S>(content: impl Into<String>, answer: impl Into<String>, choice: C) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: Some(content.into()),
            answer: Some(answer.into()),
            choice: Some(choice.into_iter().map(|c| Some(c.into())).collect()),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        crate::validate::question_config(self)
    }

    /// Split a config into the parts a stored question is built from.
    ///
    /// Returns `None` when any required part is missing, including a null
    /// choice element. A config that passed validation always converts.
    #[must_use]
    pub fn to_parts(&self) -> Option<(String, Answer, MultipleChoice)> {
        let content = self.content.clone()?;
        let answer = Answer::single(self.answer.clone()?);
        let choices = self
            .choice
            .as_ref()?
            .iter()
            .cloned()
            .collect::<Option<Vec<String>>>()?;
        Some((content, answer, MultipleChoice::new(choices)))
    }
}

/// Create one question in an exam.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Create {
    pub exam_id: Option<i64>,
    pub question_config: Option<QuestionConfig>,
}

impl Create {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        crate::validate::create(self)
    }
}

/// Create several questions in an exam at once. All or nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultipleCreate {
    pub exam_id: Option<i64>,
    pub question_configs: Option<Vec<Option<QuestionConfig>>>,
}

impl MultipleCreate {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        crate::validate::multiple_create(self)
    }
}
