//! Column codecs for value objects stored as text.
//!
//! `questions.answer`, `questions.choice`, and `attender_answers.answer` each
//! hold one compact JSON document:
//!
//! ```text
//! Answer          {"values":["4"]}
//! MultipleChoice  {"choices":["4","3","2"]}
//! ```
//!
//! The grammar is a storage contract. Changing it breaks decoding of rows
//! already written. Any encode/decode fault is reported as a processing
//! failure wrapping the `serde_json` cause, never as bad input: by the time a
//! value reaches a column it has already passed validation.

use acad_core::errors::AcademyError;
use acad_core::values::{Answer, MultipleChoice};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode/decode pair for one column type.
pub trait ColumnCodec {
    type Value;

    /// # Errors
    ///
    /// Returns `AcademyError::Processing` if the value cannot be serialized.
    fn encode(value: &Self::Value) -> Result<String, AcademyError>;

    /// # Errors
    ///
    /// Returns `AcademyError::Processing` if `text` does not match the grammar.
    fn decode(text: &str) -> Result<Self::Value, AcademyError>;
}

/// Codec for `Answer` columns.
pub struct AnswerCodec;

/// Codec for `MultipleChoice` columns.
pub struct MultipleChoiceCodec;

impl ColumnCodec for AnswerCodec {
    type Value = Answer;

    fn encode(value: &Answer) -> Result<String, AcademyError> {
        encode_json(value, "answer")
    }

    fn decode(text: &str) -> Result<Answer, AcademyError> {
        decode_json(text, "answer")
    }
}

impl ColumnCodec for MultipleChoiceCodec {
    type Value = MultipleChoice;

    fn encode(value: &MultipleChoice) -> Result<String, AcademyError> {
        encode_json(value, "multiple choice")
    }

    fn decode(text: &str) -> Result<MultipleChoice, AcademyError> {
        decode_json(text, "multiple choice")
    }
}

fn encode_json<T: Serialize>(value: &T, column: &str) -> Result<String, AcademyError> {
    serde_json::to_string(value).map_err(|e| {
        tracing::warn!(column, error = %e, "column encode failed");
        AcademyError::processing(format!("failed to encode {column} column"), e)
    })
}

fn decode_json<T: DeserializeOwned>(text: &str, column: &str) -> Result<T, AcademyError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::warn!(column, error = %e, "column decode failed");
        AcademyError::processing(format!("failed to decode {column} column"), e)
    })
}
