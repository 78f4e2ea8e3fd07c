//! Value objects persisted as serialized text columns.
//!
//! Both types are immutable once stored; a stored value is only ever
//! overwritten by an explicit replacement.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A submitted answer: the ordered values a student (or the answer key) gives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct Answer {
    pub values: Vec<String>,
}

impl Answer {
    #[must_use]
    pub const fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Answer with exactly one value.
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// The ordered choice set offered by a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct MultipleChoice {
    pub choices: Vec<String>,
}

impl MultipleChoice {
    #[must_use]
    pub const fn new(choices: Vec<String>) -> Self {
        Self { choices }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    #[must_use]
    pub fn contains(&self, choice: &str) -> bool {
        self.choices.iter().any(|c| c == choice)
    }
}

impl<S: Into<String>> FromIterator<S> for MultipleChoice {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            choices: iter.into_iter().map(Into::into).collect(),
        }
    }
}
