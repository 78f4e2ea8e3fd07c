//! Deep validation of inbound question payloads.
//!
//! Each payload shape has one pure function that checks its required fields
//! left to right and stops at the first violation. Field checks go through
//! [`Required`]:
//!
//! - absent (`None`) is always a violation;
//! - a sequence is a violation when empty, or when any element fails its own
//!   check (so a sequence of question configs recurses into each config);
//! - a mapping is a violation only when empty; its values are not inspected;
//! - a question config delegates to [`question_config`];
//! - any other present value passes.
//!
//! Nothing here returns an error. Callers turn a `false` into a bad-request
//! rejection before touching the store.

use std::collections::{BTreeMap, HashMap};

use crate::requests::{Create, MultipleCreate, QuestionConfig};

/// Presence check for one required field.
pub trait Required {
    fn is_present(&self) -> bool;
}

impl<T: Required> Required for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Required::is_present)
    }
}

impl<T: Required> Required for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty() && self.iter().all(Required::is_present)
    }
}

impl<K, V> Required for BTreeMap<K, V> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Required for HashMap<K, V, S> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Required for String {
    fn is_present(&self) -> bool {
        true
    }
}

impl Required for i64 {
    fn is_present(&self) -> bool {
        true
    }
}

impl Required for QuestionConfig {
    fn is_present(&self) -> bool {
        question_config(self)
    }
}

/// `content`, `answer`, and `choice` all present; `choice` non-empty with no null entries.
#[must_use]
pub fn question_config(config: &QuestionConfig) -> bool {
    config.content.is_present() && config.answer.is_present() && config.choice.is_present()
}

/// `exam_id` present and `question_config` valid.
#[must_use]
pub fn create(request: &Create) -> bool {
    request.exam_id.is_present() && request.question_config.is_present()
}

/// `exam_id` present and `question_configs` a non-empty list of valid configs.
#[must_use]
pub fn multiple_create(request: &MultipleCreate) -> bool {
    request.exam_id.is_present() && request.question_configs.is_present()
}
