//! Entity kinds and error categories.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Every entity the locator can resolve by primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Account,
    Student,
    Teacher,
    Academy,
    Classroom,
    Lesson,
    Exam,
    Question,
    AttenderState,
    AttenderAnswer,
}

impl EntityKind {
    pub const ALL: [Self; 10] = [
        Self::Account,
        Self::Student,
        Self::Teacher,
        Self::Academy,
        Self::Classroom,
        Self::Lesson,
        Self::Exam,
        Self::Question,
        Self::AttenderState,
        Self::AttenderAnswer,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Academy => "academy",
            Self::Classroom => "classroom",
            Self::Lesson => "lesson",
            Self::Exam => "exam",
            Self::Question => "question",
            Self::AttenderState => "attender_state",
            Self::AttenderAnswer => "attender_answer",
        }
    }

    /// Fully qualified type name of the entity struct, used in not-found reasons.
    #[must_use]
    pub const fn qualified_name(self) -> &'static str {
        match self {
            Self::Account => "acad_core::entities::Account",
            Self::Student => "acad_core::entities::Student",
            Self::Teacher => "acad_core::entities::Teacher",
            Self::Academy => "acad_core::entities::Academy",
            Self::Classroom => "acad_core::entities::Classroom",
            Self::Lesson => "acad_core::entities::Lesson",
            Self::Exam => "acad_core::entities::Exam",
            Self::Question => "acad_core::entities::Question",
            Self::AttenderState => "acad_core::entities::AttenderState",
            Self::AttenderAnswer => "acad_core::entities::AttenderAnswer",
        }
    }

    /// Parse the `snake_case` form produced by [`EntityKind::as_str`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ErrorCategory
// ---------------------------------------------------------------------------

/// Semantic failure category. Mapping to a transport status happens at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    ResourceNotFound,
    InvalidInput,
    ProcessingFailure,
}

impl ErrorCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ResourceNotFound => "resource_not_found",
            Self::InvalidInput => "invalid_input",
            Self::ProcessingFailure => "processing_failure",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
