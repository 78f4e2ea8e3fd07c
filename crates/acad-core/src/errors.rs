//! Categorized error types for the academy backend.
//!
//! `AcademyError` is the single failure value that leaves this workspace's
//! libraries. Store-level errors (e.g., `DatabaseError`) are defined in their
//! own crates and convert into `AcademyError` at the service boundary. These
//! values are terminal: nothing in the libraries catches and reclassifies them.

use thiserror::Error;

use crate::enums::{EntityKind, ErrorCategory};

/// Reason used when a derived attender-answer lookup finds no match.
pub const ATTENDER_ANSWER_NOT_FOUND: &str = "attender answer was not found";

/// A categorized failure carrying a human-readable reason.
#[derive(Debug, Error)]
pub enum AcademyError {
    /// A primary-key or derived lookup found nothing.
    #[error("{reason}")]
    NotFound { reason: String },

    /// Caller input was rejected.
    #[error("{reason}")]
    BadRequest { reason: String },

    /// Internal fault (codec, store). Never attributable to caller input.
    #[error("{reason}")]
    Processing {
        reason: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AcademyError {
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn processing(reason: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Processing {
            reason: reason.into(),
            source: source.into(),
        }
    }

    /// Not-found error for any named resource: `"<name> id was not found"`.
    pub fn id_not_found(name: impl std::fmt::Display) -> Self {
        Self::not_found(format!("{name} id was not found"))
    }

    /// Not-found error for a locator miss, named by the entity's qualified type name.
    #[must_use]
    pub fn entity_not_found(kind: EntityKind) -> Self {
        Self::id_not_found(kind.qualified_name())
    }

    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::ResourceNotFound,
            Self::BadRequest { .. } => ErrorCategory::InvalidInput,
            Self::Processing { .. } => ErrorCategory::ProcessingFailure,
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::NotFound { reason }
            | Self::BadRequest { reason }
            | Self::Processing { reason, .. } => reason,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Fixed set of resources with a ready-made not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingResource {
    Academy,
    Student,
    Teacher,
    Classroom,
    Exam,
    AttenderState,
}

impl MissingResource {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Academy => "academy",
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Classroom => "classroom",
            Self::Exam => "exam",
            Self::AttenderState => "attender state",
        }
    }
}

impl From<MissingResource> for AcademyError {
    fn from(resource: MissingResource) -> Self {
        Self::id_not_found(resource.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn not_found_carries_reason_and_category() {
        let err = AcademyError::not_found("lesson id was not found");
        assert_eq!(err.category(), ErrorCategory::ResourceNotFound);
        assert_eq!(err.reason(), "lesson id was not found");
        assert_eq!(err.to_string(), "lesson id was not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn bad_request_is_invalid_input() {
        let err = AcademyError::bad_request("question config is invalid");
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
        assert!(!err.is_not_found());
    }

    #[test]
    fn processing_keeps_the_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AcademyError::processing("could not decode answer", cause);
        assert_eq!(err.category(), ErrorCategory::ProcessingFailure);
        assert!(err.source().is_some());
    }

    #[test]
    fn entity_not_found_uses_qualified_name() {
        let err = AcademyError::entity_not_found(EntityKind::Student);
        assert_eq!(
            err.reason(),
            "acad_core::entities::Student id was not found"
        );
    }

    #[test]
    fn missing_resource_formats_reason() {
        let cases = [
            (MissingResource::Academy, "academy id was not found"),
            (MissingResource::Student, "student id was not found"),
            (MissingResource::Teacher, "teacher id was not found"),
            (MissingResource::Classroom, "classroom id was not found"),
            (MissingResource::Exam, "exam id was not found"),
            (MissingResource::AttenderState, "attender state id was not found"),
        ];
        for (resource, expected) in cases {
            let err = AcademyError::from(resource);
            assert!(err.is_not_found());
            assert_eq!(err.reason(), expected);
        }
    }

    #[test]
    fn id_not_found_accepts_any_name() {
        let err = AcademyError::id_not_found("homework");
        assert_eq!(err.reason(), "homework id was not found");
    }
}
