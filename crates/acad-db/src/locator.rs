//! Entity lookup by primary key.
//!
//! Every entity type implements [`Locate`], naming its [`EntityKind`] and how
//! its row is read. [`AcademyService::locate`] is the single generic path:
//! it fetches the row and turns a miss into a `NotFound` error whose reason is
//! `"<qualified type name> id was not found"`. The `get_*` methods are typed
//! wrappers over it. The locator only resolves rows; it never creates them.

use acad_core::entities::{
    Academy, Account, AttenderAnswer, AttenderState, Classroom, Exam, Lesson, Question, Student,
    Teacher,
};
use acad_core::enums::EntityKind;
use acad_core::errors::{ATTENDER_ANSWER_NOT_FOUND, AcademyError};

use crate::AcademyDb;
use crate::error::DatabaseError;
use crate::helpers::entity_kind_to_table;
use crate::service::AcademyService;

/// A row type the locator can resolve by primary key.
#[allow(async_fn_in_trait)]
pub trait Locate: Sized {
    const KIND: EntityKind;

    /// Column list selected for this entity, in the order `from_row` reads it.
    const COLUMNS: &'static str;

    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or malformed.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;

    /// Fetch the row with primary key `id`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or row mapping fails.
    async fn fetch(db: &AcademyDb, id: i64) -> Result<Option<Self>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            Self::COLUMNS,
            entity_kind_to_table(Self::KIND)
        );
        db.query_by_id(&sql, id, Self::from_row).await
    }
}

impl AcademyService {
    /// Resolve `id` into an entity of type `E`.
    ///
    /// # Errors
    ///
    /// Returns `AcademyError::NotFound` if no row has that id, or
    /// `AcademyError::Processing` if the store or a column codec fails.
    pub async fn locate<E: Locate>(&self, id: i64) -> Result<E, AcademyError> {
        match E::fetch(self.db(), id).await? {
            Some(entity) => Ok(entity),
            None => {
                tracing::debug!(kind = %E::KIND, id, "entity not found");
                Err(AcademyError::entity_not_found(E::KIND))
            }
        }
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_account(&self, id: i64) -> Result<Account, AcademyError> {
        self.locate(id).await
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_student(&self, id: i64) -> Result<Student, AcademyError> {
        self.locate(id).await
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_teacher(&self, id: i64) -> Result<Teacher, AcademyError> {
        self.locate(id).await
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_academy(&self, id: i64) -> Result<Academy, AcademyError> {
        self.locate(id).await
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_classroom(&self, id: i64) -> Result<Classroom, AcademyError> {
        self.locate(id).await
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_lesson(&self, id: i64) -> Result<Lesson, AcademyError> {
        self.locate(id).await
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_exam(&self, id: i64) -> Result<Exam, AcademyError> {
        self.locate(id).await
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_question(&self, id: i64) -> Result<Question, AcademyError> {
        self.locate(id).await
    }

    /// Resolve an attender state together with its owned answers.
    ///
    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_attender_state(&self, id: i64) -> Result<AttenderState, AcademyError> {
        self.locate(id).await
    }

    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn get_attender_answer(&self, id: i64) -> Result<AttenderAnswer, AcademyError> {
        self.locate(id).await
    }

    /// Resolve the answer recorded in attender state `state_id` for `question_id`.
    ///
    /// Resolves the state first; a missing state surfaces as the state's own
    /// not-found error and no scan happens. The state's answers are scanned
    /// for the question, and the match is re-resolved by its own id so the
    /// returned value is the current stored row.
    ///
    /// # Errors
    ///
    /// Returns `AcademyError::NotFound` with reason
    /// `"attender answer was not found"` when the state exists but holds no
    /// answer for the question.
    pub async fn find_attender_answer(
        &self,
        state_id: i64,
        question_id: i64,
    ) -> Result<AttenderAnswer, AcademyError> {
        let state = self.get_attender_state(state_id).await?;
        let Some(answer_id) = state.answer_for(question_id).map(|a| a.id) else {
            tracing::warn!(state_id, question_id, "no attender answer for question");
            return Err(AcademyError::not_found(ATTENDER_ANSWER_NOT_FOUND));
        };
        self.get_attender_answer(answer_id).await
    }

    /// Resolve an entity chosen at runtime and render it as JSON.
    ///
    /// # Errors
    ///
    /// See [`Self::locate`].
    pub async fn locate_json(
        &self,
        kind: EntityKind,
        id: i64,
    ) -> Result<serde_json::Value, AcademyError> {
        match kind {
            EntityKind::Account => to_json(&self.get_account(id).await?),
            EntityKind::Student => to_json(&self.get_student(id).await?),
            EntityKind::Teacher => to_json(&self.get_teacher(id).await?),
            EntityKind::Academy => to_json(&self.get_academy(id).await?),
            EntityKind::Classroom => to_json(&self.get_classroom(id).await?),
            EntityKind::Lesson => to_json(&self.get_lesson(id).await?),
            EntityKind::Exam => to_json(&self.get_exam(id).await?),
            EntityKind::Question => to_json(&self.get_question(id).await?),
            EntityKind::AttenderState => to_json(&self.get_attender_state(id).await?),
            EntityKind::AttenderAnswer => to_json(&self.get_attender_answer(id).await?),
        }
    }
}

fn to_json<T: serde::Serialize>(entity: &T) -> Result<serde_json::Value, AcademyError> {
    serde_json::to_value(entity)
        .map_err(|e| AcademyError::processing("failed to render entity as JSON", e))
}
