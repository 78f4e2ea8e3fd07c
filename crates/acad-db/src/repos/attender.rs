//! Attender state and attender answer rows.
//!
//! States and answers are written by exam-taking logic elsewhere; this module
//! only reads them, plus the explicit replacement of a recorded answer.

use acad_core::entities::{AttenderAnswer, AttenderState};
use acad_core::enums::EntityKind;
use acad_core::errors::AcademyError;
use acad_core::values::Answer;

use crate::AcademyDb;
use crate::codec::{AnswerCodec, ColumnCodec};
use crate::error::DatabaseError;
use crate::helpers::{entity_kind_to_table, parse_datetime};
use crate::locator::Locate;
use crate::service::AcademyService;

impl Locate for AttenderAnswer {
    const KIND: EntityKind = EntityKind::AttenderAnswer;
    const COLUMNS: &'static str = "id, attender_state_id, question_id, answer, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            attender_state_id: row.get::<i64>(1)?,
            question_id: row.get::<i64>(2)?,
            answer: AnswerCodec::decode(&row.get::<String>(3)?)?,
            created_at: parse_datetime(&row.get::<String>(4)?)?,
        })
    }
}

impl Locate for AttenderState {
    const KIND: EntityKind = EntityKind::AttenderState;
    const COLUMNS: &'static str = "id, exam_id, student_id, created_at";

    /// Reads the state columns only; `answers` is filled in by `fetch`.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            exam_id: row.get::<i64>(1)?,
            student_id: row.get::<i64>(2)?,
            answers: Vec::new(),
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }

    async fn fetch(db: &AcademyDb, id: i64) -> Result<Option<Self>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            Self::COLUMNS,
            entity_kind_to_table(Self::KIND)
        );
        let Some(mut state) = db.query_by_id(&sql, id, Self::from_row).await? else {
            return Ok(None);
        };

        let answers_sql = format!(
            "SELECT {} FROM {} WHERE attender_state_id = ?1 ORDER BY id",
            AttenderAnswer::COLUMNS,
            entity_kind_to_table(AttenderAnswer::KIND)
        );
        state.answers = db
            .query_all_by_id(&answers_sql, id, AttenderAnswer::from_row)
            .await?;
        Ok(Some(state))
    }
}

impl AcademyService {
    /// Overwrite the answer recorded in `state_id` for `question_id`.
    ///
    /// The row is found through [`Self::find_attender_answer`], so a missing
    /// state or a missing answer fails the same way a lookup does.
    ///
    /// # Errors
    ///
    /// Returns `AcademyError::NotFound` on a lookup miss, or
    /// `AcademyError::Processing` on codec or store failure.
    pub async fn replace_attender_answer(
        &self,
        state_id: i64,
        question_id: i64,
        answer: &Answer,
    ) -> Result<AttenderAnswer, AcademyError> {
        let existing = self.find_attender_answer(state_id, question_id).await?;
        let text = AnswerCodec::encode(answer)?;

        self.db()
            .conn()
            .execute(
                "UPDATE attender_answers SET answer = ?1 WHERE id = ?2",
                libsql::params![text.as_str(), existing.id],
            )
            .await
            .map_err(DatabaseError::from)?;
        tracing::debug!(
            state_id,
            question_id,
            answer_id = existing.id,
            "attender answer replaced"
        );

        self.get_attender_answer(existing.id).await
    }
}
