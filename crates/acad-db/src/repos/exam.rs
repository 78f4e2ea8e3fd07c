//! Exam and question rows.
//!
//! Questions are the one write path in this crate: a payload is gated by the
//! deep validator, the target exam is resolved through the locator, and the
//! answer and choice columns are written through their codecs.

use acad_core::entities::{Exam, Question};
use acad_core::enums::EntityKind;
use acad_core::errors::AcademyError;
use acad_core::requests::{Create, MultipleCreate, QuestionConfig};
use acad_core::validate;
use chrono::Utc;

use crate::codec::{AnswerCodec, ColumnCodec, MultipleChoiceCodec};
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::locator::Locate;
use crate::service::AcademyService;

/// Rejection reason for a question payload that fails deep validation.
pub const INVALID_QUESTION_CONFIG: &str = "question config is invalid";

impl Locate for Exam {
    const KIND: EntityKind = EntityKind::Exam;
    const COLUMNS: &'static str = "id, classroom_id, title, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            classroom_id: row.get::<i64>(1)?,
            title: row.get::<String>(2)?,
            created_at: parse_datetime(&row.get::<String>(3)?)?,
        })
    }
}

impl Locate for Question {
    const KIND: EntityKind = EntityKind::Question;
    const COLUMNS: &'static str = "id, exam_id, content, answer, choice, created_at";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            exam_id: row.get::<i64>(1)?,
            content: row.get::<String>(2)?,
            answer: AnswerCodec::decode(&row.get::<String>(3)?)?,
            choice: MultipleChoiceCodec::decode(&row.get::<String>(4)?)?,
            created_at: parse_datetime(&row.get::<String>(5)?)?,
        })
    }
}

/// Insert one question row and return its id. `conn` may be a transaction.
async fn insert_question(
    conn: &libsql::Connection,
    exam_id: i64,
    config: &QuestionConfig,
) -> Result<i64, DatabaseError> {
    let (content, answer, choice) = config
        .to_parts()
        .ok_or_else(|| AcademyError::bad_request(INVALID_QUESTION_CONFIG))?;
    let answer_text = AnswerCodec::encode(&answer)?;
    let choice_text = MultipleChoiceCodec::encode(&choice)?;

    conn.execute(
        "INSERT INTO questions (exam_id, content, answer, choice, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            exam_id,
            content.as_str(),
            answer_text.as_str(),
            choice_text.as_str(),
            Utc::now().to_rfc3339()
        ],
    )
    .await?;
    Ok(conn.last_insert_rowid())
}

impl AcademyService {
    /// Create one question from a `Create` payload.
    ///
    /// # Errors
    ///
    /// - `AcademyError::BadRequest` if the payload fails deep validation
    ///   (nothing is written).
    /// - `AcademyError::NotFound` if the exam does not exist.
    /// - `AcademyError::Processing` on codec or store failure.
    pub async fn create_question(&self, request: &Create) -> Result<Question, AcademyError> {
        if !validate::create(request) {
            return Err(AcademyError::bad_request(INVALID_QUESTION_CONFIG));
        }
        let (Some(exam_id), Some(config)) = (request.exam_id, request.question_config.as_ref())
        else {
            return Err(AcademyError::bad_request(INVALID_QUESTION_CONFIG));
        };

        let exam = self.get_exam(exam_id).await?;
        let id = insert_question(self.db().conn(), exam.id, config).await?;
        tracing::debug!(exam_id = exam.id, question_id = id, "question created");
        self.get_question(id).await
    }

    /// Create every question in a `MultipleCreate` payload, all or nothing.
    ///
    /// The whole payload is validated before anything is written, and the
    /// inserts run in one transaction.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_question`]. On any error no question from the
    /// payload is stored.
    pub async fn create_questions(
        &self,
        request: &MultipleCreate,
    ) -> Result<Vec<Question>, AcademyError> {
        if !validate::multiple_create(request) {
            return Err(AcademyError::bad_request(INVALID_QUESTION_CONFIG));
        }
        let (Some(exam_id), Some(configs)) = (request.exam_id, request.question_configs.as_ref())
        else {
            return Err(AcademyError::bad_request(INVALID_QUESTION_CONFIG));
        };

        let exam = self.get_exam(exam_id).await?;

        let tx = self
            .db()
            .conn()
            .transaction()
            .await
            .map_err(DatabaseError::from)?;
        let mut ids = Vec::with_capacity(configs.len());
        for config in configs.iter().flatten() {
            match insert_question(&tx, exam.id, config).await {
                Ok(id) => ids.push(id),
                Err(e) => {
                    if let Err(rollback) = tx.rollback().await {
                        tracing::error!(
                            exam_id = exam.id,
                            error = %rollback,
                            "question batch rollback failed"
                        );
                    }
                    return Err(e.into());
                }
            }
        }
        tx.commit().await.map_err(DatabaseError::from)?;
        tracing::debug!(exam_id = exam.id, count = ids.len(), "questions created");

        let mut questions = Vec::with_capacity(ids.len());
        for id in ids {
            questions.push(self.get_question(id).await?);
        }
        Ok(questions)
    }

    /// List an exam's questions in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AcademyError::NotFound` if the exam does not exist, or
    /// `AcademyError::Processing` if a stored column fails to decode.
    pub async fn list_questions(&self, exam_id: i64) -> Result<Vec<Question>, AcademyError> {
        let exam = self.get_exam(exam_id).await?;
        let sql = format!(
            "SELECT {} FROM questions WHERE exam_id = ?1 ORDER BY id",
            Question::COLUMNS
        );
        Ok(self
            .db()
            .query_all_by_id(&sql, exam.id, Question::from_row)
            .await?)
    }
}
