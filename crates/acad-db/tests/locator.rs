//! Locator integration tests.
//!
//! - Generic lookup: hit, miss, reason format, every entity kind
//! - Derived attender-answer lookup: hit, answer miss, state miss
//! - Answer replacement through the derived lookup
//! - Corrupt stored columns surface as processing failures

use acad_core::entities::{AttenderAnswer, Student};
use acad_core::enums::{EntityKind, ErrorCategory};
use acad_core::errors::ATTENDER_ANSWER_NOT_FOUND;
use acad_core::values::Answer;
use acad_db::service::AcademyService;
use pretty_assertions::assert_eq;

/// Academy 1 / classroom 1 / lesson 1 / exam 7 with questions 10 and 11,
/// student 42 (account 1), teacher 3 (account 2), and attender state 1 holding
/// answers 100 (question 10) and 101 (question 11).
const SEED: &str = r#"
INSERT INTO accounts (id, email, name) VALUES (1, 'kim@example.com', 'Kim');
INSERT INTO accounts (id, email, name) VALUES (2, 'lee@example.com', 'Lee');
INSERT INTO academies (id, name, description) VALUES (1, 'North Academy', NULL);
INSERT INTO students (id, account_id, academy_id) VALUES (42, 1, 1);
INSERT INTO teachers (id, account_id, academy_id) VALUES (3, 2, 1);
INSERT INTO classrooms (id, academy_id, name) VALUES (1, 1, 'Room 1');
INSERT INTO lessons (id, classroom_id, title) VALUES (1, 1, 'Arithmetic');
INSERT INTO exams (id, classroom_id, title) VALUES (7, 1, 'Midterm');
INSERT INTO questions (id, exam_id, content, answer, choice)
    VALUES (10, 7, '2+2', '{"values":["4"]}', '{"choices":["4","3","2"]}');
INSERT INTO questions (id, exam_id, content, answer, choice)
    VALUES (11, 7, '3+3', '{"values":["6"]}', '{"choices":["6","5"]}');
INSERT INTO questions (id, exam_id, content, answer, choice)
    VALUES (12, 7, '4+4', '{"values":["8"]}', '{"choices":["8","7"]}');
INSERT INTO attender_states (id, exam_id, student_id) VALUES (1, 7, 42);
INSERT INTO attender_answers (id, attender_state_id, question_id, answer)
    VALUES (100, 1, 10, '{"values":["4"]}');
INSERT INTO attender_answers (id, attender_state_id, question_id, answer)
    VALUES (101, 1, 11, '{"values":["5"]}');
"#;

async fn seeded_service() -> AcademyService {
    let svc = AcademyService::new_local(":memory:").await.unwrap();
    svc.db().conn().execute_batch(SEED).await.unwrap();
    svc
}

// ---------------------------------------------------------------------------
// Generic lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_student_is_not_found() {
    let svc = AcademyService::new_local(":memory:").await.unwrap();
    let err = svc.get_student(42).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ResourceNotFound);
    assert!(err.reason().contains("Student"), "reason: {}", err.reason());
    assert!(err.reason().contains("id was not found"), "reason: {}", err.reason());
}

#[tokio::test]
async fn present_student_is_returned() {
    let svc = seeded_service().await;
    let student: Student = svc.locate(42).await.unwrap();
    assert_eq!(student.id, 42);
    assert_eq!(student.account_id, 1);
    assert_eq!(student.academy_id, Some(1));
    assert_eq!(svc.get_student(42).await.unwrap(), student);
}

#[tokio::test]
async fn every_kind_resolves_and_misses() {
    let svc = seeded_service().await;
    let present = [
        (EntityKind::Account, 1),
        (EntityKind::Student, 42),
        (EntityKind::Teacher, 3),
        (EntityKind::Academy, 1),
        (EntityKind::Classroom, 1),
        (EntityKind::Lesson, 1),
        (EntityKind::Exam, 7),
        (EntityKind::Question, 10),
        (EntityKind::AttenderState, 1),
        (EntityKind::AttenderAnswer, 100),
    ];
    for (kind, id) in present {
        let json = svc.locate_json(kind, id).await.unwrap();
        assert_eq!(json["id"], id, "{kind} {id}");

        let err = svc.locate_json(kind, 9_999).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.reason(),
            format!("{} id was not found", kind.qualified_name())
        );
    }
}

#[tokio::test]
async fn nullable_columns_read_as_none() {
    let svc = seeded_service().await;
    let academy = svc.get_academy(1).await.unwrap();
    assert_eq!(academy.name, "North Academy");
    assert!(academy.description.is_none());
}

#[tokio::test]
async fn question_columns_decode() {
    let svc = seeded_service().await;
    let question = svc.get_question(10).await.unwrap();
    assert_eq!(question.answer, Answer::single("4"));
    assert_eq!(question.choice.choices, vec!["4", "3", "2"]);
}

#[tokio::test]
async fn attender_state_loads_owned_answers() {
    let svc = seeded_service().await;
    let state = svc.get_attender_state(1).await.unwrap();
    let question_ids: Vec<_> = state.answers.iter().map(|a| a.question_id).collect();
    assert_eq!(question_ids, vec![10, 11]);
}

// ---------------------------------------------------------------------------
// Derived lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_attender_answer_hit() {
    let svc = seeded_service().await;
    let answer: AttenderAnswer = svc.find_attender_answer(1, 10).await.unwrap();
    assert_eq!(answer.id, 100);
    assert_eq!(answer.question_id, 10);
    assert_eq!(answer.answer, Answer::single("4"));
    assert_eq!(answer, svc.get_attender_answer(100).await.unwrap());
}

#[tokio::test]
async fn find_attender_answer_unknown_question() {
    let svc = seeded_service().await;
    let err = svc.find_attender_answer(1, 99).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ResourceNotFound);
    assert_eq!(err.reason(), ATTENDER_ANSWER_NOT_FOUND);
}

#[tokio::test]
async fn find_attender_answer_unanswered_question_of_same_exam() {
    let svc = seeded_service().await;
    let err = svc.find_attender_answer(1, 12).await.unwrap_err();
    assert_eq!(err.reason(), ATTENDER_ANSWER_NOT_FOUND);
}

#[tokio::test]
async fn find_attender_answer_missing_state() {
    let svc = seeded_service().await;
    let err = svc.find_attender_answer(999, 10).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.reason(),
        format!(
            "{} id was not found",
            EntityKind::AttenderState.qualified_name()
        )
    );
    assert_ne!(err.reason(), ATTENDER_ANSWER_NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn replace_attender_answer_overwrites_column() {
    let svc = seeded_service().await;
    let replaced = svc
        .replace_attender_answer(1, 11, &Answer::single("6"))
        .await
        .unwrap();
    assert_eq!(replaced.id, 101);
    assert_eq!(replaced.answer, Answer::single("6"));

    let reread = svc.find_attender_answer(1, 11).await.unwrap();
    assert_eq!(reread.answer, Answer::single("6"));

    let untouched = svc.find_attender_answer(1, 10).await.unwrap();
    assert_eq!(untouched.answer, Answer::single("4"));
}

#[tokio::test]
async fn replace_attender_answer_miss_changes_nothing() {
    let svc = seeded_service().await;
    let err = svc
        .replace_attender_answer(1, 12, &Answer::single("8"))
        .await
        .unwrap_err();
    assert_eq!(err.reason(), ATTENDER_ANSWER_NOT_FOUND);

    let mut rows = svc
        .db()
        .conn()
        .query("SELECT COUNT(*) FROM attender_answers", ())
        .await
        .unwrap();
    let count = rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap();
    assert_eq!(count, 2);
}

// ---------------------------------------------------------------------------
// Corrupt columns
// ---------------------------------------------------------------------------

#[tokio::test]
async fn corrupt_owned_answer_fails_state_lookup() {
    let svc = seeded_service().await;
    svc.db()
        .conn()
        .execute(
            "UPDATE attender_answers SET answer = 'not json' WHERE id = 101",
            (),
        )
        .await
        .unwrap();

    let err = svc.find_attender_answer(1, 10).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ProcessingFailure);
    assert_eq!(err.reason(), "failed to decode answer column");
}
