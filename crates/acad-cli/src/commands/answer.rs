use acad_db::service::AcademyService;

use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn handle(
    svc: &AcademyService,
    state_id: i64,
    question_id: i64,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let answer = svc.find_attender_answer(state_id, question_id).await?;
    output(&answer, flags.format)
}
