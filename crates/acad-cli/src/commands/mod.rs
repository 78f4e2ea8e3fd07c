pub mod answer;
pub mod check;
pub mod locate;

use acad_config::AcademyConfig;
use acad_db::service::AcademyService;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &AcademyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Check { shape, file } => check::handle(shape, &file, flags),
        Commands::Locate { kind, id } => {
            let svc = open_service(config, flags).await?;
            locate::handle(&svc, kind, id, flags).await
        }
        Commands::Answer {
            state_id,
            question_id,
        } => {
            let svc = open_service(config, flags).await?;
            answer::handle(&svc, state_id, question_id, flags).await
        }
    }
}

async fn open_service(config: &AcademyConfig, flags: &GlobalFlags) -> anyhow::Result<AcademyService> {
    let mut database = config.database.clone();
    if let Some(path) = &flags.database {
        database.path.clone_from(path);
    }
    tracing::debug!(path = %database.path, "opening store");
    AcademyService::from_config(&database)
        .await
        .map_err(|e| anyhow::anyhow!("failed to open database '{}': {e}", database.path))
}
