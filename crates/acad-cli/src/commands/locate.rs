use acad_core::enums::EntityKind;
use acad_db::service::AcademyService;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Resolve one entity and print it. A miss surfaces as the locator's reason.
pub async fn handle(
    svc: &AcademyService,
    kind: EntityKind,
    id: i64,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let entity = svc.locate_json(kind, id).await?;
    output(&entity, flags.format)
}
