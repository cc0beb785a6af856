//! Stage operation - lookup in the shared pipeline step table.

use evadapt_codegen::{Identifiers, StageTable, UnknownStage};
use evadapt_manifest::Configuration;

use crate::reports::StageReport;

/// Execute the stage operation.
///
/// An unknown stage name is an error; there is no fallback stage.
pub fn stage(config: &Configuration, name: &str) -> Result<StageReport, UnknownStage> {
    let ids = Identifiers::derive(config);
    let table = StageTable::for_artifact(&ids.artifact_id);
    let stage = table.lookup(name)?.clone();

    Ok(StageReport {
        application_name: config.application_name.clone(),
        stage,
    })
}
