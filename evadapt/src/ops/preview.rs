//! Preview operation - render without writing.

use evadapt_codegen::Generator;
use evadapt_manifest::Configuration;
use eyre::Result;

use crate::reports::PreviewReport;

/// Execute the preview operation.
pub fn preview(config: &Configuration) -> Result<PreviewReport> {
    let files = Generator::new(config).preview()?;
    Ok(PreviewReport { files })
}
