//! Stage command report data structures.

use evadapt_codegen::Stage;

use super::output::{Output, Report};

/// One stage of the shared pipeline step library.
#[derive(Debug)]
pub struct StageReport {
    pub application_name: String,
    pub stage: Stage,
}

impl Report for StageReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value(
            "Stage",
            &format!("{} ({})", self.stage.name, self.stage.key),
        );
        out.key_value("Application", &self.application_name);
        out.newline();
        out.section("Steps");
        for (i, step) in self.stage.steps.iter().enumerate() {
            out.numbered_item(i + 1, step);
        }
    }
}
