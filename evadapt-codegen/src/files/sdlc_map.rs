//! `vars/sdlc2Map.groovy`, the shared pipeline step library.

use evadapt_core::GeneratedFile;

use crate::{StageTable, TemplateContext};

/// Shared pipeline step rendered from [`StageTable`].
pub struct SdlcMap<'a> {
    ctx: TemplateContext<'a>,
    table: StageTable,
}

impl<'a> SdlcMap<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        let table = StageTable::for_artifact(&ctx.ids.artifact_id);
        Self { ctx, table }
    }

    pub fn table(&self) -> &StageTable {
        &self.table
    }

    fn render_stages(&self) -> String {
        let stages = self.table.stages();
        let mut out = String::new();
        for (i, stage) in stages.iter().enumerate() {
            let steps = stage
                .steps
                .iter()
                .map(|step| format!("'{}'", step))
                .collect::<Vec<_>>()
                .join(", ");
            let separator = if i + 1 < stages.len() { "," } else { "" };
            out.push_str(&format!(
                "        '{}': [\n            'name': '{}',\n            'steps': [{}]\n        ]{}\n",
                stage.key, stage.name, steps, separator
            ));
        }
        out
    }
}

impl GeneratedFile for SdlcMap<'_> {
    fn path(&self) -> String {
        "vars/sdlc2Map.groovy".to_string()
    }

    fn render(&self) -> String {
        format!(
            r#"#!/usr/bin/env groovy

def call(String stage = '{default}') {{
    def stages = [
{stages}    ]

    def currentStage = stages[stage]
    if (!currentStage) {{
        error "Unknown stage: ${{stage}}"
    }}

    echo "Executing ${{currentStage.name}} stage for {name}"

    currentStage.steps.each {{ step ->
        sh step
    }}

    echo "${{currentStage.name}} stage completed successfully"
}}
"#,
            default = StageTable::DEFAULT_STAGE,
            stages = self.render_stages(),
            name = self.ctx.config.application_name,
        )
    }
}
