use clap::Args;
use evadapt_codegen::StageTable;
use eyre::Result;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct StageCommand {
    /// Stage key (build, test, quality or deploy)
    #[arg(default_value = StageTable::DEFAULT_STAGE)]
    pub name: String,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl StageCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load();

        let report = ops::stage(&config, &self.name).map_err(|e| {
            eyre::eyre!("{} (available: {})", e, StageTable::KEYS.join(", "))
        })?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
