use clap::Args;
use eyre::{Context, Result};

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl PreviewCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load_complete();

        let report = ops::preview(&config).wrap_err("Failed to render preview")?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
