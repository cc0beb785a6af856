use clap::Args;
use eyre::Result;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.config.load();

        let report = ops::check(&config, &self.config.path);
        report.render(&mut TerminalOutput::new());

        if !report.is_complete() {
            std::process::exit(1);
        }
        Ok(())
    }
}
