use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory the archive is saved to (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.config.load_complete();

        let report = ops::generate(&config, &self.output);
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
