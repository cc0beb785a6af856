use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ConfigArgs;
use crate::{
    ops::{self, bake::BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let config = self.config.load_complete();

        let report = ops::bake(
            &config,
            BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        );
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
