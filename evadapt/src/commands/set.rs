use std::path::PathBuf;

use clap::Args;
use evadapt_manifest::{EvadaptToml, MANIFEST_FILENAME};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SetCommand {
    /// Dotted key, e.g. `domain.topic` or `database.strategy`
    pub key: String,

    /// New value
    pub value: String,

    /// Path to evadapt.toml (defaults to ./evadapt.toml)
    #[arg(short, long, default_value = MANIFEST_FILENAME)]
    pub config: PathBuf,
}

impl SetCommand {
    pub fn run(&self) -> Result<()> {
        let mut file = EvadaptToml::open(&self.config).unwrap_or_exit();

        let report = ops::set(&mut file, &self.key, &self.value).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
