mod bake;
mod check;
mod completions;
mod generate;
mod info;
mod init;
mod preview;
mod set;
mod stage;

use std::path::PathBuf;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use evadapt_manifest::{
    Configuration, DatabaseKind, EditSession, EvadaptToml, FieldEdit, MANIFEST_FILENAME, Strategy,
};
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use init::InitCommand;
use preview::PreviewCommand;
use set::SetCommand;
use stage::StageCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for evadapt_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Location of evadapt.toml plus per-invocation overrides.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to evadapt.toml (defaults to ./evadapt.toml)
    #[arg(short = 'c', long = "config", default_value = MANIFEST_FILENAME)]
    pub path: PathBuf,

    /// Database backend (overrides evadapt.toml setting)
    #[arg(long)]
    pub database_kind: Option<DatabaseKind>,

    /// Database strategy (overrides evadapt.toml setting)
    #[arg(long)]
    pub strategy: Option<Strategy>,
}

impl ConfigArgs {
    /// Load the configuration and apply overrides, exiting on parse errors.
    pub fn load(&self) -> Configuration {
        let file = EvadaptToml::open(&self.path).unwrap_or_exit();
        tracing::debug!(path = %file.path().display(), "loaded configuration");

        let edits = self
            .database_kind
            .map(FieldEdit::DatabaseKind)
            .into_iter()
            .chain(self.strategy.map(FieldEdit::Strategy));
        EditSession::from_config(file.config().clone())
            .apply_all(edits)
            .into_config()
    }

    /// Load the configuration and exit unless every required field is set.
    pub fn load_complete(&self) -> Configuration {
        let config = self.load();
        config.require_complete().unwrap_or_exit();
        config
    }
}

#[derive(Parser)]
#[command(name = "evadapt")]
#[command(version)]
#[command(about = "Scaffold Kafka orchestrator adapter projects from evadapt.toml")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Set(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Bake(cmd) => cmd.run(),
            Commands::Stage(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter evadapt.toml
    Init(InitCommand),

    /// Validate evadapt.toml and list missing fields
    Check(CheckCommand),

    /// Show derived names and output paths
    Info(InfoCommand),

    /// Change one field of evadapt.toml
    Set(SetCommand),

    /// Print every generated file without writing anything
    Preview(PreviewCommand),

    /// Generate the project as a zip archive
    Generate(GenerateCommand),

    /// Write the project as a file tree
    Bake(BakeCommand),

    /// Show the steps of a shared pipeline stage
    Stage(StageCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILENAME);
        std::fs::write(
            &path,
            "database_kind = \"mongo\"\n[database]\nstrategy = \"ATOMIC_OUTBOX\"\n",
        )
        .unwrap();

        let args = ConfigArgs {
            path,
            database_kind: Some(DatabaseKind::Postgres),
            strategy: None,
        };
        let config = args.load();

        assert_eq!(config.database_kind, DatabaseKind::Postgres);
        assert_eq!(config.database.strategy, Strategy::AtomicOutbox);
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::try_parse_from(["evadapt", "check", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
