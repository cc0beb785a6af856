use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use evadapt_core::{GeneratedFile, WriteResult};
use evadapt_manifest::{
    DatabaseKind, EditSession, FieldEdit, MANIFEST_FILENAME, StarterManifest, Strategy,
};
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Application name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory to create evadapt.toml in (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Database backend
    #[arg(long)]
    pub database_kind: Option<DatabaseKind>,

    /// Fill in every field through prompts
    #[arg(short, long)]
    pub interactive: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let manifest_path = self.output.join(MANIFEST_FILENAME);
        if manifest_path.exists() {
            println!(
                "{} already exists, leaving it untouched",
                manifest_path.display()
            );
            return Ok(());
        }

        let mut session = EditSession::new();
        if let Some(name) = &self.name {
            session = session.apply(FieldEdit::ApplicationName(name.clone()));
        }
        if let Some(kind) = self.database_kind {
            session = session.apply(FieldEdit::DatabaseKind(kind));
        }
        if self.interactive {
            session = Self::prompt(session)?;
        }

        let starter = StarterManifest::new(session.into_config());
        let result = starter
            .write(&self.output)
            .wrap_err("Failed to write evadapt.toml")?;

        match result {
            WriteResult::Written => Self::print_next_steps(&manifest_path, &self.output),
            WriteResult::Skipped => println!(
                "{} already exists, leaving it untouched",
                manifest_path.display()
            ),
        }

        Ok(())
    }

    /// Walk through every field in form order.
    fn prompt(mut session: EditSession) -> Result<EditSession> {
        let theme = ColorfulTheme::default();

        let name = text(&theme, "Application name", &session.config().application_name)?;
        session = session.apply(FieldEdit::ApplicationName(name));

        let kind = select(
            &theme,
            "Database",
            &DatabaseKind::ALL.map(|k| k.label()),
            DatabaseKind::ALL
                .iter()
                .position(|k| *k == session.config().database_kind),
        )?;
        session = session.apply(FieldEdit::DatabaseKind(DatabaseKind::ALL[kind]));

        let current = session.config().clone();
        session = session.apply_all([
            FieldEdit::DomainTopic(text(&theme, "Domain topic", &current.domain.topic)?),
            FieldEdit::DomainGroupId(text(&theme, "Domain group id", &current.domain.group_id)?),
            FieldEdit::DomainBootstrapServers(text(
                &theme,
                "Domain bootstrap servers",
                &current.domain.bootstrap_servers,
            )?),
            FieldEdit::InterfaceTopic(text(&theme, "Interface topic", &current.interface.topic)?),
            FieldEdit::InterfaceBootstrapServers(text(
                &theme,
                "Interface bootstrap servers",
                &current.interface.bootstrap_servers,
            )?),
        ]);

        let strategies = Strategy::ALL.map(|s| {
            let best_for = s.description().lines().last().unwrap_or_default();
            format!("{} ({}) - {}", s.label(), s.as_str(), best_for)
        });
        let strategy = select(
            &theme,
            "Database strategy",
            &strategies,
            Strategy::ALL
                .iter()
                .position(|s| *s == session.config().database.strategy),
        )?;
        session = session.apply(FieldEdit::Strategy(Strategy::ALL[strategy]));

        let kind = session.config().database_kind;
        let uri = text(
            &theme,
            &format!("Database URI (e.g. {})", kind.uri_placeholder()),
            &session.config().database.uri,
        )?;
        session = session.apply(FieldEdit::DatabaseUri(uri));

        // Accepting the suggested name keeps it following the application name.
        let suggested = session.config().database.name.clone();
        let database_name = text(
            &theme,
            &format!("Database name (e.g. {})", kind.name_placeholder()),
            &suggested,
        )?;
        if database_name != suggested {
            session = session.apply(FieldEdit::DatabaseName(database_name));
        }

        let port = text(&theme, "Server port", &session.config().server.port)?;
        session = session.apply(FieldEdit::ServerPort(port));

        Ok(session)
    }

    fn print_next_steps(manifest_path: &Path, output_dir: &Path) {
        println!("Created {}", manifest_path.display());
        println!();
        println!("Next steps:");
        if output_dir != Path::new(".") {
            println!("  cd {}", output_dir.display());
        }
        println!("  evadapt check");
        println!("  evadapt generate");
    }
}

fn text(theme: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    input
        .interact_text()
        .wrap_err_with(|| format!("Failed to read {}", prompt.to_lowercase()))
}

fn select<T: ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[T],
    current: Option<usize>,
) -> Result<usize> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(current.unwrap_or(0))
        .interact()
        .wrap_err_with(|| format!("Failed to get {} selection", prompt.to_lowercase()))
}
