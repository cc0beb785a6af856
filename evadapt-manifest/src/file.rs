use std::path::{Path, PathBuf};

use evadapt_core::{FileRules, GeneratedFile};

use crate::{Configuration, Error, Result};

/// Conventional name of the configuration file.
pub const MANIFEST_FILENAME: &str = "evadapt.toml";

/// Represents an evadapt.toml file with both raw content and parsed configuration.
#[derive(Debug)]
pub struct EvadaptToml {
    path: PathBuf,
    content: String,
    config: Configuration,
}

impl EvadaptToml {
    /// Open and parse an evadapt.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Configuration::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Replace the configuration as a whole and re-render the content.
    pub fn set_config(&mut self, config: Configuration) {
        self.content = StarterManifest::new(config.clone()).render();
        self.config = config;
    }

    /// Save the current content to disk.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|e| {
            Box::new(Error::Write {
                path: self.path.clone(),
                source: e,
            })
        })
    }
}

/// The evadapt.toml written by `evadapt init`.
///
/// Never overwrites an existing file.
pub struct StarterManifest {
    config: Configuration,
}

impl StarterManifest {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }
}

impl GeneratedFile for StarterManifest {
    fn path(&self) -> String {
        MANIFEST_FILENAME.to_string()
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        let c = &self.config;
        format!(
            r#"# Event adapter project configuration.
# Run 'evadapt check' to validate and 'evadapt generate' to build the archive.

application_name = {}
# mongo | postgres
database_kind = {}

# Inbound messages (consumer)
[domain]
topic = {}
group_id = {}
bootstrap_servers = {}

# Outbound messages (producer)
[interface]
topic = {}
bootstrap_servers = {}

[database]
# ATOMIC_OUTBOX | AUDIT_PERSIST | FAIL_SAFE
strategy = {}
uri = {}
name = {}
{}
[server]
port = {}
"#,
            quoted(&c.application_name),
            quoted(c.database_kind.as_str()),
            quoted(&c.domain.topic),
            quoted(&c.domain.group_id),
            quoted(&c.domain.bootstrap_servers),
            quoted(&c.interface.topic),
            quoted(&c.interface.bootstrap_servers),
            quoted(c.database.strategy.as_str()),
            quoted(&c.database.uri),
            quoted(&c.database.name),
            name_touched_line(c.database.name_touched),
            quoted(&c.server.port),
        )
    }
}

/// `database.name` stops following `application_name` once this is true.
fn name_touched_line(touched: Option<bool>) -> String {
    match touched {
        Some(touched) => format!(
            "# true once name is edited directly; until then it follows application_name\nname_touched = {}\n",
            touched
        ),
        None => String::new(),
    }
}

/// TOML basic string with escapes applied.
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use evadapt_core::{DatabaseKind, WriteResult};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_starter_manifest_parses_back() {
        let mut config = Configuration {
            application_name: "Quote \"Engine\"".to_string(),
            database_kind: DatabaseKind::Postgres,
            ..Default::default()
        };
        config.database.uri = r"C:\data".to_string();

        let rendered = StarterManifest::new(config.clone()).render();

        assert_eq!(Configuration::from_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_starter_manifest_keeps_name_touched_flag() {
        let mut config = Configuration {
            application_name: "pay".to_string(),
            ..Default::default()
        };
        config.database.name = "pay".to_string();
        config.database.name_touched = Some(true);

        let rendered = StarterManifest::new(config.clone()).render();

        assert!(rendered.contains("\nname_touched = true\n"));
        assert_eq!(Configuration::from_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_starter_manifest_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let starter = StarterManifest::new(Configuration::default());

        assert_eq!(starter.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(starter.write(temp.path()).unwrap(), WriteResult::Skipped);
    }

    #[test]
    fn test_open_set_config_and_save() {
        let temp = TempDir::new().unwrap();
        StarterManifest::new(Configuration::default())
            .write(temp.path())
            .unwrap();

        let path = temp.path().join(MANIFEST_FILENAME);
        let mut file = EvadaptToml::open(&path).unwrap();
        assert_eq!(file.config(), &Configuration::default());

        let mut config = file.config().clone();
        config.application_name = "orders".to_string();
        file.set_config(config);
        file.save().unwrap();

        let reopened = EvadaptToml::open(&path).unwrap();
        assert_eq!(reopened.config().application_name, "orders");
        assert_eq!(reopened.path(), path.as_path());
    }
}
