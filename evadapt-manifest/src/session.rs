//! Whole-value editing of a configuration.
//!
//! Every edit produces a new [`EditSession`]; the previous one is never
//! mutated. The only cross-field rule is that `database.name` follows
//! `application_name` until the user sets the database name directly.

use evadapt_core::{DatabaseKind, Strategy};

use crate::{Configuration, Error, Result};

/// A single user-facing field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    ApplicationName(String),
    DatabaseKind(DatabaseKind),
    DomainTopic(String),
    DomainGroupId(String),
    DomainBootstrapServers(String),
    InterfaceTopic(String),
    InterfaceBootstrapServers(String),
    Strategy(Strategy),
    DatabaseUri(String),
    DatabaseName(String),
    ServerPort(String),
}

impl FieldEdit {
    /// Build an edit from a dotted evadapt.toml key and a raw value.
    pub fn parse(key: &str, value: &str) -> Result<Self> {
        let value = value.to_string();
        let invalid = |message: String| {
            Box::new(Error::InvalidValue {
                key: key.to_string(),
                message,
            })
        };
        let edit = match key {
            "application_name" => FieldEdit::ApplicationName(value),
            "database_kind" => FieldEdit::DatabaseKind(value.parse::<DatabaseKind>().map_err(invalid)?),
            "domain.topic" => FieldEdit::DomainTopic(value),
            "domain.group_id" => FieldEdit::DomainGroupId(value),
            "domain.bootstrap_servers" => FieldEdit::DomainBootstrapServers(value),
            "interface.topic" => FieldEdit::InterfaceTopic(value),
            "interface.bootstrap_servers" => FieldEdit::InterfaceBootstrapServers(value),
            "database.strategy" => FieldEdit::Strategy(value.parse::<Strategy>().map_err(invalid)?),
            "database.uri" => FieldEdit::DatabaseUri(value),
            "database.name" => FieldEdit::DatabaseName(value),
            "server.port" => FieldEdit::ServerPort(value),
            _ => {
                return Err(Box::new(Error::UnknownKey {
                    key: key.to_string(),
                }));
            }
        };
        Ok(edit)
    }
}

/// One editing session over an immutable configuration value.
///
/// The touched flag lives in `database.name_touched`, so it survives a
/// save and reload of evadapt.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    config: Configuration,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::from_config(Configuration::default())
    }

    /// Resume editing a loaded configuration.
    ///
    /// A saved `name_touched` flag is taken as is. Without one, the name
    /// counts as touched only when it is non-blank and differs from the
    /// application name.
    pub fn from_config(mut config: Configuration) -> Self {
        if config.database.name_touched.is_none() {
            let name = config.database.name.trim();
            let touched = !name.is_empty() && name != config.application_name.trim();
            config.database.name_touched = Some(touched);
        }
        Self { config }
    }

    /// The current configuration snapshot.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Consume the session, keeping the final configuration.
    pub fn into_config(self) -> Configuration {
        self.config
    }

    /// Whether `database.name` has been set directly.
    pub fn is_database_name_touched(&self) -> bool {
        self.config.database.name_touched.unwrap_or(false)
    }

    /// Apply one edit and return the resulting session.
    #[must_use]
    pub fn apply(&self, edit: FieldEdit) -> Self {
        let mut config = self.config.clone();

        match edit {
            FieldEdit::ApplicationName(name) => {
                if !self.is_database_name_touched() {
                    config.database.name = name.clone();
                }
                config.application_name = name;
            }
            FieldEdit::DatabaseKind(kind) => config.database_kind = kind,
            FieldEdit::DomainTopic(topic) => config.domain.topic = topic,
            FieldEdit::DomainGroupId(group_id) => config.domain.group_id = group_id,
            FieldEdit::DomainBootstrapServers(servers) => config.domain.bootstrap_servers = servers,
            FieldEdit::InterfaceTopic(topic) => config.interface.topic = topic,
            FieldEdit::InterfaceBootstrapServers(servers) => {
                config.interface.bootstrap_servers = servers;
            }
            FieldEdit::Strategy(strategy) => config.database.strategy = strategy,
            FieldEdit::DatabaseUri(uri) => config.database.uri = uri,
            FieldEdit::DatabaseName(name) => {
                config.database.name = name;
                config.database.name_touched = Some(true);
            }
            FieldEdit::ServerPort(port) => config.server.port = port,
        }

        Self { config }
    }

    /// Apply a sequence of edits in order.
    #[must_use]
    pub fn apply_all(&self, edits: impl IntoIterator<Item = FieldEdit>) -> Self {
        edits
            .into_iter()
            .fold(self.clone(), |session, edit| session.apply(edit))
    }
}
