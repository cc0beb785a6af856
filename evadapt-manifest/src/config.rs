use evadapt_core::{DatabaseKind, Strategy};
use serde::{Deserialize, Serialize};

/// Default Kafka bootstrap servers for both messaging sides.
pub const DEFAULT_BOOTSTRAP_SERVERS: &str = "localhost:9092";

/// Default HTTP port of the generated service.
pub const DEFAULT_SERVER_PORT: &str = "8080";

/// Root configuration for evadapt.toml
///
/// Every field has a default so that a partially filled file still parses;
/// completeness is checked separately by [`Configuration::missing_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Free-form application name, the source of every derived identifier
    pub application_name: String,

    /// Database backend the generated project targets
    pub database_kind: DatabaseKind,

    /// Inbound messaging side (consumer)
    pub domain: DomainSide,

    /// Outbound messaging side (producer)
    pub interface: InterfaceSide,

    /// Persistence settings
    pub database: DatabaseSettings,

    /// HTTP server settings
    pub server: ServerSettings,
}

/// Consumer side of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomainSide {
    pub topic: String,
    pub group_id: String,
    pub bootstrap_servers: String,
}

impl Default for DomainSide {
    fn default() -> Self {
        Self {
            topic: String::new(),
            group_id: String::new(),
            bootstrap_servers: DEFAULT_BOOTSTRAP_SERVERS.to_string(),
        }
    }
}

/// Producer side of the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterfaceSide {
    pub topic: String,
    pub bootstrap_servers: String,
}

impl Default for InterfaceSide {
    fn default() -> Self {
        Self {
            topic: String::new(),
            bootstrap_servers: DEFAULT_BOOTSTRAP_SERVERS.to_string(),
        }
    }
}

/// Database connection and persistence strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSettings {
    pub strategy: Strategy,
    pub uri: String,
    pub name: String,

    /// Whether `name` was set directly instead of following `application_name`
    ///
    /// Missing from hand-written files; [`EditSession::from_config`](crate::EditSession::from_config)
    /// fills it in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_touched: Option<bool>,
}

/// HTTP server settings.
///
/// The port is kept as text: it is only ever interpolated into generated files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub port: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT.to_string(),
        }
    }
}
