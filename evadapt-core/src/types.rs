//! Enumerations the template catalog branches on.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Database backend of the generated orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// MongoDB, configured through a connection uri plus a database name
    #[default]
    Mongo,
    /// PostgreSQL, configured through a JDBC url and JPA schema management
    Postgres,
}

impl DatabaseKind {
    /// Every supported backend, in display order.
    pub const ALL: [DatabaseKind; 2] = [DatabaseKind::Mongo, DatabaseKind::Postgres];

    /// Identifier used inside generated artifacts (e.g. `orchestrator-mongo-adapter`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Mongo => "mongo",
            DatabaseKind::Postgres => "postgres",
        }
    }

    /// Human-readable product name. Only used for prose, never for branching.
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseKind::Mongo => "MongoDB",
            DatabaseKind::Postgres => "PostgreSQL",
        }
    }

    /// Example connection string shown when prompting for `database.uri`.
    pub fn uri_placeholder(&self) -> &'static str {
        match self {
            DatabaseKind::Mongo => "mongodb://localhost:27017/payment-orchestrator",
            DatabaseKind::Postgres => "jdbc:postgresql://localhost:5432/payment_orchestrator",
        }
    }

    /// Example database name shown when prompting for `database.name`.
    pub fn name_placeholder(&self) -> &'static str {
        match self {
            DatabaseKind::Mongo => "payment-orchestrator",
            DatabaseKind::Postgres => "payment_orchestrator",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(DatabaseKind::Mongo),
            "postgres" | "postgresql" => Ok(DatabaseKind::Postgres),
            _ => Err(format!(
                "unknown database kind '{}', expected 'mongo' or 'postgres'",
                s
            )),
        }
    }
}

/// Persistence strategy the orchestrator runtime applies to messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    /// Transactional outbox
    #[default]
    AtomicOutbox,
    /// Defensive persistence with a full audit trail
    AuditPersist,
    /// Persist on failure only
    FailSafe,
}

impl Strategy {
    /// Every strategy, in display order.
    pub const ALL: [Strategy; 3] = [
        Strategy::AtomicOutbox,
        Strategy::AuditPersist,
        Strategy::FailSafe,
    ];

    /// The flat enum value written into generated configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::AtomicOutbox => "ATOMIC_OUTBOX",
            Strategy::AuditPersist => "AUDIT_PERSIST",
            Strategy::FailSafe => "FAIL_SAFE",
        }
    }

    /// Short product name of the pattern.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::AtomicOutbox => "AtomicOutbox",
            Strategy::AuditPersist => "DualPersist",
            Strategy::FailSafe => "FailSafe",
        }
    }

    /// Multi-line explanation of what the runtime does under this strategy.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::AtomicOutbox => {
                "TRANSACTIONAL OUTBOX PATTERN\n\n\
                 - Receive messages in batches\n\
                 - Bulk insert into database\n\
                 - Commit to Kafka within same transaction\n\
                 - Transform and send asynchronously\n\
                 - Update DB with success status\n\n\
                 Best for: High consistency requirements"
            }
            Strategy::AuditPersist => {
                "DEFENSIVE PERSISTENCE PATTERN\n\n\
                 - Receive, transform, and send immediately\n\
                 - On SUCCESS: Async save (source + transformed)\n\
                 - On FAILURE: Sync save (source + error details)\n\
                 - Complete audit trail maintained\n\n\
                 Best for: Audit and compliance requirements"
            }
            Strategy::FailSafe => {
                "FAILURE-ONLY PERSISTENCE PATTERN\n\n\
                 - Receive message and transform\n\
                 - Send to Kafka immediately\n\
                 - Persist ONLY on failures\n\
                 - Minimal database overhead\n\n\
                 Best for: High performance, low storage"
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "ATOMIC_OUTBOX" => Ok(Strategy::AtomicOutbox),
            "AUDIT_PERSIST" => Ok(Strategy::AuditPersist),
            "FAIL_SAFE" => Ok(Strategy::FailSafe),
            _ => Err(format!(
                "unknown strategy '{}', expected one of ATOMIC_OUTBOX, AUDIT_PERSIST, FAIL_SAFE",
                s
            )),
        }
    }
}
