//! Completeness checks run before any generation.

use crate::{Configuration, Error, Result};

/// A field that must be non-blank before a bundle can be generated.
///
/// Bootstrap servers, server port, database kind and strategy are never
/// required: they always carry working defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    ApplicationName,
    DomainTopic,
    DomainGroupId,
    InterfaceTopic,
    DatabaseUri,
    DatabaseName,
}

impl RequiredField {
    /// Every required field, in form order.
    pub const ALL: [RequiredField; 6] = [
        RequiredField::ApplicationName,
        RequiredField::DomainTopic,
        RequiredField::DomainGroupId,
        RequiredField::InterfaceTopic,
        RequiredField::DatabaseUri,
        RequiredField::DatabaseName,
    ];

    /// Dotted key of the field in evadapt.toml.
    pub fn key(&self) -> &'static str {
        match self {
            RequiredField::ApplicationName => "application_name",
            RequiredField::DomainTopic => "domain.topic",
            RequiredField::DomainGroupId => "domain.group_id",
            RequiredField::InterfaceTopic => "interface.topic",
            RequiredField::DatabaseUri => "database.uri",
            RequiredField::DatabaseName => "database.name",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::ApplicationName => "Application Name",
            RequiredField::DomainTopic => "Domain Topic",
            RequiredField::DomainGroupId => "Domain Group ID",
            RequiredField::InterfaceTopic => "Interface Topic",
            RequiredField::DatabaseUri => "Database URI",
            RequiredField::DatabaseName => "Database Name",
        }
    }

    fn value<'c>(&self, config: &'c Configuration) -> &'c str {
        match self {
            RequiredField::ApplicationName => &config.application_name,
            RequiredField::DomainTopic => &config.domain.topic,
            RequiredField::DomainGroupId => &config.domain.group_id,
            RequiredField::InterfaceTopic => &config.interface.topic,
            RequiredField::DatabaseUri => &config.database.uri,
            RequiredField::DatabaseName => &config.database.name,
        }
    }

    /// Whether the field is blank (empty or whitespace-only) in `config`.
    pub fn is_blank_in(&self, config: &Configuration) -> bool {
        self.value(config).trim().is_empty()
    }
}

/// Returns true when every required field is non-blank.
pub fn is_complete(config: &Configuration) -> bool {
    RequiredField::ALL
        .iter()
        .all(|field| !field.is_blank_in(config))
}

impl Configuration {
    /// Required fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| field.is_blank_in(self))
            .collect()
    }

    /// Whether generation may proceed.
    pub fn is_complete(&self) -> bool {
        is_complete(self)
    }

    /// Fail with a diagnostic listing every missing field.
    pub fn require_complete(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }

        Err(Box::new(Error::Incomplete {
            missing: missing.iter().map(|f| f.key().to_string()).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Configuration {
        let mut config = Configuration {
            application_name: "payment-orchestrator".to_string(),
            ..Default::default()
        };
        config.domain.topic = "pay-in".to_string();
        config.domain.group_id = "pay-grp".to_string();
        config.interface.topic = "pay-out".to_string();
        config.database.uri = "mongodb://localhost:27017/pay".to_string();
        config.database.name = "pay".to_string();
        config
    }

    #[test]
    fn test_complete_configuration() {
        let config = complete();
        assert!(is_complete(&config));
        assert!(config.missing_fields().is_empty());
        assert!(config.require_complete().is_ok());
    }

    #[test]
    fn test_default_configuration_is_incomplete() {
        let config = Configuration::default();
        assert!(!config.is_complete());
        assert_eq!(config.missing_fields(), RequiredField::ALL.to_vec());
    }

    #[test]
    fn test_each_required_field_blocks_generation() {
        for field in RequiredField::ALL {
            for blank in ["", "   ", "\t\n"] {
                let mut config = complete();
                match field {
                    RequiredField::ApplicationName => config.application_name = blank.into(),
                    RequiredField::DomainTopic => config.domain.topic = blank.into(),
                    RequiredField::DomainGroupId => config.domain.group_id = blank.into(),
                    RequiredField::InterfaceTopic => config.interface.topic = blank.into(),
                    RequiredField::DatabaseUri => config.database.uri = blank.into(),
                    RequiredField::DatabaseName => config.database.name = blank.into(),
                }

                assert!(!is_complete(&config), "{} = {:?}", field.key(), blank);
                assert_eq!(config.missing_fields(), vec![field]);
            }
        }
    }

    #[test]
    fn test_optional_fields_never_required() {
        let mut config = complete();
        config.domain.bootstrap_servers.clear();
        config.interface.bootstrap_servers = "  ".to_string();
        config.server.port.clear();

        assert!(is_complete(&config));
    }

    #[test]
    fn test_require_complete_lists_missing_keys() {
        let mut config = complete();
        config.domain.topic.clear();
        config.database.name = " ".to_string();

        let err = config.require_complete().unwrap_err();
        match *err {
            Error::Incomplete { missing } => {
                assert_eq!(missing, vec!["domain.topic", "database.name"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
