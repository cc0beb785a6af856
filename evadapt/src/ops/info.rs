//! Info operation - derived names and output layout.

use std::path::Path;

use evadapt_codegen::assemble;
use evadapt_manifest::Configuration;

use crate::reports::{DatabaseInfo, IdentifierInfo, InfoReport, MessagingInfo};

/// Execute the info operation.
///
/// Works on incomplete configurations too; blank fields show up as blanks.
pub fn info(config: &Configuration, config_path: &Path) -> InfoReport {
    let bundle = assemble(config);
    let ids = bundle.identifiers();
    let strategy = config.database.strategy;

    InfoReport {
        config_path: std::fs::canonicalize(config_path)
            .unwrap_or_else(|_| config_path.to_path_buf()),
        application_name: config.application_name.clone(),
        complete: config.is_complete(),
        missing: config
            .missing_fields()
            .iter()
            .map(|field| field.key().to_string())
            .collect(),
        identifiers: IdentifierInfo {
            artifact_id: ids.artifact_id.clone(),
            package: ids.package.clone(),
            main_class: ids.main_class(),
            transformer_class: ids.transformer_class.clone(),
            functional_test_class: ids.functional_test_class.clone(),
        },
        database: DatabaseInfo {
            kind: config.database_kind.to_string(),
            label: config.database_kind.label().to_string(),
            uri: config.database.uri.clone(),
            name: config.database.name.clone(),
            strategy: strategy.to_string(),
            strategy_label: strategy.label().to_string(),
            strategy_description: strategy.description().to_string(),
        },
        messaging: MessagingInfo {
            consumer_topic: config.domain.topic.clone(),
            consumer_group_id: config.domain.group_id.clone(),
            consumer_bootstrap_servers: config.domain.bootstrap_servers.clone(),
            producer_topic: config.interface.topic.clone(),
            producer_bootstrap_servers: config.interface.bootstrap_servers.clone(),
        },
        server_port: config.server.port.clone(),
        archive_name: bundle.archive_name(),
        files: bundle.files().map(|(path, _)| path.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use evadapt_manifest::{DatabaseKind, Strategy};

    use super::*;

    #[test]
    fn test_info_for_postgres() {
        let mut config = Configuration {
            application_name: "payment-orchestrator".into(),
            database_kind: DatabaseKind::Postgres,
            ..Default::default()
        };
        config.database.strategy = Strategy::AuditPersist;

        let report = info(&config, Path::new("missing/evadapt.toml"));

        assert!(!report.complete);
        assert!(report.missing.contains(&"domain.topic".to_string()));
        assert_eq!(report.identifiers.artifact_id, "payment-orchestrator");
        assert_eq!(report.database.label, "PostgreSQL");
        assert_eq!(report.database.strategy, "AUDIT_PERSIST");
        assert_eq!(report.database.strategy_label, "DualPersist");
        assert_eq!(report.archive_name, "payment-orchestrator.zip");
        assert_eq!(report.files.len(), 13);
        assert_eq!(report.config_path, Path::new("missing/evadapt.toml"));
    }

    #[test]
    fn test_info_serializes_to_json() {
        let report = info(&Configuration::default(), Path::new("evadapt.toml"));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["database"]["kind"], "mongo");
        assert_eq!(json["server_port"], "8080");
        assert_eq!(json["files"][0], "pom.xml");
    }
}
