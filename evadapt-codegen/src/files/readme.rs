use evadapt_core::GeneratedFile;

use crate::{
    TemplateContext,
    project::{ADAPTER_VERSION, CORE_ADAPTER, JAVA_VERSION, SPRING_BOOT_VERSION},
};

/// Project README restating the configuration.
pub struct Readme<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> Readme<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for Readme<'_> {
    fn path(&self) -> String {
        "README.md".to_string()
    }

    fn render(&self) -> String {
        let config = self.ctx.config;
        let kind = config.database_kind.as_str();
        let label = self.ctx.database_label();
        let strategy = config.database.strategy;

        format!(
            "# {name}

This is a generated orchestrator application using the {core} and orchestrator-{kind}-adapter.

## Features

- Kafka consumer and producer configuration
- {label} database integration
- Custom message transformation logic
- Spring Boot {boot} with Java {java}
- Database Strategy: {strategy}

## Configuration

The application is configured via `application.yml` with the following settings:

- **Domain Topic**: {domain_topic}
- **Interface Topic**: {interface_topic}
- **Database**: {label}
- **Database Strategy**: {strategy}

## Running the Application

1. Ensure you have Java {java} installed
2. Make sure Kafka is running on {servers}
3. Ensure {label} is running
4. Run: `mvn spring-boot:run`

## Customization

Edit the `{transformer}.java` file to implement your custom business logic for message transformation.

## Dependencies

- {core} ({adapter_version})
- orchestrator-{kind}-adapter ({adapter_version})
- Spring Boot {boot}
",
            name = config.application_name,
            core = CORE_ADAPTER,
            kind = kind,
            label = label,
            boot = SPRING_BOOT_VERSION,
            java = JAVA_VERSION,
            strategy = strategy,
            domain_topic = config.domain.topic,
            interface_topic = config.interface.topic,
            servers = config.domain.bootstrap_servers,
            transformer = self.ctx.ids.transformer_class,
            adapter_version = ADAPTER_VERSION,
        )
    }
}

#[cfg(test)]
mod tests {
    use evadapt_core::{DatabaseKind, Strategy};
    use evadapt_manifest::Configuration;

    use super::*;
    use crate::Identifiers;

    #[test]
    fn test_restates_configuration() {
        let mut config = Configuration {
            application_name: "Ledger Sync".into(),
            database_kind: DatabaseKind::Postgres,
            ..Default::default()
        };
        config.domain.topic = "ledger-in".into();
        config.interface.topic = "ledger-out".into();
        config.database.strategy = Strategy::AuditPersist;

        let ids = Identifiers::derive(&config);
        let readme = Readme::new(TemplateContext::new(&config, &ids)).render();

        assert!(readme.starts_with("# Ledger Sync\n"));
        assert!(readme.contains("- PostgreSQL database integration"));
        assert!(readme.contains("- **Domain Topic**: ledger-in"));
        assert!(readme.contains("- **Interface Topic**: ledger-out"));
        assert!(readme.contains("- Database Strategy: AUDIT_PERSIST"));
        assert!(readme.contains("Make sure Kafka is running on localhost:9092"));
        assert!(readme.contains("Edit the `LedgerSyncMessageTransformer.java` file"));
        assert!(readme.contains("- orchestrator-postgres-adapter (1.0.0)"));
    }
}
