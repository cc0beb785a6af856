use evadapt_core::GeneratedFile;

use crate::{TemplateContext, project::PROJECT_VERSION};

/// Operational config, a flat mirror of `application.yml`.
pub struct ConfigYaml<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> ConfigYaml<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for ConfigYaml<'_> {
    fn path(&self) -> String {
        "config.yaml".to_string()
    }

    fn render(&self) -> String {
        let config = self.ctx.config;
        format!(
            r#"# Configuration for {name}
application:
  name: "{name}"
  version: "{version}"

database:
  type: "{kind}"
  uri: "{uri}"
  name: "{database}"
  strategy: "{strategy}"

kafka:
  consumer:
    topic: "{consumer_topic}"
    groupId: "{group_id}"
    bootstrapServers: "{consumer_servers}"
  producer:
    topic: "{producer_topic}"
    bootstrapServers: "{producer_servers}"

server:
  port: {port}
"#,
            name = config.application_name,
            version = PROJECT_VERSION,
            kind = config.database_kind,
            uri = config.database.uri,
            database = config.database.name,
            strategy = config.database.strategy,
            consumer_topic = config.domain.topic,
            group_id = config.domain.group_id,
            consumer_servers = config.domain.bootstrap_servers,
            producer_topic = config.interface.topic,
            producer_servers = config.interface.bootstrap_servers,
            port = config.server.port,
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
    fn test_restates_every_field() {
        let mut config = Configuration {
            application_name: "pay".into(),
            database_kind: DatabaseKind::Postgres,
            ..Default::default()
        };
        config.domain.topic = "pay-in".into();
        config.domain.group_id = "pay-grp".into();
        config.interface.topic = "pay-out".into();
        config.interface.bootstrap_servers = "broker:9093".into();
        config.database.strategy = Strategy::FailSafe;
        config.database.uri = "jdbc:postgresql://localhost:5432/pay".into();
        config.database.name = "pay".into();
        config.server.port = "9000".into();

        let ids = Identifiers::derive(&config);
        let yaml = ConfigYaml::new(TemplateContext::new(&config, &ids)).render();

        assert!(yaml.starts_with("# Configuration for pay\n"));
        assert!(yaml.contains("  type: \"postgres\"\n"));
        assert!(yaml.contains("  uri: \"jdbc:postgresql://localhost:5432/pay\"\n"));
        assert!(yaml.contains("  name: \"pay\"\n"));
        assert!(yaml.contains("  strategy: \"FAIL_SAFE\"\n"));
        assert!(yaml.contains("    groupId: \"pay-grp\"\n"));
        assert!(yaml.contains("    topic: \"pay-out\"\n    bootstrapServers: \"broker:9093\"\n"));
        assert!(yaml.ends_with("server:\n  port: 9000\n"));
    }
}
