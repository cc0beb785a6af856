use evadapt_core::{DatabaseKind, GeneratedFile};

use crate::TemplateContext;

/// Spring runtime configuration under `src/main/resources`
pub struct ApplicationYml<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> ApplicationYml<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }

    /// The `spring.data` block; its shape depends on the backend.
    fn data_section(&self) -> String {
        let database = &self.ctx.config.database;
        match self.ctx.config.database_kind {
            DatabaseKind::Mongo => format!(
                "    mongodb:\n      uri: {}\n      database: {}\n",
                database.uri, database.name
            ),
            DatabaseKind::Postgres => format!(
                "    jpa:\n      url: {}\n      hibernate:\n        ddl-auto: update\n      show-sql: true\n",
                database.uri
            ),
        }
    }
}

impl GeneratedFile for ApplicationYml<'_> {
    fn path(&self) -> String {
        "src/main/resources/application.yml".to_string()
    }

    fn render(&self) -> String {
        let config = self.ctx.config;
        format!(
            "orchestrator:
  consumer:
    topic: {consumer_topic}
    group-id: {group_id}
    bootstrap-servers: {consumer_servers}
  producer:
    topic: {producer_topic}
    bootstrap-servers: {producer_servers}
  database:
    strategy: {strategy}
spring:
  data:
{data}  application:
    name: {name}
  server:
    port: {port}
",
            consumer_topic = config.domain.topic,
            group_id = config.domain.group_id,
            consumer_servers = config.domain.bootstrap_servers,
            producer_topic = config.interface.topic,
            producer_servers = config.interface.bootstrap_servers,
            strategy = config.database.strategy,
            data = self.data_section(),
            name = config.application_name,
            port = config.server.port,
        )
    }
}

#[cfg(test)]
mod tests {
    use evadapt_core::Strategy;
    use evadapt_manifest::Configuration;

    use super::*;
    use crate::Identifiers;

    fn render(config: &Configuration) -> String {
        let ids = Identifiers::derive(config);
        ApplicationYml::new(TemplateContext::new(config, &ids)).render()
    }

    #[test]
    fn test_mongo_shape() {
        let mut config = Configuration::default();
        config.database.uri = "mongodb://localhost:27017/orders".into();
        config.database.name = "orders".into();
        let yml = render(&config);

        assert!(yml.contains("    mongodb:\n      uri: mongodb://localhost:27017/orders\n      database: orders\n"));
        assert!(!yml.contains("jpa:"));
        assert!(!yml.contains("ddl-auto"));
    }

    #[test]
    fn test_postgres_shape() {
        let mut config = Configuration {
            database_kind: DatabaseKind::Postgres,
            ..Default::default()
        };
        config.database.uri = "jdbc:postgresql://localhost:5432/pay".into();
        config.database.name = "pay".into();
        config.database.strategy = Strategy::FailSafe;
        let yml = render(&config);

        assert!(yml.contains("    jpa:\n      url: jdbc:postgresql://localhost:5432/pay\n"));
        assert!(yml.contains("ddl-auto: update"));
        assert!(yml.contains("show-sql: true"));
        assert!(yml.contains("    strategy: FAIL_SAFE\n"));
        assert!(!yml.contains("mongodb:"));
        // the database name is not part of the JPA block
        assert!(!yml.contains("database: pay"));
    }

    #[test]
    fn test_empty_fields_render_as_empty_segments() {
        let yml = render(&Configuration::default());

        assert!(yml.contains("    topic: \n"));
        assert!(yml.contains("    group-id: \n"));
        assert!(yml.contains("    name: \n"));
        assert!(yml.ends_with("    port: 8080\n"));
    }
}
