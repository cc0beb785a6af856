//! Info command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Report data for project information.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub config_path: PathBuf,
    pub application_name: String,
    pub complete: bool,
    /// Dotted keys of blank required fields.
    pub missing: Vec<String>,
    pub identifiers: IdentifierInfo,
    pub database: DatabaseInfo,
    pub messaging: MessagingInfo,
    pub server_port: String,
    pub archive_name: String,
    /// Generated paths in preview order.
    pub files: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IdentifierInfo {
    pub artifact_id: String,
    pub package: String,
    pub main_class: String,
    pub transformer_class: String,
    pub functional_test_class: String,
}

#[derive(Debug, Serialize)]
pub struct DatabaseInfo {
    pub kind: String,
    pub label: String,
    pub uri: String,
    pub name: String,
    pub strategy: String,
    pub strategy_label: String,
    pub strategy_description: String,
}

#[derive(Debug, Serialize)]
pub struct MessagingInfo {
    pub consumer_topic: String,
    pub consumer_group_id: String,
    pub consumer_bootstrap_servers: String,
    pub producer_topic: String,
    pub producer_bootstrap_servers: String,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        let title = if self.application_name.is_empty() {
            "(unnamed application)"
        } else {
            self.application_name.as_str()
        };
        out.title(title);
        out.newline();

        out.key_value("Config", &self.config_path.display().to_string());
        if self.complete {
            out.key_value("Status", "complete");
        } else {
            out.key_value("Status", &format!("incomplete ({})", self.missing.join(", ")));
            out.warning("preview and generation are disabled until every required field is set");
        }
        out.newline();

        let ids = &self.identifiers;
        out.section("Identifiers");
        out.key_value_indented("artifact", &ids.artifact_id);
        out.key_value_indented("package", &ids.package);
        out.key_value_indented("main class", &ids.main_class);
        out.key_value_indented("transformer", &ids.transformer_class);
        out.key_value_indented("functional test", &ids.functional_test_class);
        out.newline();

        let db = &self.database;
        out.section("Database");
        out.key_value_indented("backend", &format!("{} ({})", db.label, db.kind));
        out.key_value_indented("uri", &db.uri);
        out.key_value_indented("name", &db.name);
        out.key_value_indented("strategy", &format!("{} ({})", db.strategy_label, db.strategy));
        for line in db.strategy_description.lines() {
            out.preformatted(&format!("    {}", line));
        }
        out.newline();

        let msg = &self.messaging;
        out.section("Messaging");
        out.key_value_indented(
            "consumer",
            &format!(
                "{} [{}] @ {}",
                msg.consumer_topic, msg.consumer_group_id, msg.consumer_bootstrap_servers
            ),
        );
        out.key_value_indented(
            "producer",
            &format!("{} @ {}", msg.producer_topic, msg.producer_bootstrap_servers),
        );
        out.key_value_indented("server port", &self.server_port);
        out.newline();

        out.section(&format!("Files ({}) in {}", self.files.len(), self.archive_name));
        for file in &self.files {
            out.list_item(file);
        }
    }
}
