//! Fixed coordinates of every generated project.

use evadapt_core::DatabaseKind;

/// Maven group and root Java package of generated applications.
pub const BASE_PACKAGE: &str = "com.orchestrator.example";

/// Root of Java sources in the Maven layout.
pub const SOURCE_ROOT: &str = "src/main/java";

/// Version stamped on the generated artifact.
pub const PROJECT_VERSION: &str = "1.0.0";

pub const SPRING_BOOT_VERSION: &str = "3.3.5";

pub const JAVA_VERSION: &str = "21";

/// Group of the orchestrator runtime adapters.
pub const ADAPTER_GROUP_ID: &str = "com.orchestrator";

pub const ADAPTER_VERSION: &str = "1.0.0";

pub const CORE_ADAPTER: &str = "orchestrator-core-adapter";

/// Folders present in the archive even though nothing is generated into them.
pub const EMPTY_DIRECTORIES: &[&str] = &["configMap"];

/// Database adapter module for a backend, e.g. `orchestrator-postgres-adapter`.
pub fn database_adapter(kind: DatabaseKind) -> String {
    format!("orchestrator-{}-adapter", kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_adapter() {
        assert_eq!(
            database_adapter(DatabaseKind::Mongo),
            "orchestrator-mongo-adapter"
        );
        assert_eq!(
            database_adapter(DatabaseKind::Postgres),
            "orchestrator-postgres-adapter"
        );
    }
}
