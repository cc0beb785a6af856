//! Generate operation - zip archive of the project.

use std::path::Path;

use evadapt_codegen::Generator;
use evadapt_manifest::Configuration;

use crate::reports::{GenerateOutcome, GenerateReport};

/// Execute the generate operation.
///
/// Sink failures are caught here and turned into a failed outcome, so the
/// caller can report them and run the operation again.
pub fn generate(config: &Configuration, output_dir: &Path) -> GenerateReport {
    let generator = Generator::new(config);

    let outcome = match generator.write_archive(output_dir) {
        Ok((path, archive)) => GenerateOutcome::Saved {
            path,
            files: generator.bundle().len(),
            bytes: archive.bytes.len(),
        },
        Err(e) => {
            tracing::error!(error = %e, "archive sink failed");
            GenerateOutcome::Failed {
                message: format!("{:#}", e),
            }
        }
    };

    GenerateReport {
        application_name: config.application_name.clone(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use evadapt_manifest::Configuration;
    use tempfile::TempDir;

    use super::*;

    fn config() -> Configuration {
        let mut config = Configuration {
            application_name: "orders".into(),
            ..Default::default()
        };
        config.domain.topic = "in".into();
        config.domain.group_id = "grp".into();
        config.interface.topic = "out".into();
        config.database.uri = "mongodb://localhost:27017/orders".into();
        config.database.name = "orders".into();
        config
    }

    #[test]
    fn test_generate_saves_archive() {
        let temp = TempDir::new().unwrap();
        let report = generate(&config(), temp.path());

        assert!(report.is_success());
        assert!(temp.path().join("orders.zip").is_file());
    }

    #[test]
    fn test_generate_failure_can_be_retried() {
        let temp = TempDir::new().unwrap();
        let blocked = temp.path().join("taken");
        std::fs::write(&blocked, "").unwrap();

        let failed = generate(&config(), &blocked);
        match &failed.outcome {
            GenerateOutcome::Failed { message } => assert!(!message.is_empty()),
            other => panic!("unexpected outcome: {other:?}"),
        }

        let retried = generate(&config(), temp.path());
        assert!(retried.is_success());
    }
}
