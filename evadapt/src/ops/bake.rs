//! Bake operation - write the project as a file tree.

use std::path::Path;

use evadapt_codegen::Generator;
use evadapt_manifest::Configuration;

use crate::reports::{BakeReport, BakeResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Root directory of the generated project.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
pub fn bake(config: &Configuration, opts: BakeOptions) -> BakeReport {
    let generator = Generator::new(config);

    let result = if opts.dry_run {
        generator.preview().map(|files| BakeResult::Preview { files })
    } else {
        generator
            .generate(opts.output_dir)
            .map(|stats| BakeResult::Written {
                output_dir: opts.output_dir.to_path_buf(),
                stats,
            })
    };

    let result = result.unwrap_or_else(|e| {
        tracing::error!(error = %e, "directory sink failed");
        BakeResult::Failed {
            message: format!("{:#}", e),
        }
    });

    BakeReport {
        application_name: config.application_name.clone(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = bake(
            &Configuration::default(),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: true,
            },
        );

        match report.result {
            BakeResult::Preview { files } => assert_eq!(files.len(), 13),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_bake_writes_tree() {
        let temp = TempDir::new().unwrap();
        let config = Configuration {
            application_name: "ledger".into(),
            ..Default::default()
        };
        let report = bake(
            &config,
            BakeOptions {
                output_dir: temp.path(),
                dry_run: false,
            },
        );

        assert!(report.is_success());
        assert!(temp.path().join("pom.xml").is_file());
        assert!(temp.path().join("configMap").is_dir());
    }
}
