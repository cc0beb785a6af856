//! Stage table of the shared pipeline step library (`vars/sdlc2Map.groovy`).
//!
//! The groovy script is rendered from this table, so looking a stage up here
//! and calling the generated step with the same name always agree.

use thiserror::Error;

/// Lookup of a stage key that is not in the table.
///
/// There is no fallback stage: the caller has to fix the name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stage: {stage}")]
pub struct UnknownStage {
    pub stage: String,
}

/// One stage of the shared pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    /// Key used to invoke the stage (`build`, `test`, ...)
    pub key: &'static str,
    /// Display name echoed by the pipeline
    pub name: &'static str,
    /// Shell commands run in order
    pub steps: Vec<String>,
}

/// The fixed set of pipeline stages for one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTable {
    stages: Vec<Stage>,
}

impl StageTable {
    /// Stage keys in table order.
    pub const KEYS: [&'static str; 4] = ["build", "test", "quality", "deploy"];

    /// Stage run when the step is called without an argument.
    pub const DEFAULT_STAGE: &'static str = "build";

    /// Build the table; only the deploy stage depends on the artifact id.
    pub fn for_artifact(artifact_id: &str) -> Self {
        let stages = vec![
            Stage {
                key: "build",
                name: "Build",
                steps: steps(&["mvn clean compile", "mvn package -DskipTests"]),
            },
            Stage {
                key: "test",
                name: "Test",
                steps: steps(&["mvn test", "mvn jacoco:report"]),
            },
            Stage {
                key: "quality",
                name: "Quality Check",
                steps: steps(&["mvn sonar:sonar"]),
            },
            Stage {
                key: "deploy",
                name: "Deploy",
                steps: vec![
                    format!("docker build -t {}:latest .", artifact_id),
                    "kubectl apply -f deploy/manifest.yaml".to_string(),
                ],
            },
        ];
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Find a stage by key.
    pub fn lookup(&self, stage: &str) -> Result<&Stage, UnknownStage> {
        self.stages
            .iter()
            .find(|s| s.key == stage)
            .ok_or_else(|| UnknownStage {
                stage: stage.to_string(),
            })
    }
}

fn steps(commands: &[&str]) -> Vec<String> {
    commands.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_table_order() {
        let table = StageTable::for_artifact("orders");
        let keys: Vec<_> = table.stages().iter().map(|s| s.key).collect();
        assert_eq!(keys, StageTable::KEYS);
    }

    #[test]
    fn test_lookup_known_stage() {
        let table = StageTable::for_artifact("orders");
        let quality = table.lookup("quality").unwrap();

        assert_eq!(quality.name, "Quality Check");
        assert_eq!(quality.steps, vec!["mvn sonar:sonar"]);
    }

    #[test]
    fn test_deploy_stage_uses_artifact_id() {
        let table = StageTable::for_artifact("payment-orchestrator");
        let deploy = table.lookup("deploy").unwrap();

        assert_eq!(
            deploy.steps[0],
            "docker build -t payment-orchestrator:latest ."
        );
    }

    #[test]
    fn test_unknown_stage_has_no_fallback() {
        let table = StageTable::for_artifact("orders");
        let err = table.lookup("release").unwrap_err();

        assert_eq!(err.stage, "release");
        assert_eq!(err.to_string(), "unknown stage: release");
        // keys are case-sensitive
        assert!(table.lookup("Build").is_err());
    }

    #[test]
    fn test_default_stage_exists() {
        let table = StageTable::for_artifact("orders");
        assert!(table.lookup(StageTable::DEFAULT_STAGE).is_ok());
    }
}
