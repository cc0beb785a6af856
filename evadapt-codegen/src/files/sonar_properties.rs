use evadapt_core::GeneratedFile;

use crate::{
    TemplateContext,
    project::{JAVA_VERSION, PROJECT_VERSION},
};

/// SonarQube project properties.
pub struct SonarProperties<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> SonarProperties<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for SonarProperties<'_> {
    fn path(&self) -> String {
        "sonar-project.properties".to_string()
    }

    fn render(&self) -> String {
        format!(
            "# SonarQube configuration for {name}
sonar.projectKey={aid}
sonar.projectName={name}
sonar.projectVersion={version}

# Source code location
sonar.sources=src/main/java
sonar.tests=src/test/java

# Java version
sonar.java.source={java}

# Coverage reports
sonar.coverage.jacoco.xmlReportPaths=target/site/jacoco/jacoco.xml

# Exclude patterns
sonar.exclusions=**/generated/**,**/target/**,**/test/**

# Quality Gate
sonar.qualitygate.wait=true
",
            name = self.ctx.config.application_name,
            aid = self.ctx.ids.artifact_id,
            version = PROJECT_VERSION,
            java = JAVA_VERSION,
        )
    }
}

#[cfg(test)]
mod tests {
    use evadapt_manifest::Configuration;

    use super::*;
    use crate::Identifiers;

    #[test]
    fn test_project_identifiers() {
        let config = Configuration {
            application_name: "Order Sync".into(),
            ..Default::default()
        };
        let ids = Identifiers::derive(&config);
        let properties = SonarProperties::new(TemplateContext::new(&config, &ids)).render();

        assert!(properties.contains("\nsonar.projectKey=order-sync\n"));
        assert!(properties.contains("\nsonar.projectName=Order Sync\n"));
        assert!(properties.contains("\nsonar.java.source=21\n"));
        assert!(properties.ends_with("sonar.qualitygate.wait=true\n"));
    }
}
