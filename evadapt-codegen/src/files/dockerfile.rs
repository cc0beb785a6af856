use evadapt_core::GeneratedFile;

use crate::{TemplateContext, project::PROJECT_VERSION};

/// Container image build for the packaged jar.
pub struct Dockerfile<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> Dockerfile<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for Dockerfile<'_> {
    fn path(&self) -> String {
        "Dockerfile".to_string()
    }

    fn render(&self) -> String {
        format!(
            r#"FROM openjdk:21-jdk-slim

WORKDIR /app

# Copy the JAR file
COPY target/{jar} app.jar

# Copy configuration files
COPY config.yaml ./config/
COPY deploy/manifest.yaml ./deploy/

# Expose port
EXPOSE 8080

# Health check
HEALTHCHECK --interval=30s --timeout=3s --start-period=5s --retries=3 \
  CMD curl -f http://localhost:8080/actuator/health || exit 1

# Run the application
ENTRYPOINT ["java", "-jar", "app.jar"]
"#,
            jar = self.ctx.ids.jar_name(PROJECT_VERSION),
        )
    }
}

#[cfg(test)]
mod tests {
    use evadapt_manifest::Configuration;

    use super::*;
    use crate::Identifiers;

    #[test]
    fn test_copies_built_jar() {
        let config = Configuration {
            application_name: "payment-orchestrator".into(),
            ..Default::default()
        };
        let ids = Identifiers::derive(&config);
        let dockerfile = Dockerfile::new(TemplateContext::new(&config, &ids)).render();

        assert!(dockerfile.contains("COPY target/payment-orchestrator-1.0.0.jar app.jar\n"));
        assert!(dockerfile.contains("COPY config.yaml ./config/\n"));
        assert!(dockerfile.contains("COPY deploy/manifest.yaml ./deploy/\n"));
        assert!(dockerfile.contains("--retries=3 \\\n  CMD curl -f http://localhost:8080/actuator/health || exit 1\n"));
        assert!(dockerfile.ends_with("ENTRYPOINT [\"java\", \"-jar\", \"app.jar\"]\n"));
    }
}
