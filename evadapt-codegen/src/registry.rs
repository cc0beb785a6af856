//! The artifact catalog.
//!
//! Adding an artifact means adding a variant and its generator here; the
//! assembler, preview and sinks pick it up from [`ArtifactKind::CATALOG`].

use evadapt_core::GeneratedFile;

use crate::{
    TemplateContext,
    files::{
        ApplicationYml, ConfigYaml, DeployManifest, Dockerfile, FunctionalTest, Jenkinsfile,
        MainApplication, MessageTransformer, PomXml, Readme, SdlcMap, SettingsXml,
        SonarProperties,
    },
};

/// Every artifact of a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    BuildDescriptor,
    RuntimeConfig,
    MainApplication,
    MessageTransformer,
    Readme,
    DeployManifest,
    OperationalConfig,
    Dockerfile,
    FunctionalTest,
    Pipeline,
    MavenSettings,
    SonarProperties,
    PipelineLibrary,
}

impl ArtifactKind {
    /// All artifacts in preview order.
    pub const CATALOG: [ArtifactKind; 13] = [
        ArtifactKind::BuildDescriptor,
        ArtifactKind::RuntimeConfig,
        ArtifactKind::MainApplication,
        ArtifactKind::MessageTransformer,
        ArtifactKind::Readme,
        ArtifactKind::DeployManifest,
        ArtifactKind::OperationalConfig,
        ArtifactKind::Dockerfile,
        ArtifactKind::FunctionalTest,
        ArtifactKind::Pipeline,
        ArtifactKind::MavenSettings,
        ArtifactKind::SonarProperties,
        ArtifactKind::PipelineLibrary,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactKind::BuildDescriptor => "build descriptor",
            ArtifactKind::RuntimeConfig => "runtime configuration",
            ArtifactKind::MainApplication => "main application",
            ArtifactKind::MessageTransformer => "message transformer",
            ArtifactKind::Readme => "readme",
            ArtifactKind::DeployManifest => "deployment manifest",
            ArtifactKind::OperationalConfig => "operational config",
            ArtifactKind::Dockerfile => "container build file",
            ArtifactKind::FunctionalTest => "functional test",
            ArtifactKind::Pipeline => "pipeline definition",
            ArtifactKind::MavenSettings => "maven settings",
            ArtifactKind::SonarProperties => "static analysis properties",
            ArtifactKind::PipelineLibrary => "shared pipeline step",
        }
    }

    /// The generator for this artifact.
    pub fn file<'a>(&self, ctx: TemplateContext<'a>) -> Box<dyn GeneratedFile + 'a> {
        match self {
            ArtifactKind::BuildDescriptor => Box::new(PomXml::new(ctx)),
            ArtifactKind::RuntimeConfig => Box::new(ApplicationYml::new(ctx)),
            ArtifactKind::MainApplication => Box::new(MainApplication::new(ctx)),
            ArtifactKind::MessageTransformer => Box::new(MessageTransformer::new(ctx)),
            ArtifactKind::Readme => Box::new(Readme::new(ctx)),
            ArtifactKind::DeployManifest => Box::new(DeployManifest::new(ctx)),
            ArtifactKind::OperationalConfig => Box::new(ConfigYaml::new(ctx)),
            ArtifactKind::Dockerfile => Box::new(Dockerfile::new(ctx)),
            ArtifactKind::FunctionalTest => Box::new(FunctionalTest::new(ctx)),
            ArtifactKind::Pipeline => Box::new(Jenkinsfile::new(ctx)),
            ArtifactKind::MavenSettings => Box::new(SettingsXml),
            ArtifactKind::SonarProperties => Box::new(SonarProperties::new(ctx)),
            ArtifactKind::PipelineLibrary => Box::new(SdlcMap::new(ctx)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use evadapt_manifest::Configuration;

    use super::*;
    use crate::Identifiers;

    #[test]
    fn test_catalog_has_every_kind_once() {
        let unique: HashSet<_> = ArtifactKind::CATALOG.iter().collect();
        assert_eq!(unique.len(), ArtifactKind::CATALOG.len());
    }

    #[test]
    fn test_catalog_paths() {
        let config = Configuration {
            application_name: "pay".into(),
            ..Default::default()
        };
        let ids = Identifiers::derive(&config);
        let ctx = TemplateContext::new(&config, &ids);

        let paths: Vec<_> = ArtifactKind::CATALOG
            .iter()
            .map(|kind| kind.file(ctx).path())
            .collect();

        assert_eq!(
            paths,
            [
                "pom.xml",
                "src/main/resources/application.yml",
                "src/main/java/com/orchestrator/example/pay/payOrchestratorApplication.java",
                "src/main/java/com/orchestrator/example/pay/transformer/payMessageTransformer.java",
                "README.md",
                "deploy/manifest.yaml",
                "config.yaml",
                "Dockerfile",
                "functionalTest.groovy",
                "Jenkinsfile",
                "settings.xml",
                "sonar-project.properties",
                "vars/sdlc2Map.groovy",
            ]
        );
    }
}
