//! One [`GeneratedFile`](evadapt_core::GeneratedFile) per artifact of a project.

mod application_yml;
mod config_yaml;
mod deploy_manifest;
mod dockerfile;
mod jenkinsfile;
mod main_application;
mod message_transformer;
mod pom_xml;
mod readme;
mod sdlc_map;
mod settings_xml;
mod sonar_properties;

pub use application_yml::ApplicationYml;
pub use config_yaml::ConfigYaml;
pub use deploy_manifest::DeployManifest;
pub use dockerfile::Dockerfile;
pub use functional_test::FunctionalTest;
pub use jenkinsfile::Jenkinsfile;
pub use main_application::MainApplication;
pub use message_transformer::MessageTransformer;
pub use pom_xml::PomXml;
pub use readme::Readme;
pub use sdlc_map::SdlcMap;
pub use settings_xml::SettingsXml;
pub use sonar_properties::SonarProperties;
