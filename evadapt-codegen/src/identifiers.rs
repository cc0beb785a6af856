//! Identifiers derived once per assembly and shared by every template.

use evadapt_core::{to_artifact_id, to_class_name, to_package_segment};
use evadapt_manifest::Configuration;

use crate::project::{BASE_PACKAGE, SOURCE_ROOT};

/// Role of a generated class; the role word becomes the class name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRole {
    OrchestratorApplication,
    MessageTransformer,
    FunctionalTest,
}

impl ClassRole {
    pub fn suffix(&self) -> &'static str {
        match self {
            ClassRole::OrchestratorApplication => "OrchestratorApplication",
            ClassRole::MessageTransformer => "MessageTransformer",
            ClassRole::FunctionalTest => "FunctionalTest",
        }
    }
}

/// Names computed from a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifiers {
    /// Build artifact id, also used for image names and Kubernetes objects
    pub artifact_id: String,
    /// `artifact_id` without dashes, the last segment of the Java package
    pub package_segment: String,
    /// Fully qualified Java package of the application
    pub package: String,
    /// Source directory of `package`, `/`-separated
    pub package_dir: String,
    /// `<Name>OrchestratorApplication`
    pub application_class: String,
    /// `<Name>MessageTransformer`
    pub transformer_class: String,
    /// `<Name>FunctionalTest`
    pub functional_test_class: String,
    /// Lowercased application name, stamped on transformed messages
    pub processor_tag: String,
}

impl Identifiers {
    /// Derive every identifier from the application name.
    pub fn derive(config: &Configuration) -> Self {
        let name = &config.application_name;
        let artifact_id = to_artifact_id(name);
        let package_segment = to_package_segment(&artifact_id);

        Self {
            package: package(&package_segment),
            package_dir: package_dir(&package_segment),
            application_class: to_class_name(name, ClassRole::OrchestratorApplication.suffix()),
            transformer_class: to_class_name(name, ClassRole::MessageTransformer.suffix()),
            functional_test_class: to_class_name(name, ClassRole::FunctionalTest.suffix()),
            processor_tag: name.to_lowercase(),
            artifact_id,
            package_segment,
        }
    }

    /// Class name for an arbitrary role.
    pub fn class_name(&self, role: ClassRole) -> &str {
        match role {
            ClassRole::OrchestratorApplication => &self.application_class,
            ClassRole::MessageTransformer => &self.transformer_class,
            ClassRole::FunctionalTest => &self.functional_test_class,
        }
    }

    /// Fully qualified name of the Spring Boot main class.
    pub fn main_class(&self) -> String {
        format!("{}.{}", self.package, self.application_class)
    }

    /// Jar produced by the build descriptor.
    pub fn jar_name(&self, version: &str) -> String {
        format!("{}-{}.jar", self.artifact_id, version)
    }
}

/// An empty segment collapses to the base package instead of `example.`.
fn package(package_segment: &str) -> String {
    if package_segment.is_empty() {
        BASE_PACKAGE.to_string()
    } else {
        format!("{}.{}", BASE_PACKAGE, package_segment)
    }
}

/// Source directory of [`package`]; never `example//`.
fn package_dir(package_segment: &str) -> String {
    let base = format!("{}/{}", SOURCE_ROOT, BASE_PACKAGE.replace('.', "/"));
    if package_segment.is_empty() {
        base
    } else {
        format!("{}/{}", base, package_segment)
    }
}
