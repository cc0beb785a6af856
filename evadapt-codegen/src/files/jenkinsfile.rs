use evadapt_core::GeneratedFile;

use crate::TemplateContext;

/// Declarative CI pipeline.
pub struct Jenkinsfile<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> Jenkinsfile<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for Jenkinsfile<'_> {
    fn path(&self) -> String {
        "Jenkinsfile".to_string()
    }

    fn render(&self) -> String {
        format!(
            r#"pipeline {{
    agent any

    environment {{
        APPLICATION_NAME = '{name}'
        ARTIFACT_ID = '{aid}'
        DOCKER_IMAGE = '{aid}:latest'
    }}

    stages {{
        stage('Checkout') {{
            steps {{
                checkout scm
            }}
        }}

        stage('Build') {{
            steps {{
                sh 'mvn clean compile'
            }}
        }}

        stage('Test') {{
            steps {{
                sh 'mvn test'
            }}
        }}

        stage('SonarQube Analysis') {{
            steps {{
                withSonarQubeEnv('SonarQube') {{
                    sh 'mvn sonar:sonar'
                }}
            }}
        }}

        stage('Package') {{
            steps {{
                sh 'mvn package -DskipTests'
            }}
        }}

        stage('Docker Build') {{
            steps {{
                script {{
                    docker.build(DOCKER_IMAGE)
                }}
            }}
        }}

        stage('Deploy to Kubernetes') {{
            steps {{
                sh 'kubectl apply -f deploy/manifest.yaml'
            }}
        }}
    }}

    post {{
        always {{
            cleanWs()
        }}
    }}
}}
"#,
            name = self.ctx.config.application_name,
            aid = self.ctx.ids.artifact_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use evadapt_manifest::Configuration;

    use super::*;
    use crate::Identifiers;

    #[test]
    fn test_environment_and_stages() {
        let config = Configuration {
            application_name: "Order Sync".into(),
            ..Default::default()
        };
        let ids = Identifiers::derive(&config);
        let pipeline = Jenkinsfile::new(TemplateContext::new(&config, &ids)).render();

        assert!(pipeline.contains("APPLICATION_NAME = 'Order Sync'"));
        assert!(pipeline.contains("ARTIFACT_ID = 'order-sync'"));
        assert!(pipeline.contains("DOCKER_IMAGE = 'order-sync:latest'"));

        let stages: Vec<_> = pipeline
            .lines()
            .filter_map(|line| line.trim().strip_prefix("stage('"))
            .filter_map(|rest| rest.split('\'').next())
            .collect();
        assert_eq!(
            stages,
            [
                "Checkout",
                "Build",
                "Test",
                "SonarQube Analysis",
                "Package",
                "Docker Build",
                "Deploy to Kubernetes",
            ]
        );
    }
}
