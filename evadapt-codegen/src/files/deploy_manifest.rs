use evadapt_core::GeneratedFile;

use crate::TemplateContext;

/// Kubernetes ConfigMap and Deployment, both keyed by the artifact id.
pub struct DeployManifest<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> DeployManifest<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for DeployManifest<'_> {
    fn path(&self) -> String {
        "deploy/manifest.yaml".to_string()
    }

    fn render(&self) -> String {
        let config = self.ctx.config;
        format!(
            r#"apiVersion: v1
kind: ConfigMap
metadata:
  name: {aid}-config
  namespace: default
data:
  application.name: "{name}"
  kafka.bootstrap.servers: "{servers}"
  database.uri: "{uri}"

---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: {aid}-deployment
  namespace: default
spec:
  replicas: 1
  selector:
    matchLabels:
      app: {aid}
  template:
    metadata:
      labels:
        app: {aid}
    spec:
      containers:
      - name: {aid}
        image: {aid}:latest
        ports:
        - containerPort: 8080
        env:
        - name: SPRING_PROFILES_ACTIVE
          value: "kubernetes"
"#,
            aid = self.ctx.ids.artifact_id,
            name = config.application_name,
            servers = config.domain.bootstrap_servers,
            uri = config.database.uri,
        )
    }
}
