use evadapt_core::GeneratedFile;

use crate::TemplateContext;

/// Spring Boot entry point, a fixed bootstrap skeleton.
pub struct MainApplication<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> MainApplication<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for MainApplication<'_> {
    fn path(&self) -> String {
        let ids = self.ctx.ids;
        format!("{}/{}.java", ids.package_dir, ids.application_class)
    }

    fn render(&self) -> String {
        let ids = self.ctx.ids;
        format!(
            r#"package {package};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {class} {{

    public static void main(String[] args) {{
        SpringApplication.run({class}.class, args);
    }}
}}
"#,
            package = ids.package,
            class = ids.application_class,
        )
    }
}

#[cfg(test)]
mod tests {
    use evadapt_manifest::Configuration;

    use super::*;
    use crate::Identifiers;

    #[test]
    fn test_render() {
        let config = Configuration {
            application_name: "payment-orchestrator".into(),
            ..Default::default()
        };
        let ids = Identifiers::derive(&config);
        let file = MainApplication::new(TemplateContext::new(&config, &ids));

        assert_eq!(
            file.path(),
            "src/main/java/com/orchestrator/example/paymentorchestrator/paymentorchestratorOrchestratorApplication.java"
        );
        insta::assert_snapshot!(file.render(), @r"
        package com.orchestrator.example.paymentorchestrator;

        import org.springframework.boot.SpringApplication;
        import org.springframework.boot.autoconfigure.SpringBootApplication;

        @SpringBootApplication
        public class paymentorchestratorOrchestratorApplication {

            public static void main(String[] args) {
                SpringApplication.run(paymentorchestratorOrchestratorApplication.class, args);
            }
        }
        ");
    }
}
