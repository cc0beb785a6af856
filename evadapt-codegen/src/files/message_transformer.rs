use evadapt_core::{FileRules, GeneratedFile};

use crate::{TemplateContext, project::PROJECT_VERSION};

/// Placeholder message transformer the user replaces with business logic.
///
/// Written only if missing so edits survive regeneration into a directory.
pub struct MessageTransformer<'a> {
    ctx: TemplateContext<'a>,
}

impl<'a> MessageTransformer<'a> {
    pub fn new(ctx: TemplateContext<'a>) -> Self {
        Self { ctx }
    }
}

impl GeneratedFile for MessageTransformer<'_> {
    fn path(&self) -> String {
        let ids = self.ctx.ids;
        format!("{}/transformer/{}.java", ids.package_dir, ids.transformer_class)
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        let name = &self.ctx.config.application_name;
        let ids = self.ctx.ids;
        // The timestamp is read by the generated code at runtime, the text itself is fixed.
        format!(
            r#"package {package}.transformer;

import com.orchestrator.core.transformer.MessageTransformer;
import org.slf4j.Logger;
import org.slf4j.LoggerFactory;
import org.springframework.stereotype.Component;

@Component
public class {class} implements MessageTransformer {{

    private static final Logger logger = LoggerFactory.getLogger({class}.class);

    @Override
    public String transform(String input) {{
        logger.debug("Transforming {name} message: {{}}", input);

        // TODO: Implement your custom transformation logic here
        // This is a placeholder implementation - replace with your business logic

        String transformed = String.format("""
            {{
                "processed": true,
                "original_message": %s,
                "processed_at": %d,
                "processor": "{processor}",
                "version": "{version}",
                "metadata": {{
                    "custom_field": "custom_value",
                    "business_logic": "implement_here"
                }}
            }}
            """, input, System.currentTimeMillis());

        logger.debug("{name} transformation completed");
        return transformed;
    }}
}}
"#,
            package = ids.package,
            class = ids.transformer_class,
            name = name,
            processor = ids.processor_tag,
            version = PROJECT_VERSION,
        )
    }
}
