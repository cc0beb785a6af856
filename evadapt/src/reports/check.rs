//! Check command report data structures.

use std::path::PathBuf;

use evadapt_manifest::RequiredField;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Application name, possibly blank.
    pub application_name: String,
    /// Required fields that are still blank, in form order.
    pub missing: Vec<RequiredField>,
}

impl CheckReport {
    /// Whether preview and generation are allowed.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.is_complete() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.newline();
            out.key_value_indented("application", &self.application_name);
            return;
        }

        out.error(&format!(
            "error: {} is incomplete, preview and generation are disabled",
            self.config_path.display()
        ));
        out.newline();
        out.section(&format!("Missing fields ({})", self.missing.len()));
        for field in &self.missing {
            out.list_item(&format!("{} ({})", field.label(), field.key()));
        }
    }
}
