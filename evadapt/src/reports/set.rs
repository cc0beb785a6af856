//! Set command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a single field edit.
#[derive(Debug)]
pub struct SetReport {
    pub config_path: PathBuf,
    pub key: String,
    pub value: String,
    /// `database.name` followed an application name change.
    pub database_name_synced: bool,
}

impl Report for SetReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "✓ {} = {:?} in {}",
            self.key,
            self.value,
            self.config_path.display()
        ));
        if self.database_name_synced {
            out.key_value_indented("database.name", &format!("{:?}", self.value));
        }
    }
}
