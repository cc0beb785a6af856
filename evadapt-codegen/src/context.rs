use evadapt_manifest::Configuration;

use crate::Identifiers;

/// Inputs shared by every template: the configuration and the identifiers
/// derived from it.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub config: &'a Configuration,
    pub ids: &'a Identifiers,
}

impl<'a> TemplateContext<'a> {
    pub fn new(config: &'a Configuration, ids: &'a Identifiers) -> Self {
        Self { config, ids }
    }

    /// `MongoDB` or `PostgreSQL`, for prose only.
    pub fn database_label(&self) -> &'static str {
        self.config.database_kind.label()
    }
}
