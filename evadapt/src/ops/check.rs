//! Check operation - configuration validation.

use std::path::Path;

use evadapt_manifest::Configuration;

use crate::reports::CheckReport;

/// Execute the check operation.
pub fn check(config: &Configuration, config_path: &Path) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        application_name: config.application_name.clone(),
        missing: config.missing_fields(),
    }
}

#[cfg(test)]
mod tests {
    use evadapt_manifest::RequiredField;

    use super::*;

    #[test]
    fn test_check_default_configuration() {
        let report = check(&Configuration::default(), Path::new("evadapt.toml"));

        assert!(!report.is_complete());
        assert_eq!(report.missing, RequiredField::ALL);
    }

    #[test]
    fn test_check_whitespace_counts_as_missing() {
        let mut config = Configuration::default();
        config.application_name = "orders".into();
        config.domain.topic = "in".into();
        config.domain.group_id = "grp".into();
        config.interface.topic = "out".into();
        config.database.uri = "mongodb://localhost:27017/orders".into();
        config.database.name = "   ".into();

        let report = check(&config, Path::new("evadapt.toml"));

        assert_eq!(report.missing, [RequiredField::DatabaseName]);
    }
}
