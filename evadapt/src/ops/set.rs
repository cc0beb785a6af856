//! Set operation - edit one field of evadapt.toml.

use evadapt_manifest::{EditSession, EvadaptToml, FieldEdit, Result};

use crate::reports::SetReport;

/// Execute the set operation and save the file.
///
/// The whole configuration is replaced; `database.name` follows an
/// application name change only while it is still blank.
pub fn set(file: &mut EvadaptToml, key: &str, value: &str) -> Result<SetReport> {
    let edit = FieldEdit::parse(key, value)?;
    let renames_application = matches!(edit, FieldEdit::ApplicationName(_));

    let session = EditSession::from_config(file.config().clone());
    let database_name_synced = renames_application && !session.is_database_name_touched();
    let config = session.apply(edit).into_config();

    file.set_config(config);
    file.save()?;

    Ok(SetReport {
        config_path: file.path().to_path_buf(),
        key: key.to_string(),
        value: value.to_string(),
        database_name_synced,
    })
}

#[cfg(test)]
mod tests {
    use evadapt_core::GeneratedFile;
    use evadapt_manifest::{Configuration, Error, MANIFEST_FILENAME, StarterManifest};
    use tempfile::TempDir;

    use super::*;

    fn starter(temp: &TempDir) -> EvadaptToml {
        StarterManifest::new(Configuration::default())
            .write(temp.path())
            .unwrap();
        EvadaptToml::open(temp.path().join(MANIFEST_FILENAME)).unwrap()
    }

    #[test]
    fn test_set_application_name_syncs_blank_database_name() {
        let temp = TempDir::new().unwrap();
        let mut file = starter(&temp);

        let report = set(&mut file, "application_name", "orders").unwrap();
        assert!(report.database_name_synced);

        let reopened = EvadaptToml::open(file.path()).unwrap();
        assert_eq!(reopened.config().database.name, "orders");
    }

    #[test]
    fn test_repeated_renames_keep_database_name_in_sync() {
        let temp = TempDir::new().unwrap();
        let mut file = starter(&temp);

        set(&mut file, "application_name", "pay").unwrap();
        let mut file = EvadaptToml::open(file.path()).unwrap();
        let report = set(&mut file, "application_name", "payments").unwrap();

        assert!(report.database_name_synced);
        let reopened = EvadaptToml::open(file.path()).unwrap();
        assert_eq!(reopened.config().database.name, "payments");
        assert_eq!(reopened.config().database.name_touched, Some(false));
    }

    #[test]
    fn test_saved_override_survives_reload() {
        let temp = TempDir::new().unwrap();
        let mut file = starter(&temp);
        set(&mut file, "application_name", "pay").unwrap();
        // Same text as the application name, but set directly.
        set(&mut file, "database.name", "pay").unwrap();

        let mut file = EvadaptToml::open(file.path()).unwrap();
        let report = set(&mut file, "application_name", "payments").unwrap();

        assert!(!report.database_name_synced);
        let reopened = EvadaptToml::open(file.path()).unwrap();
        assert_eq!(reopened.config().database.name, "pay");
    }

    #[test]
    fn test_set_application_name_keeps_explicit_database_name() {
        let temp = TempDir::new().unwrap();
        let mut file = starter(&temp);
        set(&mut file, "database.name", "ledger").unwrap();

        let report = set(&mut file, "application_name", "orders").unwrap();

        assert!(!report.database_name_synced);
        assert_eq!(file.config().database.name, "ledger");
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let temp = TempDir::new().unwrap();
        let mut file = starter(&temp);

        let err = set(&mut file, "database.host", "db").unwrap_err();
        assert!(matches!(*err, Error::UnknownKey { .. }));
    }
}
