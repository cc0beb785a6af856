//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Configuration, Error, MANIFEST_FILENAME, Result, error::SourceContext};

impl FromStr for Configuration {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_configuration(s, MANIFEST_FILENAME)
    }
}

impl Configuration {
    /// Parse an evadapt.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_configuration(&content, &path.display().to_string())
    }

    /// Parse an evadapt.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_configuration(content, filename)
    }

    /// Serialize to canonical TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|source| Box::new(Error::Serialize { source }))
    }
}

/// Parse a configuration from content with the given filename for error reporting.
///
/// Unknown keys and enum values outside the supported set are rejected here;
/// blank required fields are not, that is the validator's job.
pub fn parse_configuration(content: &str, filename: &str) -> Result<Configuration> {
    let source_ctx = SourceContext::new(content, filename);
    toml::from_str(content).map_err(|e| source_ctx.parse_error(e))
}
