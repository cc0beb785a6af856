use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for evadapt-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so parse errors can point
/// at the offending span of evadapt.toml.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub(crate) fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub(crate) fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'evadapt init' to create a starter evadapt.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(evadapt::write_error))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse evadapt.toml")]
    #[diagnostic(
        code(evadapt::parse_error),
        help(
            "database_kind must be one of: mongo, postgres; database.strategy must be one of: ATOMIC_OUTBOX, AUDIT_PERSIST, FAIL_SAFE"
        )
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration")]
    #[diagnostic(code(evadapt::serialize_error))]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error("configuration is incomplete, missing: {}", .missing.join(", "))]
    #[diagnostic(
        code(evadapt::incomplete_configuration),
        help("fill in the missing fields in evadapt.toml, then run 'evadapt check'")
    )]
    Incomplete { missing: Vec<String> },

    #[error("unknown configuration key '{key}'")]
    #[diagnostic(
        code(evadapt::unknown_key),
        help(
            "valid keys are: application_name, database_kind, domain.topic, domain.group_id, domain.bootstrap_servers, interface.topic, interface.bootstrap_servers, database.strategy, database.uri, database.name, server.port"
        )
    )]
    UnknownKey { key: String },

    #[error("invalid value for '{key}': {message}")]
    #[diagnostic(code(evadapt::invalid_value))]
    InvalidValue { key: String, message: String },
}
