//! Configuration model for the evadapt project initializer.
//!
//! A [`Configuration`] is the single input of the generation engine. It is
//! loaded from `evadapt.toml`, checked for completeness with
//! [`Configuration::missing_fields`], and edited through an [`EditSession`]
//! that replaces the whole value on every change.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod parse;
mod session;
mod validate;

pub use config::{
    Configuration, DEFAULT_BOOTSTRAP_SERVERS, DEFAULT_SERVER_PORT, DatabaseSettings, DomainSide,
    InterfaceSide, ServerSettings,
};
pub use error::{Error, Result};
pub use evadapt_core::{DatabaseKind, Strategy};
pub use file::{EvadaptToml, MANIFEST_FILENAME, StarterManifest};
pub use session::{EditSession, FieldEdit};
pub use validate::{RequiredField, is_complete};
