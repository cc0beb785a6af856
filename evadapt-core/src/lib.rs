//! Core primitives for the evadapt project initializer.
//!
//! This crate provides the identifier derivation rules and the file
//! abstractions shared by the manifest, codegen and CLI crates.

mod file;
mod naming;
mod types;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult, join_relative};
// Identifier derivation
pub use naming::{to_artifact_id, to_class_name, to_package_segment};
// Enumerations shared by configuration and templates
pub use types::{DatabaseKind, Strategy};
