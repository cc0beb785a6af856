//! Template catalog and bundle assembly for the evadapt project initializer.
//!
//! [`assemble`] renders every artifact of a project from one
//! [`Configuration`](evadapt_manifest::Configuration) into an in-memory
//! [`Bundle`]; a [`Sink`] then previews it, packs it into a zip archive or
//! writes it to disk.

mod bundle;
mod context;
pub mod files;
mod generator;
mod identifiers;
pub mod project;
mod registry;
mod sink;
mod stages;

pub use bundle::{Bundle, BundleEntry, assemble};
pub use context::TemplateContext;
pub use generator::Generator;
pub use identifiers::{ClassRole, Identifiers};
pub use registry::ArtifactKind;
pub use sink::{
    Archive, ArchiveSink, DirectorySink, PreviewFile, PreviewSink, Sink, WriteStats,
};
pub use stages::{Stage, StageTable, UnknownStage};
