//! Destinations for an assembled [`Bundle`](crate::Bundle).
//!
//! A sink is the only step that can fail after assembly. The bundle is only
//! borrowed, so a failed sink can be retried with the same bundle.

mod archive;
mod directory;
mod preview;

pub use archive::{Archive, ArchiveSink};
pub use directory::{DirectorySink, WriteStats};
use eyre::Result;
pub use preview::{PreviewFile, PreviewSink};

use crate::Bundle;

/// Consumes a bundle and produces some output.
pub trait Sink {
    type Output;

    fn accept(&mut self, bundle: &Bundle) -> Result<Self::Output>;
}
