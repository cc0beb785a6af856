use std::io::{Cursor, Write};

use eyre::Result;
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

use super::Sink;
use crate::Bundle;

/// A zip archive held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    /// Suggested file name, `<artifactId>.zip`
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Packs a bundle into a deflate-compressed zip archive.
///
/// Directory entries come first, including the empty ones, followed by one
/// entry per file in catalog order. Entry timestamps are fixed, so equal
/// bundles produce equal archives.
#[derive(Debug, Default)]
pub struct ArchiveSink;

impl ArchiveSink {
    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
    }
}

impl Sink for ArchiveSink {
    type Output = Archive;

    fn accept(&mut self, bundle: &Bundle) -> Result<Self::Output> {
        let options = Self::options();
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        for dir in bundle.directories() {
            zip.add_directory(format!("{}/", dir), options)?;
        }
        for (path, entry) in bundle.files() {
            zip.start_file(path, options)?;
            zip.write_all(entry.content.as_bytes())?;
        }

        let bytes = zip.finish()?.into_inner();
        tracing::info!(
            archive = %bundle.archive_name(),
            files = bundle.len(),
            bytes = bytes.len(),
            "packed archive"
        );

        Ok(Archive {
            name: bundle.archive_name(),
            bytes,
        })
    }
}
