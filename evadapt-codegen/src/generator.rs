use std::path::{Path, PathBuf};

use evadapt_manifest::Configuration;
use eyre::{Result, WrapErr};

use crate::{
    Archive, ArchiveSink, Bundle, DirectorySink, PreviewFile, PreviewSink, Sink, WriteStats,
    assemble,
};

/// Assembles a bundle once and hands it to whichever sink is asked for.
pub struct Generator {
    bundle: Bundle,
}

impl Generator {
    /// Render every artifact for `config`.
    ///
    /// Callers check [`Configuration::require_complete`] first.
    pub fn new(config: &Configuration) -> Self {
        Self {
            bundle: assemble(config),
        }
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// Preview generated files without writing to disk
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        PreviewSink.accept(&self.bundle)
    }

    /// Pack the project into an in-memory zip archive
    pub fn archive(&self) -> Result<Archive> {
        ArchiveSink.accept(&self.bundle)
    }

    /// Pack the project and save `<artifactId>.zip` into `output_dir`
    pub fn write_archive(&self, output_dir: &Path) -> Result<(PathBuf, Archive)> {
        let archive = self.archive()?;
        let path = output_dir.join(&archive.name);
        std::fs::create_dir_all(output_dir)
            .and_then(|_| std::fs::write(&path, &archive.bytes))
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved archive");
        Ok((path, archive))
    }

    /// Write the project as a file tree below `output_dir`
    pub fn generate(&self, output_dir: &Path) -> Result<WriteStats> {
        DirectorySink::new(output_dir).accept(&self.bundle)
    }
}
