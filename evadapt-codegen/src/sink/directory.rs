use std::path::{Path, PathBuf};

use evadapt_core::{File, WriteResult, join_relative};
use eyre::{Result, WrapErr};

use super::Sink;
use crate::Bundle;

/// Statistics from a write operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteStats {
    /// Paths of written files.
    pub written_paths: Vec<String>,
    /// Paths of skipped files (already existed).
    pub skipped_paths: Vec<String>,
}

impl WriteStats {
    pub fn written(&self) -> usize {
        self.written_paths.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped_paths.len()
    }

    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written() + self.skipped()
    }
}

/// Writes a bundle as a file tree below a root directory.
///
/// Each entry follows its own rules: generated artifacts are rewritten,
/// the message transformer is only created when absent.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Sink for DirectorySink {
    type Output = WriteStats;

    fn accept(&mut self, bundle: &Bundle) -> Result<Self::Output> {
        let mut stats = WriteStats::default();

        for dir in bundle.directories() {
            let path = join_relative(&self.root, dir);
            std::fs::create_dir_all(&path)
                .wrap_err_with(|| format!("failed to create {}", path.display()))?;
        }

        for (path, entry) in bundle.files() {
            let file = File::relative(&self.root, path, entry.content.as_str()).with_rules(entry.rules);
            let result = file
                .write()
                .wrap_err_with(|| format!("failed to write {}", file.path().display()))?;
            match result {
                WriteResult::Written => {
                    tracing::debug!(%path, "written");
                    stats.written_paths.push(path.to_string());
                }
                WriteResult::Skipped => {
                    tracing::debug!(%path, "skipped, already exists");
                    stats.skipped_paths.push(path.to_string());
                }
            }
        }

        tracing::info!(
            root = %self.root.display(),
            written = stats.written(),
            skipped = stats.skipped(),
            "wrote project"
        );
        Ok(stats)
    }
}
