use eyre::Result;

use super::Sink;
use crate::Bundle;

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the project root
    pub path: String,
    /// File content
    pub content: String,
}

/// Hands the bundle back as path/content pairs, unchanged.
#[derive(Debug, Default)]
pub struct PreviewSink;

impl Sink for PreviewSink {
    type Output = Vec<PreviewFile>;

    fn accept(&mut self, bundle: &Bundle) -> Result<Self::Output> {
        Ok(bundle
            .files()
            .map(|(path, entry)| PreviewFile {
                path: path.to_string(),
                content: entry.content.clone(),
            })
            .collect())
    }
}
