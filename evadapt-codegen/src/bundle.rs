//! Bundle assembly: one configuration in, every artifact out.

use evadapt_core::FileRules;
use evadapt_manifest::Configuration;
use indexmap::{IndexMap, IndexSet};

use crate::{ArtifactKind, Identifiers, TemplateContext, project::EMPTY_DIRECTORIES};

/// One rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub kind: ArtifactKind,
    pub content: String,
    pub rules: FileRules,
}

/// The complete in-memory output of one assembly.
///
/// Entries keep catalog order. Nothing is written anywhere until the bundle
/// is handed to a [`Sink`](crate::Sink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    ids: Identifiers,
    entries: IndexMap<String, BundleEntry>,
    directories: Vec<String>,
}

impl Bundle {
    /// Identifiers the bundle was rendered with.
    pub fn identifiers(&self) -> &Identifiers {
        &self.ids
    }

    /// Suggested archive name, `<artifactId>.zip`.
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.ids.artifact_id)
    }

    pub fn get(&self, path: &str) -> Option<&BundleEntry> {
        self.entries.get(path)
    }

    /// Content of the artifact of the given kind.
    pub fn content_of(&self, kind: ArtifactKind) -> Option<&str> {
        self.entries
            .values()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.content.as_str())
    }

    /// Path of the artifact of the given kind.
    pub fn path_of(&self, kind: ArtifactKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.kind == kind)
            .map(|(path, _)| path.as_str())
    }

    /// `(path, entry)` pairs in catalog order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &BundleEntry)> {
        self.entries.iter().map(|(path, entry)| (path.as_str(), entry))
    }

    /// Every directory of the project tree, parents first, without trailing slash.
    ///
    /// Includes directories that hold no file.
    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The plain path to content mapping.
    pub fn into_map(self) -> IndexMap<String, String> {
        self.entries
            .into_iter()
            .map(|(path, entry)| (path, entry.content))
            .collect()
    }
}

/// Render every catalog artifact for `config`.
///
/// The configuration is expected to be complete; nothing is validated here.
/// Equal configurations always produce equal bundles.
pub fn assemble(config: &Configuration) -> Bundle {
    let ids = Identifiers::derive(config);
    let ctx = TemplateContext::new(config, &ids);

    let mut entries = IndexMap::with_capacity(ArtifactKind::CATALOG.len());
    for kind in ArtifactKind::CATALOG {
        let file = kind.file(ctx);
        let path = file.path();
        tracing::debug!(artifact = kind.name(), %path, "rendered");
        entries.insert(
            path,
            BundleEntry {
                kind,
                content: file.render(),
                rules: file.rules(),
            },
        );
    }

    let directories = collect_directories(entries.keys().map(String::as_str));

    Bundle {
        ids,
        entries,
        directories,
    }
}

fn collect_directories<'p>(paths: impl Iterator<Item = &'p str>) -> Vec<String> {
    let mut directories = IndexSet::new();
    for path in paths {
        let segments: Vec<_> = path.split('/').collect();
        for depth in 1..segments.len() {
            directories.insert(segments[..depth].join("/"));
        }
    }
    for dir in EMPTY_DIRECTORIES {
        directories.insert(dir.to_string());
    }
    directories.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_directories_parents_first() {
        let dirs = collect_directories(["a/b/c.txt", "a/d.txt", "e.txt", "f/g.txt"].into_iter());
        assert_eq!(dirs, ["a", "a/b", "f", "configMap"]);
    }

    #[test]
    fn test_assemble_covers_catalog() {
        let config = Configuration {
            application_name: "orders".into(),
            ..Default::default()
        };
        let bundle = assemble(&config);

        assert_eq!(bundle.len(), ArtifactKind::CATALOG.len());
        assert_eq!(bundle.archive_name(), "orders.zip");
        for kind in ArtifactKind::CATALOG {
            assert!(bundle.content_of(kind).is_some(), "missing {}", kind.name());
        }
        assert!(bundle.directories().contains(&"configMap".to_string()));
        assert!(bundle.directories().contains(&"vars".to_string()));
    }

    #[test]
    fn test_transformer_entry_keeps_its_rules() {
        let bundle = assemble(&Configuration::default());
        let path = bundle.path_of(ArtifactKind::MessageTransformer).unwrap();

        assert_eq!(bundle.get(path).unwrap().rules, FileRules::if_missing());
        assert_eq!(
            bundle.get("pom.xml").unwrap().rules,
            FileRules::always_overwrite()
        );
    }
}
