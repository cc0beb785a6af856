//! Generate and bake report data structures.

use std::path::PathBuf;

use evadapt_codegen::{PreviewFile, WriteStats};

use super::output::{Output, Report};

/// Printed once a sink has finished.
pub const SUCCESS_MESSAGE: &str = "Project generated successfully!";

/// Prefix of the single message printed when a sink fails.
pub const FAILURE_PREFIX: &str = "Error generating project: ";

/// Report data from packing the project into an archive.
#[derive(Debug)]
pub struct GenerateReport {
    pub application_name: String,
    pub outcome: GenerateOutcome,
}

/// What happened at the sink.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Archive saved to disk.
    Saved {
        path: PathBuf,
        files: usize,
        bytes: usize,
    },
    /// The sink failed; the message is the error chain.
    Failed { message: String },
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, GenerateOutcome::Saved { .. })
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            GenerateOutcome::Saved { path, files, bytes } => {
                out.preformatted(SUCCESS_MESSAGE);
                out.newline();
                out.key_value("Application", &self.application_name);
                out.key_value("Archive", &path.display().to_string());
                out.key_value("Contents", &format!("{} files, {} bytes", files, bytes));
            }
            GenerateOutcome::Failed { message } => {
                out.error(&format!("{}{}", FAILURE_PREFIX, message));
            }
        }
    }
}

/// Report data from writing the project as a file tree.
#[derive(Debug)]
pub struct BakeReport {
    pub application_name: String,
    pub result: BakeResult,
}

/// Result of a bake.
#[derive(Debug)]
pub enum BakeResult {
    /// Files were written to disk.
    Written { output_dir: PathBuf, stats: WriteStats },
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
    /// The sink failed; the message is the error chain.
    Failed { message: String },
}

impl BakeReport {
    pub fn is_success(&self) -> bool {
        !matches!(self.result, BakeResult::Failed { .. })
    }
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            BakeResult::Written { output_dir, stats } => {
                out.preformatted(SUCCESS_MESSAGE);
                out.newline();
                out.key_value("Application", &self.application_name);
                out.key_value("Generated", &output_dir.display().to_string());

                if !stats.written_paths.is_empty() {
                    out.newline();
                    out.section(&format!("Written ({})", stats.written()));
                    for path in &stats.written_paths {
                        out.added_item(path);
                    }
                }

                if !stats.skipped_paths.is_empty() {
                    out.newline();
                    out.section(&format!("Kept existing ({})", stats.skipped()));
                    for path in &stats.skipped_paths {
                        out.list_item(path);
                    }
                }
            }
            BakeResult::Preview { files } => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(file.content.trim_end());
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
            BakeResult::Failed { message } => {
                out.error(&format!("{}{}", FAILURE_PREFIX, message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_failure_is_a_single_prefixed_message() {
        let report = GenerateReport {
            application_name: "orders".into(),
            outcome: GenerateOutcome::Failed {
                message: "disk full".into(),
            },
        };
        let out = BufferOutput::render(&report);

        assert!(!report.is_success());
        assert!(out.lines.is_empty());
        assert_eq!(out.errors, ["Error generating project: disk full"]);
    }

    #[test]
    fn test_success_message() {
        let report = GenerateReport {
            application_name: "orders".into(),
            outcome: GenerateOutcome::Saved {
                path: PathBuf::from("out/orders.zip"),
                files: 13,
                bytes: 4096,
            },
        };
        let out = BufferOutput::render(&report);

        assert_eq!(out.lines[0], SUCCESS_MESSAGE);
        assert!(out.text().contains("Archive: out/orders.zip"));
    }

    #[test]
    fn test_bake_lists_kept_files() {
        let report = BakeReport {
            application_name: "orders".into(),
            result: BakeResult::Written {
                output_dir: PathBuf::from("."),
                stats: WriteStats {
                    written_paths: vec!["pom.xml".into()],
                    skipped_paths: vec!["Transformer.java".into()],
                },
            },
        };
        let text = BufferOutput::render(&report).text();

        assert!(text.contains("Written (1):\n  + pom.xml"));
        assert!(text.contains("Kept existing (1):\n  - Transformer.java"));
    }
}
