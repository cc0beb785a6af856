//! Preview command report data structures.

use evadapt_codegen::PreviewFile;

use super::output::{Output, Report};

/// Every file of the project, rendered but not written.
#[derive(Debug)]
pub struct PreviewReport {
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(file.content.trim_end());
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", self.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_dividers() {
        let report = PreviewReport {
            files: vec![
                PreviewFile {
                    path: "pom.xml".into(),
                    content: "<project/>\n".into(),
                },
                PreviewFile {
                    path: "Dockerfile".into(),
                    content: "FROM openjdk:21-jdk-slim\n".into(),
                },
            ],
        };
        let out = BufferOutput::render(&report);

        assert_eq!(
            out.lines,
            [
                "── pom.xml ──",
                "<project/>",
                "── Dockerfile ──",
                "FROM openjdk:21-jdk-slim",
                "── Summary ──",
                "2 files would be generated",
            ]
        );
    }
}
