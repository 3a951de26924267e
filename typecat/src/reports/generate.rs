//! Generate command report data structures.

use typecat_codegen::{GenerateReport, PreviewFile};

use super::output::{Output, Report};

/// Result of a generate run.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written(GenerateReport),
    /// Dry-run preview.
    Preview {
        file: PreviewFile,
        /// Number of accessors the file declares.
        accessors: usize,
    },
}

impl Report for GenerationResult {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerationResult::Written(report) => render_written(out, report),
            GenerationResult::Preview { file, accessors } => {
                out.divider(&file.path.display().to_string());
                out.preformatted(file.content.trim_end());
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} accessor{} would be generated",
                    accessors,
                    plural(*accessors)
                ));
            }
        }
    }
}

fn render_written(out: &mut dyn Output, report: &GenerateReport) {
    out.section(&format!(
        "Catalog '{}' ({} accessor{})",
        report.catalog,
        report.total(),
        plural(report.total())
    ));
    for (category, count) in &report.aliases {
        out.key_value_indented(category.field_name(), &count.to_string());
    }
    out.newline();
    out.key_value(
        "Generated",
        &format!(
            "{} ({}, {}, {} bytes)",
            report.path.display(),
            report.language,
            report.result.as_str(),
            report.bytes
        ),
    );
}

pub(super) fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
