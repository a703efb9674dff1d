//! Generate command report data structures.

use std::path::PathBuf;

use viewbridge_codegen::pipeline::{Diagnostic, DiagnosticsExt, Severity};
use viewbridge_core::GeneratorTarget;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Classified build target.
    pub target: GeneratorTarget,

    /// Number of accepted declarations.
    pub declaration_count: usize,

    /// Number of factory groups.
    pub group_count: usize,

    /// Session and type-mapping diagnostics.
    pub diagnostics: Vec<Diagnostic>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk, one entry per language.
    Written(Vec<LanguageOutput>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Files written for one language.
#[derive(Debug)]
pub struct LanguageOutput {
    pub language: &'static str,
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files that already held the generated content.
    pub unchanged: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path, including the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Whether the run must fail the build.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            if diagnostic.severity != Severity::Info {
                out.warning(&diagnostic.to_string());
            }
        }

        match &self.result {
            GenerationResult::Written(outputs) => self.render_written(out, outputs),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, outputs: &[LanguageOutput]) {
        out.key_value("Target", self.target.as_str());
        out.key_value(
            "Declarations",
            &format!("{} in {} factory groups", self.declaration_count, self.group_count),
        );

        for output in outputs {
            out.newline();
            out.section(&format!(
                "{} ({}: {} written, {} unchanged)",
                output.language,
                output.output_dir.display(),
                output.written.len(),
                output.unchanged.len()
            ));
            for path in &output.written {
                out.added_item(path);
            }
        }

        if self.has_errors() {
            out.newline();
            out.preformatted(&format!(
                "{} error{} reported",
                self.diagnostics.error_count(),
                if self.diagnostics.error_count() == 1 { "" } else { "s" }
            ));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
