//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use viewbridge_codegen::pipeline::{Diagnostic, DiagnosticsExt, Severity};

use super::output::{Output, Report};

/// Report data from a pipeline run without output.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Classified build target.
    pub target: &'static str,
    /// Accepted declarations in discovery order.
    pub declarations: Vec<String>,
    /// Factory groups in discovery order.
    pub groups: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            match diagnostic.severity {
                Severity::Error | Severity::Warning => out.warning(&diagnostic.to_string()),
                Severity::Info => out.preformatted(&diagnostic.to_string()),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                self.diagnostics.error_count(),
                if self.diagnostics.error_count() == 1 { "" } else { "s" }
            ));
        }
        out.newline();

        out.key_value("Target", self.target);
        out.section(&format!("Declarations ({})", self.declarations.len()));
        for name in &self.declarations {
            out.list_item(name);
        }
        out.section(&format!("Factory groups ({})", self.groups.len()));
        for group in &self.groups {
            out.list_item(group);
        }
    }
}
