//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

use crate::pipeline::Diagnostic;

/// Trait for language-specific code generators.
///
/// A generator is built from a finished session for one target and renders
/// every file of its language surface.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "kotlin", "swift")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "kt", "swift")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Diagnostics produced while preparing the output (e.g., unmappable types).
    ///
    /// Default implementation reports nothing.
    fn diagnostics(&self) -> &[Diagnostic] {
        &[]
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed
    pub written: Vec<String>,
    /// Files that already held the generated content
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
