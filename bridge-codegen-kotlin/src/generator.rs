use std::path::Path;

use eyre::Result;
use viewbridge_codegen::{
    generation::{FileCategory, FileEntry, FileRegistry},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::{Diagnostic, FinishContext},
};
use viewbridge_core::GeneratorTarget;

use crate::files::{CallSiteFile, CompositionsFile, DelegateFile, RawFactoryFile};

/// Kotlin code generator for one build target of a finished session.
///
/// Files that would land on the same path (declarations sharing a name
/// across factory groups, source files sharing a stem in one package) are
/// reported through [`LanguageCodegen::diagnostics`]; only the first of
/// them is written.
pub struct Generator<'a> {
    ctx: &'a FinishContext,
    diagnostics: Vec<Diagnostic>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.registry().preview()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let stats = self.registry().write_all(output_dir)?;
        Ok(GenerateResult {
            written: stats.written_paths,
            unchanged: stats.unchanged_paths,
        })
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl<'a> Generator<'a> {
    pub fn new(ctx: &'a FinishContext) -> Self {
        let mut generator = Self {
            ctx,
            diagnostics: Vec::new(),
        };
        generator.diagnostics = generator.registry().collision_diagnostics();
        for diagnostic in &generator.diagnostics {
            diagnostic.log();
        }
        generator
    }

    /// Register every file this target produces.
    pub fn registry(&self) -> FileRegistry {
        let ctx = self.ctx;
        let runtime = &ctx.runtime;
        let groups = ctx.groups();
        let mut registry = FileRegistry::new();

        if ctx.target == GeneratorTarget::Common && !groups.is_empty() {
            let names = groups.keys().copied().collect();
            registry.register(FileEntry::generated(
                &CompositionsFile::new(names, runtime),
                FileCategory::Factory,
            ));
        }

        for (group, declarations) in &groups {
            let factory = RawFactoryFile::new(group, declarations.clone(), ctx.target, runtime);
            registry.register(FileEntry::generated(&factory, FileCategory::Factory));
        }

        if ctx.target == GeneratorTarget::Primary {
            for decl in &ctx.declarations {
                registry.register(FileEntry::generated(
                    &DelegateFile::new(decl, runtime),
                    FileCategory::Delegate,
                ));
            }

            for (source, declarations) in ctx.by_source_file() {
                let call_site = CallSiteFile::new(source, declarations, ctx.target, runtime);
                registry.register(FileEntry::generated(&call_site, FileCategory::CallSite));
            }
        }

        tracing::debug!(
            build_target = ctx.target.as_str(),
            groups = groups.len(),
            files = registry.len(),
            "registered kotlin sources"
        );
        registry
    }
}
