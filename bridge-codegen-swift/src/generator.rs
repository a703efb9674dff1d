use std::path::Path;

use eyre::Result;
use indexmap::IndexMap;
use viewbridge_codegen::{
    generation::{FileCategory, FileEntry, FileRegistry},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::{Diagnostic, FinishContext},
};
use viewbridge_core::GeneratorTarget;
use viewbridge_ir::RenderMode;

use crate::{
    MappedDeclaration, SwiftTypeMapper,
    files::{BindingFile, ObservableFile, ProtocolFile},
    mapping::map_groups,
};

/// Swift code generator for a finished session.
///
/// Only the primary target has a Swift surface; for any other target the
/// generator registers nothing. Declarations whose parameters cannot be
/// expressed in Swift are reported through [`LanguageCodegen::diagnostics`]
/// and left out of every Swift file, as are observables of same-named
/// declarations in different groups.
pub struct Generator<'a> {
    ctx: &'a FinishContext,
    groups: IndexMap<&'a str, Vec<MappedDeclaration<'a>>>,
    diagnostics: Vec<Diagnostic>,
    modules: Vec<String>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "swift"
    }

    fn file_extension(&self) -> &'static str {
        "swift"
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
        let mut diagnostics = Vec::new();
        let groups = if ctx.target == GeneratorTarget::Primary {
            map_groups(ctx, &SwiftTypeMapper, &mut diagnostics)
        } else {
            IndexMap::new()
        };
        let mut generator = Self {
            ctx,
            groups,
            diagnostics,
            modules: Vec::new(),
        };
        let collisions = generator.registry().collision_diagnostics();
        for diagnostic in &collisions {
            diagnostic.log();
        }
        generator.diagnostics.extend(collisions);
        generator
    }

    /// Framework module exporting the Kotlin declarations, imported by every file.
    pub fn framework_module(mut self, module: Option<String>) -> Self {
        self.modules = module.into_iter().collect();
        self
    }

    /// Register every file of the Swift surface.
    pub fn registry(&self) -> FileRegistry {
        let mut registry = FileRegistry::new();
        let modules = self.modules.as_slice();

        for (group, declarations) in &self.groups {
            registry.register(FileEntry::generated(
                &ProtocolFile::new(group, declarations, modules),
                FileCategory::Foreign,
            ));
            registry.register(FileEntry::generated(
                &BindingFile::new(group, declarations, modules),
                FileCategory::Foreign,
            ));
        }

        for mapped in self.groups.values().flatten() {
            if mapped.decl.render_mode == RenderMode::ObservedObject {
                registry.register(FileEntry::generated(
                    &ObservableFile::new(mapped, modules),
                    FileCategory::Foreign,
                ));
            }
        }

        tracing::debug!(
            build_target = self.ctx.target.as_str(),
            groups = self.groups.len(),
            files = registry.len(),
            "registered swift sources"
        );
        registry
    }
}
