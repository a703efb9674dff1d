//! Generate operation - Kotlin and Swift sources from a finished session.

use std::path::Path;

use eyre::{Context, Result};
use viewbridge_codegen::{language::LanguageCodegen, pipeline::FinishContext};
use viewbridge_codegen_kotlin::Generator as KotlinGenerator;
use viewbridge_codegen_swift::Generator as SwiftGenerator;
use viewbridge_core::GeneratorTarget;

use crate::reports::{GenerateReport, GenerationResult, LanguageOutput, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for Kotlin sources.
    pub kotlin_dir: &'a Path,
    /// Output directory for Swift sources, required for the primary target.
    pub swift_dir: Option<&'a Path>,
    /// Framework module imported by every Swift file.
    pub framework_module: Option<&'a str>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Kotlin sources are produced for every target; Swift sources only for the
/// primary target.
pub fn generate(ctx: &FinishContext, opts: GenerateOptions) -> Result<GenerateReport> {
    let kotlin = KotlinGenerator::new(ctx);
    let mut diagnostics = ctx.diagnostics.clone();
    diagnostics.extend_from_slice(kotlin.diagnostics());

    let swift = match (ctx.target, opts.swift_dir) {
        (GeneratorTarget::Primary, Some(dir)) => {
            let generator = SwiftGenerator::new(ctx)
                .framework_module(opts.framework_module.map(str::to_string));
            diagnostics.extend_from_slice(generator.diagnostics());
            Some((generator, dir))
        }
        _ => None,
    };

    let result = if opts.dry_run {
        let mut files = preview(&kotlin, opts.kotlin_dir);
        if let Some((generator, dir)) = &swift {
            files.extend(preview(generator, dir));
        }
        GenerationResult::Preview(files)
    } else {
        let mut outputs = vec![write(&kotlin, opts.kotlin_dir)?];
        if let Some((generator, dir)) = &swift {
            outputs.push(write(generator, dir)?);
        }
        GenerationResult::Written(outputs)
    };

    Ok(GenerateReport {
        target: ctx.target,
        declaration_count: ctx.declarations.len(),
        group_count: ctx.groups().len(),
        diagnostics,
        result,
    })
}

fn preview(generator: &dyn LanguageCodegen, dir: &Path) -> Vec<PreviewFile> {
    generator
        .preview()
        .into_iter()
        .map(|f| PreviewFile {
            path: dir.join(&f.path).display().to_string(),
            content: f.content,
        })
        .collect()
}

fn write(generator: &dyn LanguageCodegen, dir: &Path) -> Result<LanguageOutput> {
    let result = generator
        .generate(dir)
        .wrap_err_with(|| format!("Failed to write {} sources", generator.language()))?;
    Ok(LanguageOutput {
        language: generator.language(),
        output_dir: dir.to_path_buf(),
        written: result.written,
        unchanged: result.unchanged,
    })
}
