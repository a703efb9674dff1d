//! Check operation - the generation pipeline without output.

use std::path::Path;

use viewbridge_codegen::{language::LanguageCodegen, pipeline::FinishContext};
use viewbridge_codegen_kotlin::Generator as KotlinGenerator;
use viewbridge_codegen_swift::Generator as SwiftGenerator;
use viewbridge_core::GeneratorTarget;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Collects the session diagnostics, Kotlin path collisions and, for the
/// primary target, the Swift diagnostics a real run would report.
pub fn check(ctx: &FinishContext, config_path: &Path) -> CheckReport {
    let mut diagnostics = ctx.diagnostics.clone();
    diagnostics.extend_from_slice(KotlinGenerator::new(ctx).diagnostics());
    if ctx.target == GeneratorTarget::Primary {
        diagnostics.extend_from_slice(SwiftGenerator::new(ctx).diagnostics());
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        target: ctx.target.as_str(),
        declarations: ctx.declarations.iter().map(|d| d.name.clone()).collect(),
        groups: ctx.groups().keys().map(|g| g.to_string()).collect(),
        diagnostics,
    }
}
