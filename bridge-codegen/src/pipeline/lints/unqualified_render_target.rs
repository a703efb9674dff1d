//! Lint for custom render targets without a package.

use viewbridge_ir::ViewDeclaration;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when a custom render target is a bare simple name.
///
/// The call site imports the target by its qualified name, so a bare name
/// only resolves when it happens to live in the source file's package.
pub struct UnqualifiedRenderTargetLint;

impl Lint for UnqualifiedRenderTargetLint {
    fn name(&self) -> &'static str {
        "unqualified-render-target"
    }

    fn description(&self) -> &'static str {
        "Require custom render targets to be fully-qualified references"
    }

    fn check(&self, declarations: &[ViewDeclaration], diagnostics: &mut Vec<Diagnostic>) {
        for decl in declarations {
            let Some(target) = decl.custom_render_target.as_deref() else {
                continue;
            };
            if !target.contains('.') {
                diagnostics.push(
                    Diagnostic::warning(
                        "lint",
                        format!(
                            "{}: custom render target '{}' is not fully qualified; resolving it in package '{}'",
                            decl.name, target, decl.file.package
                        ),
                    )
                    .with_code(self.name())
                    .at(decl.file.path.clone()),
                );
            }
        }
    }
}
