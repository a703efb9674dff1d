//! Lint trait for accumulated declarations.

use viewbridge_ir::ViewDeclaration;

use crate::pipeline::Diagnostic;

/// A lint that checks the final declaration set for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint, also used as the diagnostic code.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the declarations and add any diagnostics.
    fn check(&self, declarations: &[ViewDeclaration], diagnostics: &mut Vec<Diagnostic>);
}
