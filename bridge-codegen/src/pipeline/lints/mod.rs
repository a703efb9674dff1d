//! Built-in lints run at finish.

mod duplicate_factory_method;
mod unqualified_render_target;

pub use duplicate_factory_method::DuplicateFactoryMethodLint;
pub use unqualified_render_target::UnqualifiedRenderTargetLint;

use super::Lint;

/// Every built-in lint, in the order they run.
pub fn builtin() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(DuplicateFactoryMethodLint),
        Box::new(UnqualifiedRenderTargetLint),
    ]
}
