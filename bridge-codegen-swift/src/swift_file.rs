//! SwiftFile abstraction for structured Swift file generation.
//!
//! Provides a high-level API for generating Swift files with a sorted
//! import section followed by body content.

use std::collections::BTreeSet;

use viewbridge_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a Swift file.
///
/// Swift imports whole modules, so the import section is a sorted set of
/// module names. Each body element is separated by a blank line.
///
/// # Example
///
/// ```ignore
/// let file = SwiftFile::new()
///     .import("UIKit")
///     .add(protocol)
///     .render_with_header(GENERATED_HEADER);
/// ```
#[derive(Debug, Default)]
pub struct SwiftFile {
    imports: BTreeSet<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl SwiftFile {
    /// Create a new empty SwiftFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module import.
    pub fn import(mut self, module: impl Into<String>) -> Self {
        self.imports.insert(module.into());
        self
    }

    /// Add module imports from an iterator.
    pub fn imports(mut self, modules: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with Swift indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::SWIFT);

        for module in &self.imports {
            builder.push_line(&format!("import {}", module));
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render the file with a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}
