use viewbridge_codegen::builder::{CodeFragment, Renderable};

/// An annotation usage, e.g. `@OptIn(ExperimentalForeignApi::class)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    arguments: Option<String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    /// Raw argument list, rendered between parentheses.
    pub fn arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }

    pub fn format(&self) -> String {
        match &self.arguments {
            Some(args) => format!("@{}({})", self.name, args),
            None => format!("@{}", self.name),
        }
    }
}

impl Renderable for Annotation {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.format())]
    }
}
