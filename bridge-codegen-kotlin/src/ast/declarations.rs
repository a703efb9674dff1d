//! Interfaces, type aliases and top-level properties.

use viewbridge_codegen::builder::{CodeFragment, Renderable};

use super::{Annotation, Fun, modifiers_prefix, type_parameters_list};

/// Builder for Kotlin interfaces.
///
/// An interface without members renders without braces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    annotations: Vec<Annotation>,
    modifiers: Vec<String>,
    type_parameters: Vec<String>,
    functions: Vec<Fun>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn type_parameters(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.type_parameters.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn function(mut self, function: Fun) -> Self {
        self.functions.push(function);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .annotations
            .iter()
            .flat_map(|a| a.to_fragments())
            .collect();

        let header = format!(
            "{}interface {}{}",
            modifiers_prefix(&self.modifiers),
            self.name,
            type_parameters_list(&self.type_parameters)
        );

        if self.functions.is_empty() {
            fragments.push(CodeFragment::line(header));
            return fragments;
        }

        let mut body = Vec::new();
        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(function.to_fragments());
        }
        fragments.push(CodeFragment::braced(format!("{} {{", header), body));
        fragments
    }
}

/// `typealias Name = Target`
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    target: String,
    modifiers: Vec<String>,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "{}typealias {} = {}",
            modifiers_prefix(&self.modifiers),
            self.name,
            self.target
        ))]
    }
}

/// A read-only top-level property with an initializer.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    initializer: String,
    modifiers: Vec<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, initializer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            initializer: initializer.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "{}val {}: {} = {}",
            modifiers_prefix(&self.modifiers),
            self.name,
            self.ty,
            self.initializer
        ))]
    }
}

#[cfg(test)]
mod tests {
    use viewbridge_codegen::builder::CodeBuilder;

    use super::*;
    use crate::ast::Param;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_empty_interface() {
        let iface = Interface::new("ComposeNativeViewFactory")
            .modifier("public")
            .modifier("expect");
        assert_eq!(render(&iface), "public expect interface ComposeNativeViewFactory\n");
    }

    #[test]
    fn test_interface_members_separated_by_blank_line() {
        let iface = Interface::new("ShowMapDelegate")
            .modifier("public")
            .type_parameters(["T"])
            .function(Fun::new("updateTitle").modifier("public").param(Param::new("title", "String")))
            .function(Fun::new("updateItem").modifier("public").param(Param::new("item", "T")));
        assert_eq!(
            render(&iface),
            "public interface ShowMapDelegate<T> {\n    \
             public fun updateTitle(title: String)\n\n    \
             public fun updateItem(item: T)\n\
             }\n"
        );
    }

    #[test]
    fn test_type_alias_and_property() {
        let alias = TypeAlias::new("NativeViewFactory", "ComposeNativeViewFactory").modifier("public");
        assert_eq!(
            render(&alias),
            "public typealias NativeViewFactory = ComposeNativeViewFactory\n"
        );

        let prop = Property::new("answer", "Int", "42").modifier("public");
        assert_eq!(render(&prop), "public val answer: Int = 42\n");
    }
}
