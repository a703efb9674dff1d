//! Protocols, classes and stored properties.

use viewbridge_codegen::builder::{CodeFragment, Renderable};

use super::{Func, modifiers_prefix};

/// Builder for Swift protocols.
#[derive(Debug, Clone)]
pub struct Protocol {
    name: String,
    modifiers: Vec<String>,
    requirements: Vec<Func>,
}

impl Protocol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            requirements: Vec::new(),
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn requirement(mut self, func: Func) -> Self {
        self.requirements.push(func);
        self
    }
}

impl Renderable for Protocol {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!(
            "{}protocol {} {{",
            modifiers_prefix(&self.modifiers),
            self.name
        );
        let body = self
            .requirements
            .iter()
            .flat_map(|f| f.to_fragments())
            .collect();
        vec![CodeFragment::braced(header, body)]
    }
}

/// A stored property.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    attributes: Vec<String>,
    modifiers: Vec<String>,
    mutable: bool,
}

impl Property {
    /// `let name: Type`
    pub fn constant(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            attributes: Vec::new(),
            modifiers: Vec::new(),
            mutable: false,
        }
    }

    /// `var name: Type`
    pub fn variable(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            mutable: true,
            ..Self::constant(name, ty)
        }
    }

    /// Attribute written before the modifiers, without the `@`.
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    fn format(&self) -> String {
        let attributes: String = self.attributes.iter().map(|a| format!("@{} ", a)).collect();
        format!(
            "{}{}{} {}: {}",
            attributes,
            modifiers_prefix(&self.modifiers),
            if self.mutable { "var" } else { "let" },
            self.name,
            self.ty
        )
    }
}

/// Builder for Swift classes.
///
/// Stored properties are rendered first as one block, then every function
/// separated by a blank line.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    modifiers: Vec<String>,
    conformances: Vec<String>,
    properties: Vec<Property>,
    functions: Vec<Func>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            conformances: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// Superclass or protocol, in declaration order.
    pub fn conforms_to(mut self, ty: impl Into<String>) -> Self {
        self.conformances.push(ty.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn function(mut self, function: Func) -> Self {
        self.functions.push(function);
        self
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let conformances = if self.conformances.is_empty() {
            String::new()
        } else {
            format!(": {}", self.conformances.join(", "))
        };
        let header = format!(
            "{}class {}{} {{",
            modifiers_prefix(&self.modifiers),
            self.name,
            conformances
        );

        let mut body: Vec<CodeFragment> = self
            .properties
            .iter()
            .map(|p| CodeFragment::line(p.format()))
            .collect();
        for function in &self.functions {
            if !body.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.extend(function.to_fragments());
        }

        vec![CodeFragment::braced(header, body)]
    }
}
