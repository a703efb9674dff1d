//! KotlinFile abstraction for structured Kotlin file generation.
//!
//! A [`KotlinFile`] owns the package header and the import list. Every type
//! and member reference goes through it so the short name used in the body
//! always agrees with the imports.

use std::collections::HashMap;

use viewbridge_codegen::{
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
    generation::ImportCollector,
};
use viewbridge_ir::{ClassName, KotlinType, TypeArgument};

/// Packages every Kotlin file sees without an import.
const DEFAULT_IMPORTS: &[&str] = &[
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
];

/// A structured representation of a Kotlin file.
///
/// # Example
///
/// ```ignore
/// let mut file = KotlinFile::new("dev.viewbridge");
/// let pair = file.import(&ClassName::new("kotlin", "Pair"));
/// file.add(Interface::new("ComposeNativeViewFactory").modifier("public"));
/// let content = file.render_with_header(GENERATED_HEADER);
/// ```
#[derive(Debug, Default)]
pub struct KotlinFile {
    package: String,
    imports: ImportCollector,
    /// Simple name -> qualified name it currently refers to.
    claimed: HashMap<String, String>,
    body: Vec<Vec<CodeFragment>>,
}

impl KotlinFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Claim the simple name of a type declared in this file.
    pub fn declare(&mut self, simple_name: &str) {
        let fqn = if self.package.is_empty() {
            simple_name.to_string()
        } else {
            format!("{}.{}", self.package, simple_name)
        };
        self.claimed.entry(simple_name.to_string()).or_insert(fqn);
    }

    /// Reference a class or top-level member, returning the name to write.
    ///
    /// The short name is used unless another declaration already claimed
    /// it, in which case the qualified name is returned and nothing is
    /// imported.
    pub fn import(&mut self, name: &ClassName) -> String {
        if name.package.is_empty() {
            return name.simple_name.clone();
        }
        let fqn = name.canonical_name();
        match self.claimed.get(&name.simple_name) {
            Some(existing) if *existing == fqn => return name.simple_name.clone(),
            Some(_) => return fqn,
            None => {}
        }
        self.claimed.insert(name.simple_name.clone(), fqn);
        if name.package != self.package && !DEFAULT_IMPORTS.contains(&name.package.as_str()) {
            self.imports.add(&name.package, &name.simple_name);
        }
        name.simple_name.clone()
    }

    /// [`import`](Self::import) for a dotted name.
    pub fn import_fqn(&mut self, fqn: &str) -> String {
        self.import(&ClassName::from_fqn(fqn))
    }

    /// Render a type, importing every class it mentions.
    pub fn type_name(&mut self, ty: &KotlinType) -> String {
        match ty {
            KotlinType::Class {
                name,
                arguments,
                nullable,
            } => {
                let mut out = self.import(name);
                if !arguments.is_empty() {
                    let args: Vec<_> = arguments.iter().map(|a| self.type_argument(a)).collect();
                    out = format!("{}<{}>", out, args.join(", "));
                }
                nullable_suffix(out, *nullable)
            }
            KotlinType::Function {
                parameters,
                returns,
                nullable,
            } => {
                let params: Vec<_> = parameters.iter().map(|p| self.type_name(p)).collect();
                let out = format!("({}) -> {}", params.join(", "), self.type_name(returns));
                if *nullable {
                    format!("({})?", out)
                } else {
                    out
                }
            }
            KotlinType::Variable { name, nullable } => nullable_suffix(name.clone(), *nullable),
            KotlinType::Dynamic => "dynamic".to_string(),
        }
    }

    fn type_argument(&mut self, argument: &TypeArgument) -> String {
        match argument {
            TypeArgument::Invariant(ty) => self.type_name(ty),
            TypeArgument::Out(ty) => format!("out {}", self.type_name(ty)),
            TypeArgument::In(ty) => format!("in {}", self.type_name(ty)),
            TypeArgument::Star => "*".to_string(),
        }
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(&mut self, node: R) -> &mut Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn imports(&self) -> &ImportCollector {
        &self.imports
    }

    /// Render the file with Kotlin indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::KOTLIN);

        if !self.package.is_empty() {
            builder.push_line(&format!("package {}", self.package));
        }

        if !self.imports.is_empty() {
            if !self.package.is_empty() {
                builder.push_blank();
            }
            for (package, symbols) in self.imports.sorted() {
                for symbol in symbols {
                    builder.push_line(&format!("import {}.{}", package, symbol));
                }
            }
        }

        for fragments in &self.body {
            if !builder.as_str().is_empty() {
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
}

fn nullable_suffix(name: String, nullable: bool) -> String {
    if nullable { format!("{}?", name) } else { name }
}
