use viewbridge_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::modifiers_prefix;

/// A parameter in a Swift function.
#[derive(Debug, Clone)]
pub struct Param {
    /// Argument label when it differs from the name (`_` to omit it).
    label: Option<String>,
    name: String,
    ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: None,
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn format(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}: {}", label, self.name, self.ty),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// Builder for Swift functions and initializers.
///
/// A function without a body renders as a protocol requirement.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    is_init: bool,
    modifiers: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Option<Vec<CodeFragment>>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_init: false,
            modifiers: Vec::new(),
            params: Vec::new(),
            return_type: None,
            body: None,
        }
    }

    /// An `init(...)` declaration.
    pub fn init() -> Self {
        Self {
            is_init: true,
            ..Self::new("init")
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Set the function body, one statement per line.
    pub fn body(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body = Some(lines.into_iter().map(CodeFragment::line).collect());
        self
    }

    fn signature(&self) -> String {
        let keyword = if self.is_init {
            "init".to_string()
        } else {
            format!("func {}", self.name)
        };
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");
        let returns = self
            .return_type
            .as_ref()
            .map(|ty| format!(" -> {}", ty))
            .unwrap_or_default();
        format!(
            "{}{}({}){}",
            modifiers_prefix(&self.modifiers),
            keyword,
            params,
            returns
        )
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::swift();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.body {
            Some(body) => vec![CodeFragment::braced(
                format!("{} {{", self.signature()),
                body.clone(),
            )],
            None => vec![CodeFragment::line(self.signature())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement() {
        let f = Func::new("createShowBadge")
            .param(Param::new("observable", "ShowBadgeObservable"))
            .returns("AnyView")
            .build();
        assert_eq!(f, "func createShowBadge(observable: ShowBadgeObservable) -> AnyView\n");
    }

    #[test]
    fn test_init_with_unlabelled_param() {
        let f = Func::init()
            .modifier("public")
            .param(Param::new("nativeViewFactory", "NativeViewFactory").label("_"))
            .body(["self.nativeViewFactory = nativeViewFactory"])
            .build();
        assert_eq!(
            f,
            "public init(_ nativeViewFactory: NativeViewFactory) {\n    \
             self.nativeViewFactory = nativeViewFactory\n\
             }\n"
        );
    }
}
