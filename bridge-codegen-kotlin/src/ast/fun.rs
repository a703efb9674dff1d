//! Kotlin function builder.

use viewbridge_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{Annotation, modifiers_prefix, type_parameters_list};

/// A parameter in a Kotlin function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    /// Keywords placed before the name (`crossinline`, `vararg`, ...).
    pub modifiers: Vec<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    fn format(&self) -> String {
        format!("{}{}: {}", modifiers_prefix(&self.modifiers), self.name, self.ty)
    }
}

/// Builder for Kotlin functions.
///
/// A function without a body renders as an abstract member.
#[derive(Debug, Clone)]
pub struct Fun {
    name: String,
    annotations: Vec<Annotation>,
    modifiers: Vec<String>,
    type_parameters: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Option<Vec<CodeFragment>>,
    wrap_params: bool,
}

impl Fun {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            type_parameters: Vec::new(),
            params: Vec::new(),
            return_type: None,
            body: None,
            wrap_params: false,
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

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Set the function body.
    pub fn body(mut self, body: Vec<CodeFragment>) -> Self {
        self.body = Some(body);
        self
    }

    /// Put every parameter on its own line, with a trailing comma.
    pub fn wrap_params(mut self) -> Self {
        self.wrap_params = true;
        self
    }

    fn signature_start(&self) -> String {
        let type_params = type_parameters_list(&self.type_parameters);
        let type_params = if type_params.is_empty() {
            type_params
        } else {
            format!("{} ", type_params)
        };
        format!(
            "{}fun {}{}(",
            modifiers_prefix(&self.modifiers),
            type_params,
            self.name
        )
    }

    fn signature_end(&self) -> String {
        let returns = match &self.return_type {
            Some(ty) => format!("): {}", ty),
            None => ")".to_string(),
        };
        if self.body.is_some() {
            format!("{} {{", returns)
        } else {
            returns
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fun {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .annotations
            .iter()
            .flat_map(|a| a.to_fragments())
            .collect();

        let start = self.signature_start();
        let end = self.signature_end();
        let close = self.body.as_ref().map(|_| "}".to_string());
        let body = self.body.clone().unwrap_or_default();

        if self.wrap_params && !self.params.is_empty() {
            fragments.push(CodeFragment::line(start));
            fragments.push(CodeFragment::indent(
                self.params
                    .iter()
                    .map(|p| CodeFragment::line(format!("{},", p.format())))
                    .collect(),
            ));
            fragments.push(CodeFragment::block(end, body, close));
        } else {
            let params = self
                .params
                .iter()
                .map(Param::format)
                .collect::<Vec<_>>()
                .join(", ");
            fragments.push(CodeFragment::block(
                format!("{}{}{}", start, params, end),
                body,
                close,
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_member() {
        let f = Fun::new("createShowMap")
            .modifier("public")
            .param(Param::new("title", "String"))
            .returns("Pair<UIViewController, ShowMapDelegate>")
            .build();
        assert_eq!(
            f,
            "public fun createShowMap(title: String): Pair<UIViewController, ShowMapDelegate>\n"
        );
    }

    #[test]
    fn test_wrapped_params_with_body() {
        let f = Fun::new("ShowMap")
            .annotation(Annotation::new("Composable"))
            .modifier("public")
            .modifier("actual")
            .param(Param::new("modifier", "Modifier"))
            .param(Param::new("onTap", "() -> Unit").modifier("noinline"))
            .wrap_params()
            .body(vec![CodeFragment::line("val factory = LocalNativeViewFactory.current")])
            .build();
        assert_eq!(
            f,
            "@Composable\n\
             public actual fun ShowMap(\n    \
             modifier: Modifier,\n    \
             noinline onTap: () -> Unit,\n\
             ) {\n    \
             val factory = LocalNativeViewFactory.current\n\
             }\n"
        );
    }

    #[test]
    fn test_type_parameters() {
        let f = Fun::new("createShowList")
            .type_parameters(["T"])
            .param(Param::new("items", "List<T>"))
            .build();
        assert_eq!(f, "fun <T> createShowList(items: List<T>)\n");
    }

    #[test]
    fn test_wrap_without_params_stays_inline() {
        let f = Fun::new("ShowEmpty").wrap_params().body(Vec::new()).build();
        assert_eq!(f, "fun ShowEmpty() {\n}\n");
    }
}
