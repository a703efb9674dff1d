//! Adapter from the Swift factory protocol to the exported Kotlin interface.

use viewbridge_codegen::naming;
use viewbridge_core::GeneratedFile;
use viewbridge_ir::RenderMode;

use super::{GENERATED_HEADER, SWIFT_UI, UI_KIT, handle_type};
use crate::{
    MappedDeclaration, SwiftFile,
    ast::{Class, Func, Param, Property},
};

/// `Foreign<G>Factory.swift`
///
/// Conforms to the Kotlin `Compose<G>Factory` interface as seen through the
/// shared framework and forwards every call to a `<G>Factory` supplied by
/// the application. Observed-object views get their observable created
/// here and are hosted in a `UIHostingController`.
pub struct BindingFile<'a> {
    pub group: &'a str,
    pub declarations: &'a [MappedDeclaration<'a>],
    pub modules: &'a [String],
}

impl<'a> BindingFile<'a> {
    pub fn new(
        group: &'a str,
        declarations: &'a [MappedDeclaration<'a>],
        modules: &'a [String],
    ) -> Self {
        Self {
            group,
            declarations,
            modules,
        }
    }

    fn field(&self) -> String {
        lower_first(&naming::factory_protocol_name(self.group))
    }

    fn method(&self, mapped: &MappedDeclaration<'_>) -> Func {
        let decl = mapped.decl;
        let method = naming::factory_method_name(&decl.name);
        let field = self.field();
        let returns = format!(
            "KotlinPair<{}, {}>",
            handle_type(decl.render_mode),
            naming::delegate_name(&decl.name)
        );

        let body = if decl.render_mode == RenderMode::ObservedObject {
            vec![
                format!(
                    "let delegate = {}({})",
                    naming::observable_name(&decl.name),
                    mapped.forwarded_arguments()
                ),
                format!("let ref = {}.{}(observable: delegate)", field, method),
                "return KotlinPair(first: UIHostingController(rootView: ref), second: delegate)"
                    .to_string(),
            ]
        } else {
            vec![
                format!(
                    "let (ref, delegate) = {}.{}({})",
                    field,
                    method,
                    mapped.forwarded_arguments()
                ),
                "return KotlinPair(first: ref, second: delegate)".to_string(),
            ]
        };

        mapped
            .params
            .iter()
            .fold(Func::new(method).modifier("public"), |func, p| {
                func.param(Param::new(&p.name, &p.parameter_type))
            })
            .returns(returns)
            .body(body)
    }
}

impl GeneratedFile for BindingFile<'_> {
    fn path(&self) -> String {
        format!("{}.swift", naming::foreign_binding_class_name(self.group))
    }

    fn render(&self) -> String {
        let protocol = naming::factory_protocol_name(self.group);
        let field = self.field();

        let class = Class::new(naming::foreign_binding_class_name(self.group))
            .modifier("public")
            .conforms_to(naming::factory_interface_name(self.group))
            .property(Property::constant(&field, &protocol).modifier("private"))
            .function(
                Func::init()
                    .modifier("public")
                    .param(Param::new(&field, &protocol).label("_"))
                    .body([format!("self.{} = {}", field, field)]),
            );
        let class = self
            .declarations
            .iter()
            .fold(class, |class, mapped| class.function(self.method(mapped)));

        SwiftFile::new()
            .import(SWIFT_UI)
            .import(UI_KIT)
            .imports(self.modules.iter().cloned())
            .add(class)
            .render_with_header(GENERATED_HEADER)
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use viewbridge_codegen::testing::{ViewFixture, show_badge};

    use super::*;
    use crate::SwiftTypeMapper;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("NativeViewFactory"), "nativeViewFactory");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_observable_without_parameters() {
        let decl = ViewFixture::new("ShowSpinner").group("Widgets").build();
        let mapped = [MappedDeclaration::map(&decl, &SwiftTypeMapper).unwrap()];
        let file = BindingFile::new("Widgets", &mapped, &[]);

        assert_eq!(file.path(), "ForeignWidgetsFactory.swift");
        let content = file.render();
        assert!(content.contains("private let widgetsFactory: WidgetsFactory\n"));
        assert!(content.contains("        let delegate = ShowSpinnerObservable()\n"));
        assert!(content.contains(
            "    public func createShowSpinner() -> KotlinPair<UIViewController, ShowSpinnerDelegate> {\n"
        ));
    }

    #[test]
    fn test_forwards_escaping_closures() {
        let decl = show_badge();
        let mapped = [MappedDeclaration::map(&decl, &SwiftTypeMapper).unwrap()];
        let content = BindingFile::new("NativeView", &mapped, &[]).render();
        assert!(content.contains("onTap: @escaping () -> Void"));
        assert!(content.contains("ShowBadgeObservable(count: count, onTap: onTap)"));
    }
}
