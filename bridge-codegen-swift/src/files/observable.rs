//! Observable delegate for observed-object views.

use viewbridge_codegen::naming;
use viewbridge_core::GeneratedFile;

use super::{GENERATED_HEADER, SWIFT_UI};
use crate::{
    MappedDeclaration, SwiftFile,
    ast::{Class, Func, Param, Property},
};

/// `<X>Observable.swift`
///
/// Implements the Kotlin delegate by publishing every data parameter, so a
/// SwiftUI view holding it as an `@ObservedObject` re-renders on update.
pub struct ObservableFile<'a> {
    pub mapped: &'a MappedDeclaration<'a>,
    pub modules: &'a [String],
}

impl<'a> ObservableFile<'a> {
    pub fn new(mapped: &'a MappedDeclaration<'a>, modules: &'a [String]) -> Self {
        Self { mapped, modules }
    }
}

impl GeneratedFile for ObservableFile<'_> {
    fn path(&self) -> String {
        format!("{}.swift", naming::observable_name(&self.mapped.decl.name))
    }

    fn render(&self) -> String {
        let name = &self.mapped.decl.name;
        let params = &self.mapped.params;

        let class = Class::new(naming::observable_name(name))
            .modifier("public")
            .conforms_to(naming::delegate_name(name))
            .conforms_to("ObservableObject");
        let class = params.iter().fold(class, |class, p| {
            class.property(
                Property::variable(&p.name, &p.property_type)
                    .attribute("Published")
                    .modifier("public"),
            )
        });

        let init = params
            .iter()
            .fold(Func::init().modifier("public"), |init, p| {
                init.param(Param::new(&p.name, &p.parameter_type))
            })
            .body(params.iter().map(|p| format!("self.{} = {}", p.name, p.name)));
        let class = params.iter().fold(class.function(init), |class, p| {
            class.function(
                Func::new(naming::update_method_name(&p.source_name))
                    .modifier("public")
                    .param(Param::new(&p.name, &p.parameter_type))
                    .body([format!("self.{} = {}", p.name, p.name)]),
            )
        });

        SwiftFile::new()
            .import(SWIFT_UI)
            .imports(self.modules.iter().cloned())
            .add(class)
            .render_with_header(GENERATED_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use viewbridge_codegen::testing::ViewFixture;

    use super::*;
    use crate::SwiftTypeMapper;

    #[test]
    fn test_reserved_parameter_name() {
        let decl = ViewFixture::new("ShowTag")
            .without_handle_slot()
            .data("protocol", "kotlin.String")
            .build();
        let mapped = MappedDeclaration::map(&decl, &SwiftTypeMapper).unwrap();
        let content = ObservableFile::new(&mapped, &[]).render();

        assert!(content.contains("    @Published public var `protocol`: String\n"));
        assert!(content.contains("        self.`protocol` = `protocol`\n"));
        assert!(content.contains("    public func updateProtocol(`protocol`: String) {\n"));
    }

    #[test]
    fn test_no_parameters() {
        let decl = ViewFixture::new("ShowSpinner").build();
        let mapped = MappedDeclaration::map(&decl, &SwiftTypeMapper).unwrap();
        let file = ObservableFile::new(&mapped, &[]);

        assert_eq!(file.path(), "ShowSpinnerObservable.swift");
        assert_eq!(
            file.render(),
            "// Code generated by viewbridge. DO NOT EDIT.\n\n\
             import SwiftUI\n\n\
             public class ShowSpinnerObservable: ShowSpinnerDelegate, ObservableObject {\n    \
             public init() {\n    \
             }\n\
             }\n"
        );
    }
}
