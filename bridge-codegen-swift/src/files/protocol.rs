//! Idiomatic factory protocol implemented by the Swift application.

use viewbridge_codegen::naming;
use viewbridge_core::GeneratedFile;
use viewbridge_ir::RenderMode;

use super::{GENERATED_HEADER, SWIFT_UI, UI_KIT};
use crate::{
    MappedDeclaration, SwiftFile,
    ast::{Func, Param, Protocol},
};

/// `<G>Factory.swift`
///
/// ```swift
/// public protocol NativeViewFactory {
///     func createShowMap(coordinate: Coord, title: String) -> (view: UIViewController, delegate: ShowMapDelegate)
///     func createShowBadge(observable: ShowBadgeObservable) -> AnyView
/// }
/// ```
///
/// Observed-object declarations receive their observable and return any
/// SwiftUI view. The others receive the data parameters and return the
/// UIKit view together with the delegate that receives updates.
pub struct ProtocolFile<'a> {
    pub group: &'a str,
    pub declarations: &'a [MappedDeclaration<'a>],
    pub modules: &'a [String],
}

impl<'a> ProtocolFile<'a> {
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

    fn requirement(mapped: &MappedDeclaration<'_>) -> Func {
        let decl = mapped.decl;
        let func = Func::new(naming::factory_method_name(&decl.name));

        let func = if decl.render_mode == RenderMode::ObservedObject {
            func.param(Param::new("observable", naming::observable_name(&decl.name)))
        } else {
            mapped
                .params
                .iter()
                .fold(func, |func, p| func.param(Param::new(&p.name, &p.parameter_type)))
        };
        func.returns(&mapped.factory_return)
    }
}

impl GeneratedFile for ProtocolFile<'_> {
    fn path(&self) -> String {
        format!("{}.swift", naming::factory_protocol_name(self.group))
    }

    fn render(&self) -> String {
        let protocol = self.declarations.iter().fold(
            Protocol::new(naming::factory_protocol_name(self.group)).modifier("public"),
            |protocol, mapped| protocol.requirement(Self::requirement(mapped)),
        );

        SwiftFile::new()
            .import(SWIFT_UI)
            .import(UI_KIT)
            .imports(self.modules.iter().cloned())
            .add(protocol)
            .render_with_header(GENERATED_HEADER)
    }
}
