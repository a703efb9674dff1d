//! Declaration fixtures for generator tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use viewbridge_core::GeneratorTarget;
use viewbridge_ir::{
    AnnotationRef, ClassName, KotlinType, ParamModifier, ParameterInfo, RenderMode, SourceFile,
    ViewDeclaration, Visibility,
};
use viewbridge_manifest::{DEFAULT_UI_VIEW_INTEROP_FQN, DEFAULT_VIEW_CONTROLLER_INTEROP_FQN};

use crate::{
    naming::RuntimePackage,
    pipeline::{FinishContext, MODIFIER_FQN},
};

pub const COMPOSABLE_FQN: &str = "androidx.compose.runtime.Composable";
pub const RUNTIME_PACKAGE: &str = "dev.viewbridge";

/// Builder for an already-validated [`ViewDeclaration`].
///
/// Starts as a public `@Composable` declaration in `com.example` with a
/// `modifier: Modifier` handle slot, grouped under `NativeView`.
#[derive(Debug, Clone)]
pub struct ViewFixture {
    decl: ViewDeclaration,
}

impl ViewFixture {
    pub fn new(name: &str) -> Self {
        Self {
            decl: ViewDeclaration {
                name: name.to_string(),
                parameters: vec![ParameterInfo {
                    name: "modifier".to_string(),
                    ty: KotlinType::class(MODIFIER_FQN),
                    is_view_handle_slot: true,
                    modifiers: Vec::new(),
                }],
                factory_group: "NativeView".to_string(),
                render_mode: RenderMode::ObservedObject,
                retain_across_navigation: false,
                render_target: ClassName::from_fqn(DEFAULT_VIEW_CONTROLLER_INTEROP_FQN),
                custom_render_target: None,
                visibility: Visibility::Public,
                file: SourceFile::new(
                    format!("src/commonMain/kotlin/com/example/{}.kt", name),
                    "com.example",
                ),
                annotations: vec![AnnotationRef {
                    name: ClassName::from_fqn(COMPOSABLE_FQN),
                    arguments: None,
                }],
                type_parameters: Vec::new(),
            },
        }
    }

    pub fn group(mut self, group: &str) -> Self {
        self.decl.factory_group = group.to_string();
        self
    }

    /// Set the render mode and the matching default render target.
    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.decl.render_mode = mode;
        if self.decl.custom_render_target.is_none() {
            let fqn = if mode.is_controller_hosted() {
                DEFAULT_VIEW_CONTROLLER_INTEROP_FQN
            } else {
                DEFAULT_UI_VIEW_INTEROP_FQN
            };
            self.decl.render_target = ClassName::from_fqn(fqn);
        }
        self
    }

    pub fn retain(mut self) -> Self {
        self.decl.retain_across_navigation = true;
        self
    }

    pub fn file(mut self, path: &str, package: &str) -> Self {
        self.decl.file = SourceFile::new(path, package);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.decl.visibility = visibility;
        self
    }

    pub fn render_target(mut self, fqn: &str) -> Self {
        self.decl.custom_render_target = Some(fqn.to_string());
        self.decl.render_target = ClassName::from_fqn(fqn);
        self
    }

    /// Append a data parameter of a plain class type.
    pub fn data(self, name: &str, fqn: &str) -> Self {
        self.param(name, KotlinType::class(fqn))
    }

    /// Append a data parameter of any type.
    pub fn param(mut self, name: &str, ty: KotlinType) -> Self {
        self.decl.parameters.push(ParameterInfo {
            name: name.to_string(),
            ty,
            is_view_handle_slot: false,
            modifiers: Vec::new(),
        });
        self
    }

    /// Add a modifier to the most recently added parameter.
    pub fn modifier(mut self, modifier: ParamModifier) -> Self {
        if let Some(param) = self.decl.parameters.last_mut() {
            param.modifiers.push(modifier);
        }
        self
    }

    pub fn without_handle_slot(mut self) -> Self {
        self.decl.parameters.retain(|p| !p.is_view_handle_slot);
        self
    }

    pub fn nullable_handle_slot(mut self) -> Self {
        for param in self.decl.parameters.iter_mut().filter(|p| p.is_view_handle_slot) {
            param.ty = param.ty.with_nullable(true);
        }
        self
    }

    pub fn type_parameter(mut self, name: &str) -> Self {
        self.decl.type_parameters.push(name.to_string());
        self
    }

    pub fn annotation(mut self, fqn: &str, arguments: Option<&str>) -> Self {
        self.decl.annotations.push(AnnotationRef {
            name: ClassName::from_fqn(fqn),
            arguments: arguments.map(str::to_string),
        });
        self
    }

    pub fn build(self) -> ViewDeclaration {
        self.decl
    }
}

/// `ShowMap(modifier: Modifier, coordinate: Coord, title: String)` hosted in
/// a view controller and retained across navigation.
pub fn show_map() -> ViewDeclaration {
    ViewFixture::new("ShowMap")
        .mode(RenderMode::ViewHandle)
        .retain()
        .data("coordinate", "com.example.Coord")
        .data("title", "kotlin.String")
        .build()
}

/// An observed-object declaration without a handle slot.
pub fn show_badge() -> ViewDeclaration {
    ViewFixture::new("ShowBadge")
        .without_handle_slot()
        .data("count", "kotlin.Int")
        .param(
            "onTap",
            KotlinType::function([], KotlinType::class("kotlin.Unit")),
        )
        .build()
}

/// A finish context over `declarations` with the default runtime package.
pub fn finish(target: GeneratorTarget, declarations: Vec<ViewDeclaration>) -> FinishContext {
    FinishContext::new(target, declarations, RuntimePackage::new(RUNTIME_PACKAGE))
}
