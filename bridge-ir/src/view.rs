//! Validated view declarations.

use serde::Serialize;

use crate::{AnnotationRef, ClassName, KotlinType, ParamModifier, SourceFile, TypeArgument};

/// How the native side supplies the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Declarative view driven by an observable object; hosted in a view controller.
    ObservedObject,
    /// A view controller created by the native factory.
    ViewHandle,
    /// A bare view created by the native factory.
    RawView,
}

impl RenderMode {
    /// Parse the annotation spelling (`SwiftUI`, `UIViewController`, `UIView`).
    pub fn from_annotation(value: &str) -> Option<Self> {
        match value {
            "SwiftUI" => Some(RenderMode::ObservedObject),
            "UIViewController" => Some(RenderMode::ViewHandle),
            "UIView" => Some(RenderMode::RawView),
            _ => None,
        }
    }

    pub fn annotation_name(&self) -> &'static str {
        match self {
            RenderMode::ObservedObject => "SwiftUI",
            RenderMode::ViewHandle => "UIViewController",
            RenderMode::RawView => "UIView",
        }
    }

    /// Whether the native view handle is a view controller (as opposed to a bare view).
    pub fn is_controller_hosted(&self) -> bool {
        !matches!(self, RenderMode::RawView)
    }
}

/// Visibility modifier carried over to generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// A parameter of a view declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterInfo {
    pub name: String,
    pub ty: KotlinType,
    /// True for the layout-handle slot; it is forwarded to the render target
    /// and never reaches the native side.
    pub is_view_handle_slot: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<ParamModifier>,
}

impl ParameterInfo {
    pub fn is_vararg(&self) -> bool {
        self.modifiers.contains(&ParamModifier::Vararg)
    }

    /// Type of the parameter as seen inside the function body.
    ///
    /// A `vararg` parameter of element type `T` is an `Array<out T>` there,
    /// which is what gets forwarded to the factory and the delegate.
    pub fn value_type(&self) -> KotlinType {
        if self.is_vararg() {
            KotlinType::Class {
                name: ClassName::new("kotlin", "Array"),
                arguments: vec![TypeArgument::Out(self.ty.clone())],
                nullable: false,
            }
        } else {
            self.ty.clone()
        }
    }
}

/// The canonical, validated record for one bridged view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewDeclaration {
    pub name: String,
    pub parameters: Vec<ParameterInfo>,
    pub factory_group: String,
    pub render_mode: RenderMode,
    pub retain_across_navigation: bool,
    /// Composable that embeds the native handle in the primary UI tree.
    pub render_target: ClassName,
    /// Set when the user overrode the render target.
    pub custom_render_target: Option<String>,
    pub visibility: Visibility,
    pub file: SourceFile,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
}

impl ViewDeclaration {
    /// Parameters forwarded to the native side, in declaration order.
    pub fn data_parameters(&self) -> impl Iterator<Item = &ParameterInfo> {
        self.parameters.iter().filter(|p| !p.is_view_handle_slot)
    }

    pub fn handle_slot(&self) -> Option<&ParameterInfo> {
        self.parameters.iter().find(|p| p.is_view_handle_slot)
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}
