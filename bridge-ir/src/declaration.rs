//! Raw declarations as handed over by the host resolver.
//!
//! Every field the resolver might fail to report is optional here; the
//! declaration reader decides which gaps are fatal for a declaration.

use serde::{Deserialize, Serialize};

use crate::{ClassName, KotlinType, Visibility};

/// The source file a declaration lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceFile {
    /// Path as reported by the host, relative to the source root.
    pub path: String,
    /// Package declared by the file; empty for the default package.
    pub package: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package: package.into(),
        }
    }
}

/// Visibility as reported by the resolver, including kinds that have no
/// source modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RawVisibility {
    Public,
    Internal,
    Protected,
    Private,
    JavaPackage,
    Local,
}

impl RawVisibility {
    /// The source modifier for this visibility, if it has one.
    pub fn to_modifier(self) -> Option<Visibility> {
        match self {
            RawVisibility::Public => Some(Visibility::Public),
            RawVisibility::Internal => Some(Visibility::Internal),
            RawVisibility::Protected => Some(Visibility::Protected),
            RawVisibility::Private => Some(Visibility::Private),
            RawVisibility::JavaPackage | RawVisibility::Local => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RawVisibility::Public => "public",
            RawVisibility::Internal => "internal",
            RawVisibility::Protected => "protected",
            RawVisibility::Private => "private",
            RawVisibility::JavaPackage => "java-package",
            RawVisibility::Local => "local",
        }
    }
}

/// Modifiers a value parameter can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamModifier {
    Crossinline,
    Noinline,
    Vararg,
}

impl ParamModifier {
    pub fn keyword(self) -> &'static str {
        match self {
            ParamModifier::Crossinline => "crossinline",
            ParamModifier::Noinline => "noinline",
            ParamModifier::Vararg => "vararg",
        }
    }
}

/// An annotation applied to the declaration, other than the bridge
/// annotations themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnnotationRef {
    pub name: ClassName,
    /// Argument list source text without the surrounding parentheses.
    pub arguments: Option<String>,
}

/// Arguments of the bridge annotation. Absent fields take their defaults
/// in the declaration reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BridgeAnnotation {
    pub factory_name: Option<String>,
    /// Render mode as written (`SwiftUI`, `UIViewController` or `UIView`).
    #[serde(rename = "type")]
    pub render_mode: Option<String>,
    pub keep_state_cross_navigation: Option<bool>,
}

/// Arguments of the render-target override annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CustomRenderTarget {
    pub composable_fqn: Option<String>,
}

/// A value parameter as reported by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawParameter {
    pub name: Option<String>,
    pub ty: KotlinType,
    pub modifiers: Vec<ParamModifier>,
}

impl RawParameter {
    pub fn new(name: impl Into<String>, ty: KotlinType) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            modifiers: Vec::new(),
        }
    }
}

/// A function carrying the bridge annotation, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawDeclaration {
    pub name: String,
    pub is_expect: bool,
    pub visibility: Option<RawVisibility>,
    pub file: Option<SourceFile>,
    pub annotations: Vec<AnnotationRef>,
    pub type_parameters: Vec<String>,
    pub bridge: BridgeAnnotation,
    pub custom_render_target: Option<CustomRenderTarget>,
    pub parameters: Vec<RawParameter>,
}

impl RawDeclaration {
    /// A public `expect` declaration in `file` with default annotation arguments.
    pub fn new(name: impl Into<String>, file: SourceFile) -> Self {
        Self {
            name: name.into(),
            is_expect: true,
            visibility: Some(RawVisibility::Public),
            file: Some(file),
            annotations: Vec::new(),
            type_parameters: Vec::new(),
            bridge: BridgeAnnotation::default(),
            custom_render_target: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: RawParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_without_modifier() {
        assert_eq!(RawVisibility::Internal.to_modifier(), Some(Visibility::Internal));
        assert_eq!(RawVisibility::JavaPackage.to_modifier(), None);
        assert_eq!(RawVisibility::Local.to_modifier(), None);
    }

    #[test]
    fn test_new_declaration_defaults() {
        let decl = RawDeclaration::new("ShowMap", SourceFile::new("Map.kt", "com.example"))
            .with_parameter(RawParameter::new("title", KotlinType::class("kotlin.String")));

        assert!(decl.is_expect);
        assert_eq!(decl.visibility, Some(RawVisibility::Public));
        assert_eq!(decl.bridge, BridgeAnnotation::default());
        assert_eq!(decl.parameters.len(), 1);
    }
}
