//! Serde schema mirroring the bridge.toml layout.

use indexmap::IndexMap;
use serde::Deserialize;
use toml::Spanned;
use viewbridge_core::Platform;
use viewbridge_ir::{BridgeAnnotation, CustomRenderTarget, ParamModifier, RawVisibility};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ManifestToml {
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub options: IndexMap<String, String>,
    #[serde(default)]
    pub files: Vec<FileToml>,
    /// Declarations the resolver could not attribute to a file.
    #[serde(default)]
    pub declarations: Vec<DeclarationToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileToml {
    pub path: String,
    pub package: Option<Spanned<String>>,
    #[serde(default)]
    pub declarations: Vec<DeclarationToml>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(super) struct DeclarationToml {
    pub name: Spanned<String>,
    #[serde(default = "default_true")]
    pub expect: bool,
    pub visibility: Option<RawVisibility>,
    #[serde(default)]
    pub annotations: Vec<Spanned<String>>,
    #[serde(default)]
    pub type_parameters: Vec<Spanned<String>>,
    #[serde(default = "default_round")]
    pub round: u32,
    #[serde(default)]
    pub bridge: BridgeAnnotation,
    pub custom_render_target: Option<CustomRenderTarget>,
    #[serde(default)]
    pub parameters: Vec<ParameterToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ParameterToml {
    pub name: Option<Spanned<String>>,
    #[serde(rename = "type")]
    pub ty: Spanned<String>,
    #[serde(default)]
    pub modifiers: Vec<ParamModifier>,
}

fn default_true() -> bool {
    true
}

fn default_round() -> u32 {
    1
}
