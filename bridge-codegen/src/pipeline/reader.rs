//! Validation and normalization of raw declarations.

use viewbridge_core::is_identifier;
use viewbridge_ir::{
    ClassName, ParameterInfo, RawDeclaration, RenderMode, SourceFile, ViewDeclaration,
};
use viewbridge_manifest::BridgeOptions;

use super::Diagnostic;

const PHASE: &str = "read";

/// The layout-modifier type whose parameter becomes the handle slot.
pub const MODIFIER_FQN: &str = "androidx.compose.ui.Modifier";

/// Settings the reader takes from the host option map.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    pub default_factory_name: String,
    /// Render target for controller-hosted modes.
    pub view_controller_target: ClassName,
    /// Render target for bare views.
    pub ui_view_target: ClassName,
}

impl ReaderOptions {
    pub fn from_options(options: &BridgeOptions) -> Self {
        Self {
            default_factory_name: options.default_factory_name().to_string(),
            view_controller_target: ClassName::from_fqn(options.view_controller_interop_fqn()),
            ui_view_target: ClassName::from_fqn(options.ui_view_interop_fqn()),
        }
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self::from_options(&BridgeOptions::default())
    }
}

/// Turns [`RawDeclaration`]s into [`ViewDeclaration`]s.
///
/// Rules are checked in a fixed order and the first violation drops the
/// declaration with an error diagnostic naming it.
#[derive(Debug, Clone, Default)]
pub struct DeclarationReader {
    options: ReaderOptions,
}

impl DeclarationReader {
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    pub fn read(
        &self,
        raw: &RawDeclaration,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<ViewDeclaration> {
        let name = raw.name.as_str();
        let location = raw
            .file
            .as_ref()
            .map_or_else(|| name.to_string(), |f| f.path.clone());
        let mut reject = |code: &'static str, message: String| {
            diagnostics.push(
                Diagnostic::error(PHASE, format!("{}: {}", name, message))
                    .with_code(code)
                    .at(location.clone()),
            );
            None
        };

        if !raw.is_expect {
            return reject("not-stub", "does not support non-stub declarations".into());
        }

        let Some(file) = raw.file.as_ref() else {
            return reject(
                "missing-file",
                "declaration is not contained in a source file".into(),
            );
        };

        let visibility = match raw.visibility {
            Some(v) => match v.to_modifier() {
                Some(visibility) => visibility,
                None => {
                    return reject(
                        "unrecognized-visibility",
                        format!("visibility '{}' has no source modifier", v.as_str()),
                    );
                }
            },
            None => {
                return reject(
                    "unrecognized-visibility",
                    "visibility could not be resolved".into(),
                );
            }
        };

        let mut parameters = Vec::with_capacity(raw.parameters.len());
        for (index, param) in raw.parameters.iter().enumerate() {
            let Some(param_name) = param.name.as_ref() else {
                return reject(
                    "unnamed-parameter",
                    format!("unsupported function parameter #{} without name", index + 1),
                );
            };
            parameters.push(ParameterInfo {
                name: param_name.clone(),
                ty: param.ty.clone(),
                is_view_handle_slot: param.ty.is_class(MODIFIER_FQN),
                modifiers: param.modifiers.clone(),
            });
        }

        let factory_group = raw
            .bridge
            .factory_name
            .clone()
            .unwrap_or_else(|| self.options.default_factory_name.clone());
        if !is_identifier(&factory_group) {
            return reject(
                "invalid-factory-group",
                format!("factory name '{}' is not a valid identifier", factory_group),
            );
        }

        let render_mode = self.render_mode(raw, &location, diagnostics);

        if !parameters.iter().any(|p| p.is_view_handle_slot) {
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!(
                        "{}: no parameter of type {}; the render target receives a default Modifier",
                        name, MODIFIER_FQN
                    ),
                )
                .with_code("missing-handle-slot")
                .at(location.clone()),
            );
        }

        let custom_render_target = raw
            .custom_render_target
            .as_ref()
            .and_then(|target| target.composable_fqn.as_deref())
            .map(str::trim)
            .filter(|fqn| !fqn.is_empty())
            .map(str::to_string);

        let render_target = match &custom_render_target {
            Some(fqn) => ClassName::from_fqn(fqn),
            None if render_mode.is_controller_hosted() => {
                self.options.view_controller_target.clone()
            }
            None => self.options.ui_view_target.clone(),
        };

        tracing::trace!(declaration = name, group = %factory_group, "read declaration");

        Some(ViewDeclaration {
            name: name.to_string(),
            parameters,
            factory_group,
            render_mode,
            retain_across_navigation: raw.bridge.keep_state_cross_navigation.unwrap_or(false),
            render_target,
            custom_render_target,
            visibility,
            file: SourceFile::clone(file),
            annotations: raw.annotations.clone(),
            type_parameters: raw.type_parameters.clone(),
        })
    }

    fn render_mode(
        &self,
        raw: &RawDeclaration,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> RenderMode {
        let Some(value) = raw.bridge.render_mode.as_deref() else {
            return RenderMode::ObservedObject;
        };
        RenderMode::from_annotation(value).unwrap_or_else(|| {
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!(
                        "{}: unknown view type '{}', falling back to {}",
                        raw.name,
                        value,
                        RenderMode::ObservedObject.annotation_name()
                    ),
                )
                .with_code("unknown-render-mode")
                .at(location),
            );
            RenderMode::ObservedObject
        })
    }
}
