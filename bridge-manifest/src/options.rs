//! Host option map and target classification.

use std::path::PathBuf;

use indexmap::IndexMap;
use viewbridge_core::{GeneratorTarget, Platform};

use crate::{Error, Result};

/// Option keys recognized in `[options]` and `--option`.
pub mod keys {
    pub const DEFAULT_FACTORY_NAME: &str = "viewbridge.defaultFactoryName";
    pub const TARGET_NAME: &str = "viewbridge.targetName";
    pub const SWIFT_OUTPUT_PATH: &str = "viewbridge.swiftOutputPath";
    pub const VIEW_CONTROLLER_INTEROP_FQN: &str =
        "viewbridge.defaultViewControllerInteropComposableFqn";
    pub const UI_VIEW_INTEROP_FQN: &str = "viewbridge.defaultUiKitViewInteropComposableFqn";
    pub const RUNTIME_PACKAGE: &str = "viewbridge.runtimePackage";
    pub const SWIFT_FRAMEWORK_MODULE: &str = "viewbridge.swiftFrameworkModule";
}

pub const DEFAULT_FACTORY_NAME: &str = "NativeView";
pub const DEFAULT_VIEW_CONTROLLER_INTEROP_FQN: &str =
    "androidx.compose.ui.interop.UIKitViewController";
pub const DEFAULT_UI_VIEW_INTEROP_FQN: &str = "androidx.compose.ui.interop.UIKitView";
pub const DEFAULT_RUNTIME_PACKAGE: &str = "dev.viewbridge";

/// Keyword a target name must contain to be classified as the primary platform.
const PRIMARY_TARGET_KEYWORD: &str = "ios";

/// Typed view over the string option map.
///
/// Blank values count as absent, so an option can be cleared from the
/// command line with `--option key=`.
#[derive(Debug, Clone, Default)]
pub struct BridgeOptions {
    values: IndexMap<String, String>,
}

impl BridgeOptions {
    pub fn new(values: IndexMap<String, String>) -> Self {
        Self { values }
    }

    /// Apply overrides on top of the current values; later entries win.
    pub fn merge(&mut self, overrides: impl IntoIterator<Item = (String, String)>) {
        self.values.extend(overrides);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn default_factory_name(&self) -> &str {
        self.get(keys::DEFAULT_FACTORY_NAME)
            .unwrap_or(DEFAULT_FACTORY_NAME)
    }

    pub fn view_controller_interop_fqn(&self) -> &str {
        self.get(keys::VIEW_CONTROLLER_INTEROP_FQN)
            .unwrap_or(DEFAULT_VIEW_CONTROLLER_INTEROP_FQN)
    }

    pub fn ui_view_interop_fqn(&self) -> &str {
        self.get(keys::UI_VIEW_INTEROP_FQN)
            .unwrap_or(DEFAULT_UI_VIEW_INTEROP_FQN)
    }

    pub fn runtime_package(&self) -> &str {
        self.get(keys::RUNTIME_PACKAGE)
            .unwrap_or(DEFAULT_RUNTIME_PACKAGE)
    }

    pub fn swift_framework_module(&self) -> Option<&str> {
        self.get(keys::SWIFT_FRAMEWORK_MODULE)
    }

    /// Classify the current compilation from its platforms and target name.
    pub fn classify_target(&self, platforms: &[Platform]) -> Result<GeneratorTarget> {
        match platforms {
            [] => Err(Error::missing_option(
                "platforms",
                "declare at least one platform in bridge.toml or pass --platform",
            )),
            [_, _, ..] => Ok(GeneratorTarget::Common),
            [platform] if !platform.is_native() => Ok(GeneratorTarget::Other),
            [_] => {
                let target_name = self.get(keys::TARGET_NAME).ok_or_else(|| {
                    Error::missing_option(
                        keys::TARGET_NAME,
                        "native compilations must name their target, e.g. 'iosArm64'",
                    )
                })?;
                if target_name
                    .to_ascii_lowercase()
                    .contains(PRIMARY_TARGET_KEYWORD)
                {
                    Ok(GeneratorTarget::Primary)
                } else {
                    Ok(GeneratorTarget::Other)
                }
            }
        }
    }

    /// Output directory for the foreign-language files.
    pub fn swift_output_path(&self) -> Result<PathBuf> {
        self.get(keys::SWIFT_OUTPUT_PATH)
            .map(PathBuf::from)
            .ok_or_else(|| {
                Error::missing_option(
                    keys::SWIFT_OUTPUT_PATH,
                    "the primary target emits Swift sources and needs a directory for them",
                )
            })
    }
}

/// Parse a `key=value` command line override.
pub fn parse_override(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}
