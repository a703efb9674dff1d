//! Kotlin source files produced for each build target.

mod call_site;
mod compositions;
mod delegate;
mod raw_factory;

pub use call_site::CallSiteFile;
pub use compositions::CompositionsFile;
pub use delegate::DelegateFile;
pub use raw_factory::RawFactoryFile;

use viewbridge_core::package_path;
use viewbridge_ir::RenderMode;

pub const GENERATED_HEADER: &str = "// Code generated by viewbridge. DO NOT EDIT.";

/// Qualified names the generated sources refer to.
pub mod symbols {
    pub const REMEMBER: &str = "androidx.compose.runtime.remember";
    pub const REMEMBER_SAVEABLE: &str = "androidx.compose.runtime.saveable.rememberSaveable";
    pub const VIEW_MODEL: &str = "androidx.lifecycle.viewmodel.compose.viewModel";
    pub const RANDOM: &str = "kotlin.random.Random";
    pub const PAIR: &str = "kotlin.Pair";
    pub const OPT_IN: &str = "kotlin.OptIn";
    pub const EXPERIMENTAL_FOREIGN_API: &str = "kotlinx.cinterop.ExperimentalForeignApi";
    pub const PROVIDABLE_COMPOSITION_LOCAL: &str =
        "androidx.compose.runtime.ProvidableCompositionLocal";
    pub const COMPOSITION_LOCAL_OF: &str = "androidx.compose.runtime.compositionLocalOf";
    pub const UI_VIEW_CONTROLLER: &str = "platform.UIKit.UIViewController";
    pub const UI_VIEW: &str = "platform.UIKit.UIView";
}

/// Platform handle type returned by the raw factory for a render mode.
pub fn handle_type(mode: RenderMode) -> &'static str {
    if mode.is_controller_hosted() {
        symbols::UI_VIEW_CONTROLLER
    } else {
        symbols::UI_VIEW
    }
}

/// `<package dirs>/<file name>`
fn source_path(package: &str, file_name: &str) -> String {
    let dir = package_path(package);
    if dir.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", dir, file_name)
    }
}

/// `Name` or `Name<A, B>`.
fn with_type_parameters(name: String, type_parameters: &[String]) -> String {
    if type_parameters.is_empty() {
        name
    } else {
        format!("{}<{}>", name, type_parameters.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_path() {
        assert_eq!(source_path("com.example", "ShowMap.primary.kt"), "com/example/ShowMap.primary.kt");
        assert_eq!(source_path("", "ShowMap.primary.kt"), "ShowMap.primary.kt");
    }

    #[test]
    fn test_handle_type() {
        assert_eq!(handle_type(RenderMode::ObservedObject), symbols::UI_VIEW_CONTROLLER);
        assert_eq!(handle_type(RenderMode::ViewHandle), symbols::UI_VIEW_CONTROLLER);
        assert_eq!(handle_type(RenderMode::RawView), symbols::UI_VIEW);
    }
}
