//! Swift source files produced for the primary target.

mod binding;
mod observable;
mod protocol;

pub use binding::BindingFile;
pub use observable::ObservableFile;
pub use protocol::ProtocolFile;

use viewbridge_ir::RenderMode;

pub const GENERATED_HEADER: &str = "// Code generated by viewbridge. DO NOT EDIT.";

pub const SWIFT_UI: &str = "SwiftUI";
pub const UI_KIT: &str = "UIKit";

/// UIKit type of the view handle for a render mode.
pub fn handle_type(mode: RenderMode) -> &'static str {
    if mode.is_controller_hosted() {
        "UIViewController"
    } else {
        "UIView"
    }
}
