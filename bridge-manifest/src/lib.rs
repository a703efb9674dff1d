// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing of the declarations manifest (`bridge.toml`) and the host option map.
//!
//! The manifest stands in for the host compiler's symbol resolver: it lists
//! the participating platforms, the option map and every resolved declaration
//! carrying the bridge annotation. Malformed input is a fatal, typed
//! [`Error`] rendered through miette; problems with individual declarations
//! are left to the declaration reader.

mod error;
mod manifest;
mod options;
mod type_expr;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, parse_manifest};
pub use options::{
    BridgeOptions, DEFAULT_FACTORY_NAME, DEFAULT_RUNTIME_PACKAGE, DEFAULT_UI_VIEW_INTEROP_FQN,
    DEFAULT_VIEW_CONTROLLER_INTEROP_FQN, keys, parse_override,
};
pub use type_expr::{TypeExprError, parse_type};

impl Manifest {
    /// Typed view over this manifest's `[options]` table.
    pub fn bridge_options(&self) -> BridgeOptions {
        BridgeOptions::new(self.options.clone())
    }
}
