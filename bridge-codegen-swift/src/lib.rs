//! Swift sources for bridged view declarations.
//!
//! For every factory group the application gets a `<G>Factory` protocol to
//! implement and a `Foreign<G>Factory` class that adapts it to the Kotlin
//! factory interface. Observed-object declarations also get an observable
//! delegate a SwiftUI view can watch.

mod generator;
mod mapping;
mod naming;
mod swift_file;
mod type_mapper;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use mapping::{MappedDeclaration, MappedParam, map_groups};
pub use naming::SWIFT_NAMING;
pub use swift_file::SwiftFile;
pub use type_mapper::SwiftTypeMapper;
pub use viewbridge_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
