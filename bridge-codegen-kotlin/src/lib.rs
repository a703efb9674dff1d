//! Kotlin sources for bridged view declarations.
//!
//! For every factory group the common target gets an `expect` factory
//! interface and a composition local; the primary target gets the `actual`
//! factory, one delegate interface per declaration and the `actual`
//! implementations that wire them together; other targets get empty
//! `actual` factories so the common code keeps compiling.

mod generator;
mod kotlin_file;
mod naming;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use kotlin_file::KotlinFile;
pub use naming::KOTLIN_NAMING;
pub use viewbridge_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
