//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Primary-to-target type mapping
//! - [`NamingConvention`] - Language-specific identifier rules
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;
mod type_mapper;

pub use naming::{NamingConvention, escape_with_backticks};
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::{TypeMapper, TypePosition, Unmapped};
