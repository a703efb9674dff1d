//! Cross-language type mapping.

use viewbridge_ir::KotlinType;

/// Where a mapped type is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePosition {
    /// A parameter of a generated function.
    Parameter,
    /// A stored property.
    Property,
    /// The `(view, delegate)` result of a factory method.
    FactoryReturn,
}

/// A primary-language type with no counterpart in the target language.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("type '{ty}' has no {language} counterpart")]
pub struct Unmapped {
    /// The offending type, which may be nested inside the type being mapped.
    pub ty: KotlinType,
    pub language: &'static str,
}

/// Trait for mapping primary-language types into a target language.
///
/// Only a finite subset of types is bridgeable. Anything outside it is
/// reported as [`Unmapped`] rather than guessed.
pub trait TypeMapper {
    /// Target language identifier (e.g., "swift").
    fn language(&self) -> &'static str;

    /// Render `ty` as target-language source text.
    fn map_type(&self, ty: &KotlinType, position: TypePosition) -> Result<String, Unmapped>;

    /// Shorthand for [`TypePosition::Parameter`].
    fn map_parameter(&self, ty: &KotlinType) -> Result<String, Unmapped> {
        self.map_type(ty, TypePosition::Parameter)
    }

    /// Build the error for `ty`.
    fn unmapped(&self, ty: &KotlinType) -> Unmapped {
        Unmapped {
            ty: ty.clone(),
            language: self.language(),
        }
    }
}
