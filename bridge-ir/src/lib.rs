//! Intermediate representation types for the viewbridge generator.
//!
//! This crate provides the type definitions shared across the generation
//! pipeline:
//!
//! ```text
//! bridge.toml → bridge-manifest (RawDeclaration) → DeclarationReader (ViewDeclaration) → codegen
//! ```
//!
//! - [`RawDeclaration`] is what the host resolver hands over: names, typed
//!   parameters and annotation arguments, any of which may be missing.
//! - [`ViewDeclaration`] is the validated, normalized record every generator
//!   reads. It is never mutated after construction.
//!
//! The IR types are language-agnostic apart from [`KotlinType`], which is the
//! primary language's type system as reported by the resolver.

mod declaration;
mod types;
mod view;

pub use declaration::{
    AnnotationRef, BridgeAnnotation, CustomRenderTarget, ParamModifier, RawDeclaration,
    RawParameter, RawVisibility, SourceFile,
};
pub use types::{ClassName, KotlinType, TypeArgument};
pub use view::{ParameterInfo, RenderMode, ViewDeclaration, Visibility};
