//! Shared code generation utilities for the viewbridge generators.
//!
//! This crate provides the language-agnostic half of the bridge generator,
//! used by the language surfaces (`viewbridge-codegen-kotlin`,
//! `viewbridge-codegen-swift`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`naming`] - Name derivation shared by every generator
//! - [`pipeline`] - Declaration reading, sessions, diagnostics and lints
//! - [`generation`] - Output management (FileRegistry, ImportCollector, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`testing`] - Declaration fixtures (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod naming;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
