//! Core utilities and types for the viewbridge generator.
//!
//! This crate provides fundamental types and utilities used across
//! the viewbridge crates: build-target classification, file writing
//! and identifier helpers.

mod file;
mod target;
mod utils;

// File operations
pub use file::{File, GeneratedFile, WriteResult, write_if_changed};
// Build targets
pub use target::{GeneratorTarget, Platform};
// String utilities
pub use utils::{file_stem, is_identifier, package_path, to_pascal_case};
