//! Core operations.
//!
//! This module contains the business logic for bridge commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
mod session;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use session::finish;
