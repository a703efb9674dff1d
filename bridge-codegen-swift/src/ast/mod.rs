//! Swift AST builders for generating declarations.
//!
//! Types are plain strings produced by the
//! [`SwiftTypeMapper`](crate::SwiftTypeMapper).

mod declarations;
mod func;

pub use declarations::{Class, Property, Protocol};
pub use func::{Func, Param};

fn modifiers_prefix(modifiers: &[String]) -> String {
    modifiers.iter().map(|m| format!("{} ", m)).collect()
}
