//! Kotlin AST builders for generating declarations.
//!
//! Types are plain strings already resolved against a
//! [`KotlinFile`](crate::KotlinFile), which owns the import list.

mod annotation;
mod declarations;
mod fun;

pub use annotation::Annotation;
pub use declarations::{Interface, Property, TypeAlias};
pub use fun::{Fun, Param};

fn modifiers_prefix(modifiers: &[String]) -> String {
    modifiers.iter().map(|m| format!("{} ", m)).collect()
}

fn type_parameters_list(type_parameters: &[String]) -> String {
    if type_parameters.is_empty() {
        String::new()
    } else {
        format!("<{}>", type_parameters.join(", "))
    }
}
