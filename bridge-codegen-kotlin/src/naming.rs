//! Kotlin-specific naming conventions.

use viewbridge_codegen::language::{NamingConvention, escape_with_backticks};

/// Kotlin naming conventions.
///
/// Only hard keywords are listed; soft and modifier keywords are legal
/// parameter names.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
        "true", "try", "typealias", "typeof", "val", "var", "when", "while",
    ],
    escape_reserved: escape_with_backticks,
};
