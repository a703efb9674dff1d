//! Swift-specific naming conventions.

use viewbridge_codegen::language::{NamingConvention, escape_with_backticks};

/// Swift naming conventions.
///
/// Keywords that cannot be used as parameter names without backticks.
pub const SWIFT_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        // Declarations
        "associatedtype",
        "class",
        "deinit",
        "enum",
        "extension",
        "fileprivate",
        "func",
        "import",
        "init",
        "inout",
        "internal",
        "let",
        "open",
        "operator",
        "private",
        "protocol",
        "public",
        "rethrows",
        "static",
        "struct",
        "subscript",
        "typealias",
        "var",
        // Statements
        "break",
        "case",
        "continue",
        "default",
        "defer",
        "do",
        "else",
        "fallthrough",
        "for",
        "guard",
        "if",
        "in",
        "repeat",
        "return",
        "switch",
        "where",
        "while",
        // Expressions and types
        "as",
        "Any",
        "catch",
        "false",
        "is",
        "nil",
        "self",
        "Self",
        "super",
        "throw",
        "throws",
        "true",
        "try",
    ],
    escape_reserved: escape_with_backticks,
};
