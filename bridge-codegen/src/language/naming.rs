//! Naming conventions for the generated languages.

/// Language-specific identifier rules.
///
/// Parameter names come from the primary-language source and are reused
/// verbatim on both sides; a name that is legal in one language can still be
/// reserved in the other.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "protocol" -> "`protocol`" in Swift)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }
}

/// Escape with backticks, valid in both Kotlin and Swift.
pub fn escape_with_backticks(name: &str) -> String {
    format!("`{}`", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_NAMING: NamingConvention = NamingConvention {
        reserved_words: &["fun", "val"],
        escape_reserved: escape_with_backticks,
    };

    #[test]
    fn test_safe_name() {
        assert_eq!(TEST_NAMING.safe_name("title"), "title");
        assert_eq!(TEST_NAMING.safe_name("fun"), "`fun`");
        assert!(TEST_NAMING.is_reserved("val"));
    }
}
