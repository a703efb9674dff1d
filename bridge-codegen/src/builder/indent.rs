//! Indentation of generated sources.

/// One level of indentation in a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Kotlin official code style.
    pub const KOTLIN: Self = Self("    ");

    /// Xcode default.
    pub const SWIFT: Self = Self("    ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_languages_use_four_spaces() {
        assert_eq!(Indent::KOTLIN.as_str(), "    ");
        assert_eq!(Indent::SWIFT, Indent::KOTLIN);
    }
}
