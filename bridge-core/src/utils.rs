//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "mapTitle" -> "MapTitle", "map_title" -> "MapTitle")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Check whether `s` is a plain identifier usable in both Kotlin and Swift
/// declarations (ASCII letters, digits and underscores, not starting with a digit).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// File name without directories and without its last extension
/// (e.g., "src/commonMain/kotlin/ShowMap.kt" -> "ShowMap").
pub fn file_stem(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}

/// Directory path for a dotted package name (e.g., "com.example" -> "com/example").
pub fn package_path(package: &str) -> String {
    package.split('.').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("title"), "Title");
        assert_eq!(to_pascal_case("mapTitle"), "MapTitle");
        assert_eq!(to_pascal_case("map_title"), "MapTitle");
        assert_eq!(to_pascal_case("on-click"), "OnClick");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("NativeView"));
        assert!(is_identifier("_private2"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("Native View"));
        assert!(!is_identifier("com.example"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("src/commonMain/kotlin/ShowMap.kt"), "ShowMap");
        assert_eq!(file_stem("ShowMap.kt"), "ShowMap");
        assert_eq!(file_stem("C:\\src\\Views.kt"), "Views");
        assert_eq!(file_stem("Makefile"), "Makefile");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }

    #[test]
    fn test_package_path() {
        assert_eq!(package_path("com.example.map"), "com/example/map");
        assert_eq!(package_path(""), "");
    }
}
