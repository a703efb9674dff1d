//! Build target classification.

use serde::Deserialize;

/// The compilation a generator run belongs to.
///
/// The same declarations produce different output per target: the shared
/// source set only sees `expect` stubs, the UI-hosting platform gets the
/// concrete bridge, every other platform gets empty `actual` stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorTarget {
    /// Shared (multi-platform) source set.
    Common,
    /// The platform able to host the native view handles.
    Primary,
    /// Any other single-platform compilation.
    Other,
}

impl GeneratorTarget {
    /// Suffix appended to per-target file names, before the extension.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            GeneratorTarget::Common => "",
            GeneratorTarget::Primary => ".primary",
            GeneratorTarget::Other => ".nonprimary",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorTarget::Common => "common",
            GeneratorTarget::Primary => "primary",
            GeneratorTarget::Other => "other",
        }
    }
}

impl std::fmt::Display for GeneratorTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform participating in the current compilation, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Jvm,
    Js,
    Native,
    Wasm,
}

impl Platform {
    pub fn is_native(&self) -> bool {
        matches!(self, Platform::Native)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Jvm => "jvm",
            Platform::Js => "js",
            Platform::Native => "native",
            Platform::Wasm => "wasm",
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jvm" => Ok(Platform::Jvm),
            "js" => Ok(Platform::Js),
            "native" => Ok(Platform::Native),
            "wasm" => Ok(Platform::Wasm),
            other => Err(format!(
                "unknown platform '{}', expected one of: jvm, js, native, wasm",
                other
            )),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_suffix_table() {
        assert_eq!(GeneratorTarget::Common.file_suffix(), "");
        assert_eq!(GeneratorTarget::Primary.file_suffix(), ".primary");
        assert_eq!(GeneratorTarget::Other.file_suffix(), ".nonprimary");
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("native".parse::<Platform>(), Ok(Platform::Native));
        assert_eq!("JVM".parse::<Platform>(), Ok(Platform::Jvm));
        assert!("android".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_is_native() {
        assert!(Platform::Native.is_native());
        assert!(!Platform::Wasm.is_native());
    }
}
