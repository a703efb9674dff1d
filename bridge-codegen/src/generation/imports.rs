//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Symbols within a module are kept sorted; [`sorted`](Self::sorted) also
/// orders the modules so rendered import lists are stable.
///
/// # Example
///
/// ```
/// use viewbridge_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("androidx.compose.runtime", "remember");
/// imports.add("androidx.compose.runtime", "Composable");
/// imports.add("androidx.compose.ui", "Modifier");
///
/// for (package, symbols) in imports.sorted() {
///     for symbol in symbols {
///         println!("import {}.{}", package, symbol);
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a whole-module import (e.g., `import SwiftUI`).
    pub fn add_module(&mut self, module: &str) {
        self.imports.entry(module.to_string()).or_default();
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All imports ordered by module name.
    pub fn sorted(&self) -> Vec<(&str, &BTreeSet<String>)> {
        let mut modules: Vec<_> = self.iter().collect();
        modules.sort_by_key(|(module, _)| *module);
        modules
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("androidx.compose.runtime", "remember");
        imports.add("androidx.compose.runtime", "Composable");
        imports.add("androidx.compose.ui", "Modifier");

        assert!(imports.has_module("androidx.compose.runtime"));
        assert!(imports.has_symbol("androidx.compose.runtime", "remember"));
        assert!(!imports.has_symbol("androidx.compose.runtime", "key"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_sorted_orders_modules_and_symbols() {
        let mut imports = ImportCollector::new();
        imports.add_module("UIKit");
        imports.add_module("SwiftUI");
        imports.add("Foundation", "NSObject");
        imports.add("Foundation", "Data");

        let sorted = imports.sorted();
        let modules: Vec<_> = sorted.iter().map(|(m, _)| *m).collect();
        assert_eq!(modules, ["Foundation", "SwiftUI", "UIKit"]);

        let symbols: Vec<_> = sorted[0].1.iter().map(String::as_str).collect();
        assert_eq!(symbols, ["Data", "NSObject"]);
    }

    #[test]
    fn test_import_collector_merge() {
        let mut a = ImportCollector::new();
        a.add("kotlin.native", "ObjCName");

        let mut b = ImportCollector::new();
        b.add("kotlin.native", "HiddenFromObjC");
        b.add("androidx.compose.ui", "Modifier");

        a.merge(&b);

        assert!(a.has_symbol("kotlin.native", "ObjCName"));
        assert!(a.has_symbol("kotlin.native", "HiddenFromObjC"));
        assert!(a.has_module("androidx.compose.ui"));
    }
}
