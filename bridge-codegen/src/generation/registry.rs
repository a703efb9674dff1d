//! File registration pattern for declarative code generation.
//!
//! Generators register every file they produce for a target, then preview
//! or write the registry as a whole.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//!
//! registry.register(FileEntry::generated(&factory, FileCategory::Factory));
//! registry.register(FileEntry::generated(&delegate, FileCategory::Delegate));
//!
//! diagnostics.extend(registry.collision_diagnostics());
//! registry.write_all(&output_dir)?;
//! ```

use std::path::{Path, PathBuf};

use eyre::Result;
use viewbridge_core::{File, GeneratedFile, WriteResult};

use crate::{language::PreviewFile, pipeline::Diagnostic};

/// Category of generated file, determining generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Factory interfaces, aliases and composition locals.
    Factory,
    /// Per-declaration delegate interfaces.
    Delegate,
    /// Per-source-file call-site implementations.
    CallSite,
    /// Foreign-language protocol, binding and observable sources.
    Foreign,
}

/// An entry in the file registry representing a file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    /// File content.
    pub content: String,
    /// Category determining generation order.
    pub category: FileCategory,
}

impl FileEntry {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    /// Render a [`GeneratedFile`] into an entry.
    pub fn generated(file: &impl GeneratedFile, category: FileCategory) -> Self {
        Self::new(file.path(), file.render(), category)
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file to disk.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.full_path(base), self.content.as_str()).write()
    }
}

/// Registry for collecting and managing generated files.
///
/// Entries keep registration order within a category; categories are
/// emitted Factory -> Delegate -> CallSite -> Foreign.
///
/// Paths are unique. The first entry registered for a path is kept and
/// later ones are set aside as collisions.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
    collisions: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file. Returns `false` when its path was already taken.
    pub fn register(&mut self, entry: FileEntry) -> bool {
        if self.get(&entry.path).is_some() {
            tracing::debug!(path = %entry.path, "path already registered");
            self.collisions.push(entry);
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        for entry in entries {
            self.register(entry);
        }
    }

    /// Entries rejected because their path was already registered.
    pub fn collisions(&self) -> &[FileEntry] {
        &self.collisions
    }

    /// One `path-collision` error per rejected entry.
    pub fn collision_diagnostics(&self) -> Vec<Diagnostic> {
        self.collisions
            .iter()
            .map(|entry| {
                Diagnostic::error(
                    "generate",
                    format!(
                        "{} is generated more than once; only the first version is written",
                        entry.path
                    ),
                )
                .with_code("path-collision")
                .at(entry.path.clone())
            })
            .collect()
    }

    /// Get all registered entries, sorted by category.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    pub fn entries_by_category(&self, category: FileCategory) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (returns path and content pairs).
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.entries()
            .map(|e| PreviewFile {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect()
    }

    /// Write all files to the output directory.
    ///
    /// Files are written in category order. Returns statistics about what was written.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base)? {
                WriteResult::Written => stats.written_paths.push(entry.path.clone()),
                WriteResult::Unchanged => stats.unchanged_paths.push(entry.path.clone()),
            }
        }

        tracing::debug!(
            base = %base.display(),
            written = stats.written(),
            unchanged = stats.unchanged(),
            "wrote generated files"
        );
        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Paths of written files.
    pub written_paths: Vec<String>,
    /// Paths of files that already held the generated content.
    pub unchanged_paths: Vec<String>,
}

impl WriteStats {
    pub fn written(&self) -> usize {
        self.written_paths.len()
    }

    pub fn unchanged(&self) -> usize {
        self.unchanged_paths.len()
    }

    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written() + self.unchanged()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use FileCategory::*;

    #[test]
    fn test_registry_ordering() {
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::new("NativeViewFactory.swift", "", Foreign));
        registry.register(FileEntry::new("com/example/ShowMap.primary.kt", "", CallSite));
        registry.register(FileEntry::new("dev/viewbridge/ComposeNativeViewFactory.kt", "", Factory));
        registry.register(FileEntry::new("dev/viewbridge/delegate/ShowMapDelegate.kt", "", Delegate));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "dev/viewbridge/ComposeNativeViewFactory.kt",
                "dev/viewbridge/delegate/ShowMapDelegate.kt",
                "com/example/ShowMap.primary.kt",
                "NativeViewFactory.swift",
            ]
        );
    }

    #[test]
    fn test_registry_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::new("dev/viewbridge/A.kt", "a", Factory));
        registry.register(FileEntry::new("dev/viewbridge/delegate/B.kt", "b", Delegate));

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written(), 2);
        assert_eq!(stats.unchanged(), 0);
        assert!(temp.path().join("dev/viewbridge/delegate/B.kt").exists());
    }

    #[test]
    fn test_rewrite_identical_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("A.kt", "same", Factory));

        registry.write_all(temp.path()).unwrap();
        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written(), 0);
        assert_eq!(stats.unchanged_paths, vec!["A.kt"]);
        assert_eq!(stats.total(), 1);
    }

    #[test]
    fn test_preview_and_lookup() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("a.kt", "content a", Factory));
        registry.register(FileEntry::new("b.kt", "content b", Delegate));

        let preview = registry.preview();

        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].path, "a.kt");
        assert_eq!(registry.get("b.kt").map(|e| e.content.as_str()), Some("content b"));
        assert_eq!(registry.entries_by_category(Delegate).count(), 1);
        assert!(registry.collision_diagnostics().is_empty());
    }

    #[test]
    fn test_duplicate_path_keeps_first() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        let path = "dev/viewbridge/delegate/ShowMapDelegate.kt";

        assert!(registry.register(FileEntry::new(path, "maps", Delegate)));
        assert!(!registry.register(FileEntry::new(path, "native view", Delegate)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.collisions().len(), 1);
        let diagnostics = registry.collision_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].code, Some("path-collision"));
        assert_eq!(diagnostics[0].location.as_deref(), Some(path));

        registry.write_all(temp.path()).unwrap();
        assert_eq!(std::fs::read_to_string(temp.path().join(path)).unwrap(), "maps");
    }
}
