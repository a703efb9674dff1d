use std::path::{Path, PathBuf};

use eyre::Result;

/// A generated source file.
pub trait GeneratedFile {
    /// Path relative to the output directory, `/`-separated.
    fn path(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file under `base`, leaving identical content untouched.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_if_changed(&base.join(self.path()), &self.render())
    }
}

/// Write `content` to `path` unless the file already holds exactly that content.
///
/// Generated sources feed an incremental build, so identical regenerations must
/// leave the file (and its modification time) untouched.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    if let Ok(existing) = std::fs::read_to_string(path)
        && existing == content
    {
        tracing::trace!(path = %path.display(), "unchanged");
        return Ok(WriteResult::Unchanged);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "written");
    Ok(WriteResult::Written)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content
    Unchanged,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, leaving identical content untouched.
    pub fn write(&self) -> Result<WriteResult> {
        write_if_changed(&self.path, &self.content)
    }
}
