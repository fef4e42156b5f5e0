use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the project root
    fn relative_path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Get the absolute file path under the given base directory
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Write the file to disk, replacing any existing content.
    ///
    /// Returns the path relative to `base`.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        write_file(&self.path(base), &self.render())?;
        Ok(self.relative_path())
    }
}

/// Create a directory and all of its parents.
///
/// An already existing directory is not an error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .wrap_err_with(|| format!("failed to create directory '{}'", path.display()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// A file with precomputed content
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
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

    /// Write the file, creating parent directories as needed
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}
