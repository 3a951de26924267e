use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Header placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Code generated by typecat. DO NOT EDIT.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing whatever is there
    fn write(&self, base: &Path) -> io::Result<WriteResult> {
        write_file(&self.path(base), &self.render())
    }
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// The file is always rewritten, even when its content is unchanged, so the
/// modification time moves forward on every run.
fn write_file(path: &Path, content: &str) -> io::Result<WriteResult> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let result = match fs::read(path) {
        Ok(previous) if previous == content.as_bytes() => WriteResult::Unchanged,
        Ok(_) => WriteResult::Updated,
        Err(e) if e.kind() == io::ErrorKind::NotFound => WriteResult::Created,
        Err(e) => return Err(e),
    };

    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), ?result, "wrote file");

    Ok(result)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// The file did not exist before
    Created,
    /// The file existed with different content
    Updated,
    /// The file was rewritten with identical content
    Unchanged,
}

impl WriteResult {
    /// Short lowercase label for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        }
    }
}

/// A file to be generated
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

    /// Write the file, overwriting any existing content
    pub fn write(&self) -> io::Result<WriteResult> {
        write_file(&self.path, &self.content)
    }
}
