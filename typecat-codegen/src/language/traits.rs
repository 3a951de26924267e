//! Language-agnostic code generation traits.

use std::path::PathBuf;

use super::NamingConvention;
use crate::GeneratedModule;

/// Stem of every generated file name.
pub const GENERATED_FILE_STEM: &str = "GeneratedCatalog";

/// Trait for language-specific code generators.
///
/// Implement this trait to emit accessors for a new target language.
/// Rendering is pure: the same module always yields the same text.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "kotlin", "rust")
    fn language(&self) -> &'static str;

    /// File extension of the generated file (e.g., "kt", "rs")
    fn file_extension(&self) -> &'static str;

    /// Naming rules used for generated accessor names
    fn naming(&self) -> &NamingConvention;

    /// Render the whole generated file for `module`
    fn render(&self, module: &GeneratedModule) -> String;

    /// Name of the generated file, e.g. `GeneratedCatalog.kt`
    fn file_name(&self) -> String {
        format!("{}.{}", GENERATED_FILE_STEM, self.file_extension())
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path the file would be written to
    pub path: PathBuf,
    /// File content
    pub content: String,
}
