//! Manifest types and parsing for typecat.toml files.

mod file;
mod language;
mod parse;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use file::{CatalogToml, MANIFEST_FILE};
pub use language::Language;

use crate::{Catalog, CatalogRegistry};

/// Catalog generated when none is named.
pub const DEFAULT_CATALOG: &str = "libs";

/// Directory generated sources are written to by default.
pub const DEFAULT_OUTPUT: &str = "build/generated/sources/versionCatalog";

/// Package of the generated Kotlin file by default.
pub const DEFAULT_PACKAGE: &str = "com.example.catalog";

/// Root manifest for typecat.toml
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    /// Generation settings from `[generate]`
    pub generate: GenerateConfig,

    /// Catalogs from `[catalogs.<name>]`, in declaration order
    pub catalogs: IndexMap<String, Catalog>,
}

/// The `[generate]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Name of the catalog to generate accessors for
    pub catalog: String,
    /// Output directory
    pub output: PathBuf,
    /// Target language
    pub language: Language,
    /// Package declared by the generated Kotlin file
    pub package: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            language: Language::default(),
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl Manifest {
    /// Look up a catalog declared in this manifest.
    pub fn catalog(&self, name: &str) -> Option<&Catalog> {
        self.catalogs.get(name)
    }

    /// Catalog names in declaration order.
    pub fn catalog_names(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    /// A registry holding every catalog of this manifest.
    pub fn registry(&self) -> CatalogRegistry {
        let mut registry = CatalogRegistry::new();
        for (name, catalog) in &self.catalogs {
            registry.register(name.clone(), catalog.clone());
        }
        registry
    }
}
