//! In-memory catalog.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    AliasSource, ArtifactRef, BundleDependency, Category, Error, LibraryDependency,
    PluginDependency, Result, VersionConstraint,
};

/// A catalog held in memory.
///
/// Each category keeps its aliases in insertion order, which is the order
/// generated accessors are declared in. Re-inserting an alias replaces its
/// value but keeps its original position.
///
/// # Example
///
/// ```
/// use typecat_catalog::{AliasSource, Catalog, Category, LibraryDependency};
///
/// let catalog = Catalog::new()
///     .with_version("kotlin", "1.9.0")
///     .with_library("room-runtime", LibraryDependency::new("androidx.room", "room-runtime"));
///
/// assert_eq!(catalog.list_aliases(Category::Version), vec!["kotlin"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    versions: IndexMap<String, VersionConstraint>,
    libraries: IndexMap<String, LibraryDependency>,
    bundles: IndexMap<String, BundleDependency>,
    plugins: IndexMap<String, PluginDependency>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, alias: impl Into<String>, version: impl Into<String>) -> Self {
        self.insert_version(alias, version);
        self
    }

    pub fn with_library(mut self, alias: impl Into<String>, library: LibraryDependency) -> Self {
        self.insert_library(alias, library);
        self
    }

    pub fn with_bundle(mut self, alias: impl Into<String>, bundle: BundleDependency) -> Self {
        self.insert_bundle(alias, bundle);
        self
    }

    pub fn with_plugin(mut self, alias: impl Into<String>, plugin: PluginDependency) -> Self {
        self.insert_plugin(alias, plugin);
        self
    }

    pub fn insert_version(&mut self, alias: impl Into<String>, version: impl Into<String>) {
        self.versions
            .insert(alias.into(), VersionConstraint::new(version));
    }

    pub fn insert_library(&mut self, alias: impl Into<String>, library: LibraryDependency) {
        self.libraries.insert(alias.into(), library);
    }

    pub fn insert_bundle(&mut self, alias: impl Into<String>, bundle: BundleDependency) {
        self.bundles.insert(alias.into(), bundle);
    }

    pub fn insert_plugin(&mut self, alias: impl Into<String>, plugin: PluginDependency) {
        self.plugins.insert(alias.into(), plugin);
    }

    /// Look up a library alias declared in this catalog.
    pub fn library(&self, alias: &str) -> Option<&LibraryDependency> {
        self.libraries.get(alias)
    }

    /// Number of aliases in `category`.
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Version => self.versions.len(),
            Category::Library => self.libraries.len(),
            Category::Bundle => self.bundles.len(),
            Category::Plugin => self.plugins.len(),
        }
    }

    /// Whether the catalog declares no alias at all.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|category| self.len(*category) == 0)
    }
}

impl AliasSource for Catalog {
    fn list_aliases(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Version => self.versions.keys().map(String::as_str).collect(),
            Category::Library => self.libraries.keys().map(String::as_str).collect(),
            Category::Bundle => self.bundles.keys().map(String::as_str).collect(),
            Category::Plugin => self.plugins.keys().map(String::as_str).collect(),
        }
    }

    fn resolve(&self, category: Category, alias: &str) -> Result<ArtifactRef> {
        let found = match category {
            Category::Version => self.versions.get(alias).cloned().map(ArtifactRef::Version),
            Category::Library => self.libraries.get(alias).cloned().map(ArtifactRef::Library),
            Category::Bundle => self.bundles.get(alias).cloned().map(ArtifactRef::Bundle),
            Category::Plugin => self.plugins.get(alias).cloned().map(ArtifactRef::Plugin),
        };

        found.ok_or_else(|| Error::alias_not_found(category, alias))
    }
}
