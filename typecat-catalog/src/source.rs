//! The alias source contract.

use crate::{
    ArtifactRef, BundleDependency, Category, LibraryDependency, PluginDependency, Result,
    VersionConstraint,
};

/// Supplies a catalog's aliases and resolves them.
///
/// Generation only needs [`list_aliases`](AliasSource::list_aliases); the
/// generated accessors call [`resolve`](AliasSource::resolve) (through
/// [`VersionCatalog`]) when they are used.
pub trait AliasSource {
    /// Aliases of `category` in declaration order.
    fn list_aliases(&self, category: Category) -> Vec<&str>;

    /// Resolve `alias` within `category`.
    ///
    /// Fails with [`Error::AliasNotFound`](crate::Error::AliasNotFound) when
    /// the alias is not declared.
    fn resolve(&self, category: Category, alias: &str) -> Result<ArtifactRef>;
}

/// Typed lookups over any [`AliasSource`].
///
/// Each lookup returns `None` when the alias is missing, leaving the caller
/// to decide how to report it.
pub trait VersionCatalog: AliasSource {
    fn find_version(&self, alias: &str) -> Option<VersionConstraint> {
        match self.resolve(Category::Version, alias) {
            Ok(ArtifactRef::Version(version)) => Some(version),
            _ => None,
        }
    }

    fn find_library(&self, alias: &str) -> Option<LibraryDependency> {
        match self.resolve(Category::Library, alias) {
            Ok(ArtifactRef::Library(library)) => Some(library),
            _ => None,
        }
    }

    fn find_bundle(&self, alias: &str) -> Option<BundleDependency> {
        match self.resolve(Category::Bundle, alias) {
            Ok(ArtifactRef::Bundle(bundle)) => Some(bundle),
            _ => None,
        }
    }

    fn find_plugin(&self, alias: &str) -> Option<PluginDependency> {
        match self.resolve(Category::Plugin, alias) {
            Ok(ArtifactRef::Plugin(plugin)) => Some(plugin),
            _ => None,
        }
    }
}

impl<S: AliasSource + ?Sized> VersionCatalog for S {}
