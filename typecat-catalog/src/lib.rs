//! Catalog model for typecat.
//!
//! Holds the alias categories and the values they resolve to, the
//! [`AliasSource`] contract generation reads from, the in-memory [`Catalog`]
//! and [`CatalogRegistry`], the support types generated accessors are built
//! on ([`VersionCatalog`], [`Provider`], [`ArgumentError`]), and loading of
//! `typecat.toml` manifests.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod artifact;
mod catalog;
mod category;
mod error;
mod manifest;
mod provider;
mod registry;
mod source;
mod validate;

pub use artifact::{
    ArtifactRef, BundleDependency, LibraryDependency, PluginDependency, VersionConstraint,
};
pub use catalog::Catalog;
pub use category::Category;
pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CatalogToml, DEFAULT_CATALOG, DEFAULT_OUTPUT, DEFAULT_PACKAGE, GenerateConfig, Language,
    MANIFEST_FILE, Manifest,
};
pub use provider::{ArgumentError, Provider};
pub use registry::CatalogRegistry;
pub use source::{AliasSource, VersionCatalog};
pub use validate::{KOTLIN_KEYWORDS, validate_package};
