//! Named catalogs available to a generation run.

use std::fmt;

use indexmap::IndexMap;

use crate::{AliasSource, Error, Result};

/// Catalogs known to a run, looked up by name.
///
/// The registry is handed to the generator explicitly; there is no global
/// catalog lookup.
#[derive(Default)]
pub struct CatalogRegistry {
    catalogs: IndexMap<String, Box<dyn AliasSource>>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `source` under `name`, replacing any catalog of that name.
    pub fn register(&mut self, name: impl Into<String>, source: impl AliasSource + 'static) {
        self.catalogs.insert(name.into(), Box::new(source));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, source: impl AliasSource + 'static) -> Self {
        self.register(name, source);
        self
    }

    /// Look up a catalog by name.
    ///
    /// Fails with [`Error::CatalogNotFound`] when no catalog of that name is
    /// registered.
    pub fn named(&self, name: &str) -> Result<&dyn AliasSource> {
        match self.catalogs.get(name) {
            Some(source) => Ok(source.as_ref()),
            None => Err(Error::catalog_not_found(name, self.names())),
        }
    }

    /// Registered catalog names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

impl fmt::Debug for CatalogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogRegistry")
            .field("catalogs", &self.catalogs.keys().collect::<Vec<_>>())
            .finish()
    }
}
