//! Accessors generated from `fixtures/typecat.toml` by the build script,
//! compiled as ordinary Rust.
//!
//! The generated file only sees the catalog through `AliasSource`, so tests
//! can hand it any catalog, including one that lacks aliases the file was
//! generated for.

use std::str::FromStr;

use typecat_catalog::{Catalog, Manifest};

include!(concat!(env!("OUT_DIR"), "/GeneratedCatalog.rs"));

/// The fixture catalog the accessors were generated from.
pub fn fixture_catalog() -> typecat_catalog::Result<Catalog> {
    let manifest = Manifest::from_str(include_str!("../fixtures/typecat.toml"))?;
    match manifest.catalogs.get(&manifest.generate.catalog) {
        Some(catalog) => Ok(catalog.clone()),
        None => Err(typecat_catalog::Error::catalog_not_found(
            &manifest.generate.catalog,
            manifest.catalog_names(),
        )),
    }
}
