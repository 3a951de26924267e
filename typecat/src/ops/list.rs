//! List operation - aliases and their derived accessor names.

use typecat_catalog::Manifest;
use typecat_codegen::{GenerateError, GeneratedModule};

use crate::reports::ListReport;

/// Execute the list operation for one catalog, or every catalog when
/// `catalog` is `None`.
pub fn list(manifest: &Manifest, catalog: Option<&str>) -> Result<ListReport, GenerateError> {
    let catalogs = match catalog {
        Some(name) => {
            let registry = manifest.registry();
            vec![GeneratedModule::build(name, registry.named(name)?)?]
        }
        None => manifest
            .catalogs
            .iter()
            .map(|(name, catalog)| GeneratedModule::build(name, catalog))
            .collect::<Result<_, _>>()?,
    };

    Ok(ListReport { catalogs })
}
