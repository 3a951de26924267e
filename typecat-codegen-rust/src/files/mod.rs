pub use typecat_core::GENERATED_HEADER;

mod generated_catalog_rs;

pub use generated_catalog_rs::GeneratedCatalogRs;
