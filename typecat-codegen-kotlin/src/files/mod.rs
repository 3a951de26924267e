pub use typecat_core::GENERATED_HEADER;

mod generated_catalog_kt;

pub use generated_catalog_kt::GeneratedCatalogKt;
