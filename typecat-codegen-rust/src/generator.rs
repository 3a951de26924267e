use typecat_codegen::{GeneratedModule, LanguageCodegen, NamingConvention};
use typecat_core::GeneratedFile;

use crate::{files::GeneratedCatalogRs, naming::RUST_NAMING};

/// Crate the generated code imports its runtime types from.
pub const DEFAULT_RUNTIME_CRATE: &str = "typecat_catalog";

/// Rust code generator producing accessors over an `AliasSource`
#[derive(Debug, Clone)]
pub struct Generator {
    runtime_crate: String,
}

impl Generator {
    /// A generator importing runtime types from `runtime_crate`, e.g. a
    /// re-export path such as `crate::catalog`.
    pub fn new(runtime_crate: impl Into<String>) -> Self {
        Self {
            runtime_crate: runtime_crate.into(),
        }
    }

    pub fn runtime_crate(&self) -> &str {
        &self.runtime_crate
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME_CRATE)
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn naming(&self) -> &NamingConvention {
        &RUST_NAMING
    }

    fn render(&self, module: &GeneratedModule) -> String {
        GeneratedCatalogRs::new(&self.runtime_crate, module).render()
    }
}
