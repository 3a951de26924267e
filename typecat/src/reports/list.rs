//! List command report data structures.

use serde::Serialize;
use typecat_codegen::GeneratedModule;

use super::output::{Output, Report};

/// Aliases and derived accessor names of the listed catalogs.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub catalogs: Vec<GeneratedModule>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.catalogs.is_empty() {
            out.preformatted("No catalogs defined");
            return;
        }

        for (i, module) in self.catalogs.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(module.catalog_name());

            if module.property_count() == 0 {
                out.list_item("(no aliases)");
                continue;
            }

            for accessor in module.accessors() {
                for property in accessor.properties() {
                    out.list_item(&format!(
                        "{:<8} {} -> {}",
                        accessor.category().label(),
                        property.alias(),
                        property.identifier()
                    ));
                }
            }
        }
    }
}
