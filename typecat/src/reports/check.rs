//! Check command report data structures.

use std::path::PathBuf;

use typecat_catalog::Category;

use super::{
    generate::plural,
    output::{Output, Report},
};

/// Accessor counts of one catalog that built cleanly.
#[derive(Debug)]
pub struct CatalogSummary {
    pub name: String,
    /// Number of accessors per category, in category order.
    pub counts: Vec<(Category, usize)>,
}

impl CatalogSummary {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Catalog selected by `[generate]`.
    pub selected: String,
    /// Catalogs whose accessors could be derived.
    pub catalogs: Vec<CatalogSummary>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));

        for catalog in &self.catalogs {
            out.newline();
            let marker = if catalog.name == self.selected {
                " [generate]"
            } else {
                ""
            };
            out.section(&format!(
                "{}{} ({} accessor{})",
                catalog.name,
                marker,
                catalog.total(),
                plural(catalog.total())
            ));
            for (category, count) in &catalog.counts {
                out.key_value_indented(category.field_name(), &count.to_string());
            }
        }
    }
}
