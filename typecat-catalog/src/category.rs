//! Catalog categories.

use std::fmt;

use serde::Serialize;

/// The four alias namespaces of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Version strings
    Version,
    /// Library coordinates
    Library,
    /// Bundles of libraries
    Bundle,
    /// Plugin coordinates
    Plugin,
}

impl Category {
    /// Every category, in the order generated code declares them.
    pub const ALL: [Category; 4] = [
        Category::Version,
        Category::Library,
        Category::Bundle,
        Category::Plugin,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Version => 0,
            Category::Library => 1,
            Category::Bundle => 2,
            Category::Plugin => 3,
        }
    }

    /// Label used in messages, e.g. `"Version alias 'x' not found"`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Version => "Version",
            Category::Library => "Library",
            Category::Bundle => "Bundle",
            Category::Plugin => "Plugin",
        }
    }

    /// Name of the generated type holding this category's accessors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Category::Version => "Versions",
            Category::Library => "Libraries",
            Category::Bundle => "Bundles",
            Category::Plugin => "Plugins",
        }
    }

    /// Name of the field exposing this category on `GeneratedCatalog`,
    /// also the table name in typecat.toml.
    pub fn field_name(&self) -> &'static str {
        match self {
            Category::Version => "versions",
            Category::Library => "libraries",
            Category::Bundle => "bundles",
            Category::Plugin => "plugins",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
