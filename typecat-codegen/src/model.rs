//! The in-memory code model generated files are rendered from.

use std::collections::HashMap;

use serde::Serialize;
use typecat_catalog::{AliasSource, Category};
use typecat_core::{Identifier, convert};

use crate::GenerateError;

/// How an accessor hands out its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    /// Resolved and unwrapped when the accessor is called.
    Eager,
    /// Returns a deferred handle; resolution happens when it is dereferenced.
    Lazy,
}

impl AccessorKind {
    /// Versions are eager, everything else is lazy.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Version => AccessorKind::Eager,
            Category::Library | Category::Bundle | Category::Plugin => AccessorKind::Lazy,
        }
    }
}

/// One generated accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorProperty {
    alias: String,
    identifier: Identifier,
}

impl AccessorProperty {
    /// The catalog alias the accessor looks up.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The language-neutral accessor name.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }
}

/// The accessors of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogAccessor {
    category: Category,
    kind: AccessorKind,
    properties: Vec<AccessorProperty>,
}

impl CatalogAccessor {
    /// Build the accessors of `category` from `source`, in source order.
    fn build(source: &dyn AliasSource, category: Category) -> Result<Self, GenerateError> {
        let aliases = source.list_aliases(category);
        let mut seen: HashMap<Identifier, &str> = HashMap::with_capacity(aliases.len());
        let mut properties = Vec::with_capacity(aliases.len());

        for alias in aliases {
            let identifier = convert(alias);

            if let Some(reason) = identifier.validate() {
                return Err(GenerateError::InvalidIdentifier {
                    category,
                    alias: alias.to_string(),
                    identifier: identifier.into_string(),
                    reason,
                });
            }

            if let Some(first) = seen.get(&identifier) {
                return Err(GenerateError::IdentifierCollision {
                    category,
                    identifier: identifier.into_string(),
                    first: first.to_string(),
                    second: alias.to_string(),
                });
            }

            seen.insert(identifier.clone(), alias);
            properties.push(AccessorProperty {
                alias: alias.to_string(),
                identifier,
            });
        }

        Ok(Self {
            category,
            kind: AccessorKind::for_category(category),
            properties,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    pub fn properties(&self) -> &[AccessorProperty] {
        &self.properties
    }

    /// Name of the generated type, e.g. `Libraries`.
    pub fn type_name(&self) -> &'static str {
        self.category.type_name()
    }

    /// Name of the field holding this accessor, e.g. `libraries`.
    pub fn field_name(&self) -> &'static str {
        self.category.field_name()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Everything a backend needs to render the generated file.
///
/// Holds one [`CatalogAccessor`] per category, in category order. The model
/// is built fresh for every run and dropped after rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedModule {
    catalog: String,
    accessors: Vec<CatalogAccessor>,
}

impl GeneratedModule {
    /// Build the model for the catalog `catalog_name` served by `source`.
    ///
    /// Fails when two aliases of one category map to the same identifier, or
    /// when an alias maps to something that is not a valid identifier.
    pub fn build(catalog_name: &str, source: &dyn AliasSource) -> Result<Self, GenerateError> {
        let mut accessors = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let accessor = CatalogAccessor::build(source, category)?;
            tracing::debug!(
                catalog = catalog_name,
                category = %category,
                aliases = accessor.len(),
                "collected aliases"
            );
            accessors.push(accessor);
        }

        Ok(Self {
            catalog: catalog_name.to_string(),
            accessors,
        })
    }

    /// Name of the source catalog.
    pub fn catalog_name(&self) -> &str {
        &self.catalog
    }

    /// All accessors, in category order.
    pub fn accessors(&self) -> &[CatalogAccessor] {
        &self.accessors
    }

    /// The accessors of `category`.
    pub fn accessor(&self, category: Category) -> &CatalogAccessor {
        &self.accessors[category.index()]
    }

    pub fn versions(&self) -> &CatalogAccessor {
        self.accessor(Category::Version)
    }

    pub fn libraries(&self) -> &CatalogAccessor {
        self.accessor(Category::Library)
    }

    pub fn bundles(&self) -> &CatalogAccessor {
        self.accessor(Category::Bundle)
    }

    pub fn plugins(&self) -> &CatalogAccessor {
        self.accessor(Category::Plugin)
    }

    /// Total number of accessors across categories.
    pub fn property_count(&self) -> usize {
        self.accessors.iter().map(CatalogAccessor::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use typecat_catalog::{BundleDependency, Catalog, LibraryDependency, PluginDependency};

    use super::*;

    fn names(accessor: &CatalogAccessor) -> Vec<&str> {
        accessor
            .properties()
            .iter()
            .map(|p| p.identifier().as_str())
            .collect()
    }

    #[test]
    fn test_build_follows_source_order() {
        let catalog = Catalog::new()
            .with_version("kotlin", "1.9.0")
            .with_version("agp", "8.1.0")
            .with_library(
                "room-runtime",
                LibraryDependency::new("androidx.room", "room-runtime"),
            )
            .with_library("a-b", LibraryDependency::new("a", "b"))
            .with_bundle("room", BundleDependency::default())
            .with_plugin(
                "firebase.crashlytics.gradlePlugin",
                PluginDependency::new("com.google.firebase.crashlytics"),
            );

        let module = GeneratedModule::build("libs", &catalog).unwrap();

        assert_eq!(module.catalog_name(), "libs");
        assert_eq!(names(module.versions()), vec!["kotlin", "agp"]);
        assert_eq!(names(module.libraries()), vec!["roomRuntime", "aB"]);
        assert_eq!(names(module.bundles()), vec!["room"]);
        assert_eq!(
            names(module.plugins()),
            vec!["firebaseCrashlyticsGradlePlugin"]
        );
        assert_eq!(module.property_count(), 6);
    }

    #[test]
    fn test_categories_in_fixed_order() {
        let module = GeneratedModule::build("libs", &Catalog::new()).unwrap();
        let categories: Vec<_> = module.accessors().iter().map(|a| a.category()).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert!(module.accessors().iter().all(CatalogAccessor::is_empty));
    }

    #[test]
    fn test_kind_follows_category() {
        let module = GeneratedModule::build("libs", &Catalog::new()).unwrap();
        assert_eq!(module.versions().kind(), AccessorKind::Eager);
        assert_eq!(module.libraries().kind(), AccessorKind::Lazy);
        assert_eq!(module.bundles().kind(), AccessorKind::Lazy);
        assert_eq!(module.plugins().kind(), AccessorKind::Lazy);
    }

    #[test]
    fn test_collision_is_rejected() {
        let catalog = Catalog::new()
            .with_library("foo-bar", LibraryDependency::new("g", "a"))
            .with_library("fooBar", LibraryDependency::new("g", "b"));

        let err = GeneratedModule::build("libs", &catalog).unwrap_err();
        match err {
            GenerateError::IdentifierCollision {
                category,
                identifier,
                first,
                second,
            } => {
                assert_eq!(category, Category::Library);
                assert_eq!(identifier, "fooBar");
                assert_eq!(first, "foo-bar");
                assert_eq!(second, "fooBar");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_same_alias_in_different_categories() {
        let catalog = Catalog::new()
            .with_version("room", "2.6.1")
            .with_bundle("room", BundleDependency::default());

        let module = GeneratedModule::build("libs", &catalog).unwrap();
        assert_eq!(names(module.versions()), vec!["room"]);
        assert_eq!(names(module.bundles()), vec!["room"]);
    }

    #[test]
    fn test_leading_digit_is_rejected() {
        let catalog = Catalog::new().with_version("2fa", "1.0");

        let err = GeneratedModule::build("libs", &catalog).unwrap_err();
        match err {
            GenerateError::InvalidIdentifier {
                alias, identifier, ..
            } => {
                assert_eq!(alias, "2fa");
                assert_eq!(identifier, "2fa");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serialize() {
        let catalog = Catalog::new().with_version("kotlin-stdlib", "1.9.0");
        let module = GeneratedModule::build("libs", &catalog).unwrap();
        let json = serde_json::to_value(module.versions()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "version",
                "kind": "eager",
                "properties": [{"alias": "kotlin-stdlib", "identifier": "kotlinStdlib"}]
            })
        );
    }
}
