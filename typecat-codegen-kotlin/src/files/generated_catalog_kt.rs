use std::path::{Path, PathBuf};

use typecat_catalog::Category;
use typecat_codegen::{AccessorKind, CatalogAccessor, GeneratedModule, LanguageCodegen};
use typecat_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::{
    DataClass, Fun, Generator, Import, KotlinFile, Param, Property, naming::KOTLIN_NAMING,
};

const IMPORTS: &[&str] = &[
    "java.util.Optional",
    "org.gradle.api.artifacts.ExternalModuleDependencyBundle",
    "org.gradle.api.artifacts.MinimalExternalModuleDependency",
    "org.gradle.api.artifacts.VersionCatalog",
    "org.gradle.api.provider.Provider",
    "org.gradle.plugin.use.PluginDependency",
];

const CATALOG_PARAM: &str = "val catalog: VersionCatalog";

/// The GeneratedCatalog.kt file
pub struct GeneratedCatalogKt<'a> {
    package: &'a str,
    module: &'a GeneratedModule,
}

impl<'a> GeneratedCatalogKt<'a> {
    pub fn new(package: &'a str, module: &'a GeneratedModule) -> Self {
        Self { package, module }
    }

    /// `Optional<T>.orElseThrowIllegalArgs`, shared by every accessor.
    fn or_else_throw() -> Fun {
        Fun::new("orElseThrowIllegalArgs")
            .type_param("T")
            .receiver("Optional<T>")
            .param(Param::new("alias", "String"))
            .param(Param::new("type", "String"))
            .returns("T")
            .body_line(
                "return this.orElseThrow { IllegalArgumentException(\"$type alias '$alias' not found\") }",
            )
    }

    fn root_class(&self) -> DataClass {
        DataClass::new("GeneratedCatalog")
            .param(CATALOG_PARAM)
            .members(self.module.accessors().iter().map(|accessor| {
                Property::value(
                    accessor.field_name(),
                    format!("{}(catalog)", accessor.type_name()),
                )
            }))
    }

    fn accessor_class(accessor: &CatalogAccessor) -> DataClass {
        let category = accessor.category();
        let label = category.label();

        DataClass::new(accessor.type_name())
            .param(CATALOG_PARAM)
            .members(accessor.properties().iter().map(|property| {
                let name = KOTLIN_NAMING.property_name(property.identifier());
                let alias = property.alias();
                let lookup = format!(
                    "catalog.find{}(\"{}\").orElseThrowIllegalArgs(\"{}\", \"{}\")",
                    label, alias, alias, label
                );

                match accessor.kind() {
                    AccessorKind::Eager => {
                        Property::getter(name, format!("{}.requiredVersion", lookup)).ty("String")
                    }
                    AccessorKind::Lazy => Property::lazy(name, lookup)
                        .ty(format!("Provider<{}>", provider_type(category))),
                }
            }))
    }
}

/// Gradle type a lazy accessor of `category` provides.
fn provider_type(category: Category) -> &'static str {
    match category {
        Category::Library => "MinimalExternalModuleDependency",
        Category::Bundle => "ExternalModuleDependencyBundle",
        Category::Plugin => "PluginDependency",
        Category::Version => "String",
    }
}

impl GeneratedFile for GeneratedCatalogKt<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Generator::default().file_name())
    }

    fn render(&self) -> String {
        KotlinFile::new()
            .package(self.package)
            .imports(IMPORTS.iter().map(|path| Import::new(*path)))
            .add(Self::or_else_throw())
            .add(self.root_class())
            .add_all(self.module.accessors().iter().map(Self::accessor_class))
            .render_with_header(GENERATED_HEADER)
    }
}
