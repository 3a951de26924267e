//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use super::{GenerateConfig, Manifest};
use crate::{
    BundleDependency, Catalog, Category, Error, LibraryDependency, PluginDependency, Result,
    error::SourceContext, validate,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    generate: GenerateConfig,
    #[serde(default)]
    catalogs: IndexMap<String, RawCatalog>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCatalog {
    versions: IndexMap<String, String>,
    libraries: IndexMap<String, RawLibrary>,
    bundles: IndexMap<String, Vec<String>>,
    plugins: IndexMap<String, RawPlugin>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLibrary {
    module: String,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPlugin {
    id: String,
    version: Option<String>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, super::MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a typecat.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a typecat.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    if let Some(reason) = validate::validate_package(&raw.generate.package) {
        return Err(ctx.validation_error(
            format!("invalid package '{}': {}", raw.generate.package, reason),
            "package",
        ));
    }

    let mut catalogs = IndexMap::with_capacity(raw.catalogs.len());
    for (name, catalog) in raw.catalogs {
        let catalog = build_catalog(&ctx, &name, catalog)?;
        catalogs.insert(name, catalog);
    }

    Ok(Manifest {
        generate: raw.generate,
        catalogs,
    })
}

/// Turn a raw catalog table into a [`Catalog`], validating every entry.
fn build_catalog(ctx: &SourceContext<'_>, name: &str, raw: RawCatalog) -> Result<Catalog> {
    let check_alias = |category: Category, alias: &str| match validate::validate_alias(alias) {
        Some(reason) => Err(ctx.invalid_alias_error(name, category, alias, reason)),
        None => Ok(()),
    };

    let mut catalog = Catalog::new();

    for (alias, version) in raw.versions {
        check_alias(Category::Version, &alias)?;
        if version.is_empty() {
            return Err(ctx.validation_error(
                format!("version '{}' in catalog '{}' cannot be empty", alias, name),
                &alias,
            ));
        }
        catalog.insert_version(alias, version);
    }

    for (alias, library) in raw.libraries {
        check_alias(Category::Library, &alias)?;
        let Some(mut dependency) = LibraryDependency::from_module(&library.module) else {
            return Err(ctx.validation_error(
                format!(
                    "library '{}' in catalog '{}' has module '{}', expected 'group:name'",
                    alias, name, library.module
                ),
                &alias,
            ));
        };
        if let Some(version) = library.version {
            dependency = dependency.with_version(version);
        }
        catalog.insert_library(alias, dependency);
    }

    for (alias, members) in raw.bundles {
        check_alias(Category::Bundle, &alias)?;
        let mut libraries = Vec::with_capacity(members.len());
        for member in &members {
            match catalog.library(member) {
                Some(library) => libraries.push(library.clone()),
                None => return Err(ctx.unknown_bundle_member_error(name, &alias, member)),
            }
        }
        catalog.insert_bundle(alias, BundleDependency::new(libraries));
    }

    for (alias, plugin) in raw.plugins {
        check_alias(Category::Plugin, &alias)?;
        if plugin.id.is_empty() {
            return Err(ctx.validation_error(
                format!("plugin '{}' in catalog '{}' has an empty id", alias, name),
                &alias,
            ));
        }
        let mut dependency = PluginDependency::new(plugin.id);
        if let Some(version) = plugin.version {
            dependency = dependency.with_version(version);
        }
        catalog.insert_plugin(alias, dependency);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{AliasSource, Language, VersionCatalog};

    const FULL: &str = r#"
[generate]
catalog = "libs"
output = "gen"
language = "rust"
package = "org.acme.deps"

[catalogs.libs.versions]
kotlin = "1.9.0"
agp = "8.1.0"

[catalogs.libs.libraries]
room-runtime = { module = "androidx.room:room-runtime", version = "2.6.1" }
room-ktx = { module = "androidx.room:room-ktx" }

[catalogs.libs.bundles]
room = ["room-runtime", "room-ktx"]

[catalogs.libs.plugins]
ksp = { id = "com.google.devtools.ksp", version = "1.9.0-1.0.13" }

[catalogs.tools.versions]
detekt = "1.23.0"
"#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = FULL.parse().unwrap();

        assert_eq!(manifest.generate.catalog, "libs");
        assert_eq!(manifest.generate.output, PathBuf::from("gen"));
        assert_eq!(manifest.generate.language, Language::Rust);
        assert_eq!(manifest.generate.package, "org.acme.deps");
        assert_eq!(
            manifest.catalog_names().collect::<Vec<_>>(),
            vec!["libs", "tools"]
        );

        let libs = manifest.catalog("libs").unwrap();
        assert_eq!(libs.list_aliases(Category::Version), vec!["kotlin", "agp"]);
        assert_eq!(
            libs.list_aliases(Category::Library),
            vec!["room-runtime", "room-ktx"]
        );
        assert_eq!(
            libs.find_library("room-runtime").unwrap().to_string(),
            "androidx.room:room-runtime:2.6.1"
        );

        let bundle = libs.find_bundle("room").unwrap();
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.libraries()[1].name(), "room-ktx");

        let ksp = libs.find_plugin("ksp").unwrap();
        assert_eq!(ksp.id(), "com.google.devtools.ksp");
        assert_eq!(ksp.version(), Some("1.9.0-1.0.13"));
    }

    #[test]
    fn test_defaults() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest.generate, GenerateConfig::default());
        assert_eq!(manifest.generate.catalog, "libs");
        assert_eq!(manifest.generate.language, Language::Kotlin);
        assert_eq!(manifest.generate.package, "com.example.catalog");
        assert!(manifest.catalogs.is_empty());
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let src = "[catalogs.libs.versions]\nzeta = \"1\"\nalpha = \"2\"\nmid = \"3\"\n";
        let manifest: Manifest = src.parse().unwrap();
        assert_eq!(
            manifest
                .catalog("libs")
                .unwrap()
                .list_aliases(Category::Version),
            vec!["zeta", "alpha", "mid"]
        );
    }

    #[test]
    fn test_registry() {
        let manifest: Manifest = FULL.parse().unwrap();
        let registry = manifest.registry();

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["libs", "tools"]);
        assert!(registry.named("tools").unwrap().find_version("detekt").is_some());
        assert!(registry.named("missing").is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = "[generate\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = "[generate]\nlang = \"rust\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = "[generate]\nlanguage = \"groovy\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_alias() {
        let src = "[catalogs.libs.versions]\n\"--\" = \"1\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::InvalidAlias {
                catalog,
                category,
                alias,
                span,
                ..
            } => {
                assert_eq!(catalog, "libs");
                assert_eq!(category, Category::Version);
                assert_eq!(alias, "--");
                assert_eq!(span.unwrap().offset(), 26);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_module_notation() {
        let src = "[catalogs.libs.libraries]\nroom = { module = \"androidx.room\" }\n";
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::Validation { message, span, .. } => {
                assert!(message.contains("expected 'group:name'"));
                assert_eq!(span.unwrap().offset(), 26);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_bundle_member() {
        let src = r#"
[catalogs.libs.libraries]
room-runtime = { module = "androidx.room:room-runtime" }

[catalogs.libs.bundles]
room = ["room-runtime", "room-paging"]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "bundle 'room' in catalog 'libs' references unknown library 'room-paging'"
        );
        match *err {
            Error::UnknownBundleMember { span, .. } => {
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "room-paging");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bundle_members_are_catalog_scoped() {
        let src = r#"
[catalogs.libs.libraries]
room-runtime = { module = "androidx.room:room-runtime" }

[catalogs.tools.bundles]
room = ["room-runtime"]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::UnknownBundleMember { .. }));
    }

    #[test]
    fn test_empty_version_rejected() {
        let err = "[catalogs.libs.versions]\nkotlin = \"\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_invalid_package_rejected() {
        let err = "[generate]\npackage = \"com..acme\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        match *err {
            Error::Validation { message, .. } => {
                assert_eq!(
                    message,
                    "invalid package 'com..acme': package cannot contain empty segments"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_keyword_package_segment_rejected() {
        let err = "[generate]\npackage = \"com.example.object\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        match *err {
            Error::Validation { message, .. } => {
                assert_eq!(
                    message,
                    "invalid package 'com.example.object': package segments cannot be Kotlin keywords"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
