//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use typecat_catalog::{
    BundleDependency, Catalog, CatalogRegistry, LibraryDependency, PluginDependency,
};

use crate::{GenerateError, GenerateReport, GenerateTask, GeneratedModule, LanguageCodegen};

/// A small catalog touching every category.
pub fn sample_catalog() -> Catalog {
    let room_runtime =
        LibraryDependency::new("androidx.room", "room-runtime").with_version("2.6.1");
    let room_ktx = LibraryDependency::new("androidx.room", "room-ktx").with_version("2.6.1");

    Catalog::new()
        .with_version("kotlin", "1.9.0")
        .with_version("agp", "8.1.0")
        .with_library("room-runtime", room_runtime.clone())
        .with_library("room-ktx", room_ktx.clone())
        .with_bundle("room", BundleDependency::new(vec![room_runtime, room_ktx]))
        .with_plugin(
            "ksp",
            PluginDependency::new("com.google.devtools.ksp").with_version("1.9.0-1.0.13"),
        )
        .with_plugin(
            "firebase.crashlytics.gradlePlugin",
            PluginDependency::new("com.google.firebase.crashlytics"),
        )
}

/// The code model of [`sample_catalog`] under the name `libs`.
pub fn sample_module() -> GeneratedModule {
    match GeneratedModule::build("libs", &sample_catalog()) {
        Ok(module) => module,
        Err(err) => panic!("sample catalog must build: {err}"),
    }
}

/// Generate `catalog` (registered as `libs`) into a temporary directory.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp(
    codegen: &dyn LanguageCodegen,
    catalog: Catalog,
) -> Result<(tempfile::TempDir, GenerateReport), GenerateError> {
    let temp_dir = tempfile::TempDir::new().map_err(|source| GenerateError::Io {
        path: std::env::temp_dir(),
        source,
    })?;
    let registry = CatalogRegistry::new().with("libs", catalog);
    let report = GenerateTask::new("libs", temp_dir.path()).run(&registry, codegen)?;
    Ok((temp_dir, report))
}
