//! Tests for the generation task, using a minimal line-per-accessor backend.

use std::fs;

use typecat_catalog::{Catalog, CatalogRegistry, Category, LibraryDependency};
use typecat_codegen::{
    CodeBuilder, GenerateError, GenerateTask, GeneratedModule, LanguageCodegen, NamingConvention,
    testing::{generate_to_temp, sample_catalog},
};
use typecat_core::WriteResult;

fn escape(name: &str) -> String {
    format!("${}", name)
}

const PLAIN_NAMING: NamingConvention = NamingConvention {
    reserved_words: &["type"],
    escape_reserved: escape,
    reserved_members: &[],
};

/// Emits `<Type>.<name> = <alias>` per accessor.
struct PlainCodegen;

impl LanguageCodegen for PlainCodegen {
    fn language(&self) -> &'static str {
        "plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn naming(&self) -> &NamingConvention {
        &PLAIN_NAMING
    }

    fn render(&self, module: &GeneratedModule) -> String {
        let mut builder = CodeBuilder::rust();
        builder.push_line(&format!("# {}", module.catalog_name()));
        for accessor in module.accessors() {
            for property in accessor.properties() {
                builder.push_line(&format!(
                    "{}.{} = {}",
                    accessor.type_name(),
                    self.naming().property_name(property.identifier()),
                    property.alias()
                ));
            }
        }
        builder.build()
    }
}

#[test]
fn test_run_writes_generated_file() {
    let (dir, report) = generate_to_temp(&PlainCodegen, sample_catalog()).unwrap();

    let path = dir.path().join("GeneratedCatalog.txt");
    assert_eq!(report.path, path);
    assert_eq!(report.result, WriteResult::Created);
    assert_eq!(report.language, "plain");
    assert_eq!(report.catalog, "libs");
    assert_eq!(
        report.aliases,
        vec![
            (Category::Version, 2),
            (Category::Library, 2),
            (Category::Bundle, 1),
            (Category::Plugin, 2),
        ]
    );
    assert_eq!(report.total(), 7);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(report.bytes, content.len());
    assert!(content.starts_with("# libs\nVersions.kotlin = kotlin\nVersions.agp = agp\n"));
    assert!(content.contains("Libraries.roomRuntime = room-runtime\n"));
    assert!(content.contains(
        "Plugins.firebaseCrashlyticsGradlePlugin = firebase.crashlytics.gradlePlugin\n"
    ));
}

#[test]
fn test_run_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let registry = CatalogRegistry::new().with("libs", sample_catalog());
    let task = GenerateTask::new("libs", dir.path().join("out"));

    let first = task.run(&registry, &PlainCodegen).unwrap();
    let first_bytes = fs::read(&first.path).unwrap();

    let second = task.run(&registry, &PlainCodegen).unwrap();
    let second_bytes = fs::read(&second.path).unwrap();

    assert_eq!(first.result, WriteResult::Created);
    assert_eq!(second.result, WriteResult::Unchanged);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_run_overwrites_stale_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("GeneratedCatalog.txt"), "stale").unwrap();

    let registry = CatalogRegistry::new().with("libs", sample_catalog());
    let report = GenerateTask::new("libs", dir.path())
        .run(&registry, &PlainCodegen)
        .unwrap();

    assert_eq!(report.result, WriteResult::Updated);
    assert!(fs::read_to_string(&report.path).unwrap().starts_with("# libs"));
}

#[test]
fn test_preview_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let registry = CatalogRegistry::new().with("libs", sample_catalog());

    let preview = GenerateTask::new("libs", dir.path())
        .preview(&registry, &PlainCodegen)
        .unwrap();

    assert_eq!(preview.path, dir.path().join("GeneratedCatalog.txt"));
    assert!(preview.content.contains("Bundles.room = room"));
    assert!(!preview.path.exists());
}

#[test]
fn test_render_reuses_built_module() {
    let dir = tempfile::tempdir().unwrap();
    let registry = CatalogRegistry::new().with("libs", sample_catalog());
    let task = GenerateTask::new("libs", dir.path());

    let module = task.module(&registry).unwrap();
    let rendered = task.render(&module, &PlainCodegen);

    assert_eq!(rendered, task.preview(&registry, &PlainCodegen).unwrap());
    assert_eq!(module.property_count(), 7);
    assert!(!rendered.path.exists());
}

#[test]
fn test_missing_catalog_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let registry = CatalogRegistry::new().with("libs", sample_catalog());

    let err = GenerateTask::new("deps", dir.path())
        .run(&registry, &PlainCodegen)
        .unwrap_err();

    assert!(matches!(err, GenerateError::Catalog(_)));
    assert_eq!(err.to_string(), "catalog 'deps' not found");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_collision_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::new()
        .with_library("foo-bar", LibraryDependency::new("g", "a"))
        .with_library("fooBar", LibraryDependency::new("g", "b"));
    let registry = CatalogRegistry::new().with("libs", catalog);

    let err = GenerateTask::new("libs", dir.path())
        .run(&registry, &PlainCodegen)
        .unwrap_err();

    assert!(matches!(err, GenerateError::IdentifierCollision { .. }));
    assert!(!dir.path().join("GeneratedCatalog.txt").exists());
}

#[test]
fn test_unwritable_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let registry = CatalogRegistry::new().with("libs", sample_catalog());
    let err = GenerateTask::new("libs", &blocker)
        .run(&registry, &PlainCodegen)
        .unwrap_err();

    match err {
        GenerateError::Io { path, .. } => assert_eq!(path, blocker.join("GeneratedCatalog.txt")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_reserved_words_are_escaped() {
    let catalog = Catalog::new().with_version("type", "1");
    let registry = CatalogRegistry::new().with("libs", catalog);

    let preview = GenerateTask::new("libs", "out")
        .preview(&registry, &PlainCodegen)
        .unwrap();
    assert!(preview.content.contains("Versions.$type = type"));
}
