//! Check operation - manifest validation.

use std::path::Path;

use typecat_catalog::Manifest;
use typecat_codegen::GeneratedModule;

use crate::reports::{CatalogSummary, CheckReport};

/// Execute the check operation.
///
/// Derives the accessors of every catalog without rendering or writing
/// anything, collecting the first problem found in each catalog.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let selected = manifest.generate.catalog.clone();
    let mut catalogs = Vec::new();
    let mut errors = Vec::new();

    if manifest.catalog(&selected).is_none() {
        errors.push(format!(
            "catalog '{}' selected in [generate] is not defined",
            selected
        ));
    }

    for (name, catalog) in &manifest.catalogs {
        match GeneratedModule::build(name, catalog) {
            Ok(module) => catalogs.push(CatalogSummary {
                name: name.clone(),
                counts: module
                    .accessors()
                    .iter()
                    .map(|accessor| (accessor.category(), accessor.len()))
                    .collect(),
            }),
            Err(err) => {
                tracing::debug!(catalog = %name, error = %err, "catalog failed to build");
                errors.push(format!("catalog '{}': {}", name, err));
            }
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        selected,
        catalogs,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn check_str(src: &str) -> CheckReport {
        check(&Manifest::from_str(src).unwrap(), Path::new("typecat.toml"))
    }

    #[test]
    fn test_valid_manifest() {
        let report = check_str(
            r#"
[catalogs.libs.versions]
kotlin = "1.9.0"
agp = "8.1.0"

[catalogs.tools.plugins]
ksp = { id = "com.google.devtools.ksp" }
"#,
        );

        assert!(report.is_valid());
        assert_eq!(report.catalogs.len(), 2);
        assert_eq!(report.catalogs[0].name, "libs");
        assert_eq!(report.catalogs[0].total(), 2);
        assert_eq!(report.catalogs[1].total(), 1);
    }

    #[test]
    fn test_collision_is_reported() {
        let report = check_str(
            r#"
[catalogs.libs.versions]
foo-bar = "1"
fooBar = "2"
"#,
        );

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec!["catalog 'libs': Version aliases 'foo-bar' and 'fooBar' both map to 'fooBar'"]
        );
    }

    #[test]
    fn test_selected_catalog_missing() {
        let report = check_str(
            r#"
[generate]
catalog = "deps"

[catalogs.libs.versions]
kotlin = "1.9.0"
"#,
        );

        assert_eq!(
            report.errors,
            vec!["catalog 'deps' selected in [generate] is not defined"]
        );
    }
}
