use typecat_catalog::{DEFAULT_PACKAGE, validate_package};
use typecat_codegen::{GenerateError, GeneratedModule, LanguageCodegen, NamingConvention};
use typecat_core::GeneratedFile;

use crate::{files::GeneratedCatalogKt, naming::KOTLIN_NAMING};

/// Kotlin code generator producing Gradle version catalog accessors
#[derive(Debug, Clone)]
pub struct Generator {
    package: String,
}

impl Generator {
    /// A generator declaring `package` at the top of the generated file.
    ///
    /// Fails with [`GenerateError::InvalidPackage`] when `package` is not a
    /// valid Kotlin package name.
    pub fn new(package: impl Into<String>) -> Result<Self, GenerateError> {
        let package = package.into();
        if let Some(reason) = validate_package(&package) {
            return Err(GenerateError::InvalidPackage { package, reason });
        }
        Ok(Self { package })
    }

    pub fn package(&self) -> &str {
        &self.package
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn naming(&self) -> &NamingConvention {
        &KOTLIN_NAMING
    }

    fn render(&self, module: &GeneratedModule) -> String {
        GeneratedCatalogKt::new(&self.package, module).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_package() {
        let generator = Generator::new("org.acme.deps").unwrap();
        assert_eq!(generator.package(), "org.acme.deps");
        assert_eq!(Generator::default().package(), DEFAULT_PACKAGE);
    }

    #[test]
    fn test_new_rejects_invalid_package() {
        for package in ["com.example; 1bad", "com.example.object", "", "com..example"] {
            match Generator::new(package) {
                Err(GenerateError::InvalidPackage { package: found, .. }) => {
                    assert_eq!(found, package)
                }
                other => panic!("{package:?} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_package_message() {
        let err = Generator::new("com.example.object").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid package 'com.example.object': package segments cannot be Kotlin keywords"
        );
    }
}
