//! Unified language dispatch.

use typecat_catalog::Language;
use typecat_codegen::{GenerateError, LanguageCodegen};
use typecat_codegen_kotlin::Generator as KotlinGenerator;
use typecat_codegen_rust::Generator as RustGenerator;

/// Create the backend for `language`.
///
/// `package` is declared by the Kotlin file and ignored by the Rust backend.
/// Fails when the Kotlin backend is given an invalid package.
pub fn generator(
    language: Language,
    package: &str,
) -> Result<Box<dyn LanguageCodegen>, GenerateError> {
    let codegen: Box<dyn LanguageCodegen> = match language {
        Language::Kotlin => Box::new(KotlinGenerator::new(package)?),
        Language::Rust => Box::new(RustGenerator::default()),
    };
    Ok(codegen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_per_language() {
        let kotlin = generator(Language::Kotlin, "org.acme").unwrap();
        assert_eq!(kotlin.language(), "kotlin");
        assert_eq!(kotlin.file_name(), "GeneratedCatalog.kt");

        let rust = generator(Language::Rust, "org.acme").unwrap();
        assert_eq!(rust.language(), "rust");
        assert_eq!(rust.file_name(), "GeneratedCatalog.rs");
    }

    #[test]
    fn test_package_checked_for_kotlin_only() {
        let err = generator(Language::Kotlin, "com.example; 1bad").err().unwrap();
        assert!(matches!(err, GenerateError::InvalidPackage { .. }));

        assert!(generator(Language::Rust, "com.example; 1bad").is_ok());
    }
}
