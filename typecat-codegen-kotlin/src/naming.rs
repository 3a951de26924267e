//! Kotlin-specific naming conventions.

use typecat_catalog::KOTLIN_KEYWORDS;
use typecat_codegen::NamingConvention;

fn escape_kotlin_reserved(name: &str) -> String {
    format!("`{}`", name)
}

/// Kotlin naming conventions.
///
/// Hard keywords are wrapped in backticks. Names clashing with the
/// `catalog` constructor property or with members Kotlin generates for data
/// classes get a trailing underscore.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    reserved_words: KOTLIN_KEYWORDS,
    escape_reserved: escape_kotlin_reserved,
    reserved_members: &[
        "catalog",
        "copy",
        "component1",
        "equals",
        "hashCode",
        "toString",
    ],
};
