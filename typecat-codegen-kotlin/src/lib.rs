//! Kotlin backend for typecat.
//!
//! Renders a [`GeneratedModule`](typecat_codegen::GeneratedModule) into
//! `GeneratedCatalog.kt`: one data class per category wrapping a Gradle
//! `VersionCatalog`, with a property per alias.

mod generator;
mod kotlin_file;
mod naming;

pub mod ast;
pub mod files;

pub use ast::{DataClass, Fun, Import, Param, Property};
pub use generator::Generator;
pub use kotlin_file::KotlinFile;
pub use naming::KOTLIN_NAMING;
pub use typecat_codegen::{LanguageCodegen, PreviewFile};
