//! Code model and shared code generation utilities for typecat.
//!
//! This crate turns a catalog into a language-neutral [`GeneratedModule`]
//! and drives language backends (e.g., `typecat-codegen-kotlin`) through the
//! [`LanguageCodegen`] trait.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;

mod error;
mod model;
mod task;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use error::GenerateError;
pub use language::{GENERATED_FILE_STEM, LanguageCodegen, NamingConvention, PreviewFile};
pub use model::{AccessorKind, AccessorProperty, CatalogAccessor, GeneratedModule};
pub use task::{GenerateReport, GenerateTask};
