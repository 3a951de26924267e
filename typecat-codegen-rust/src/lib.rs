//! Rust backend for typecat.
//!
//! Renders a [`GeneratedModule`](typecat_codegen::GeneratedModule) into
//! `GeneratedCatalog.rs`: a struct per category borrowing an
//! `AliasSource`, with a method per alias. Versions resolve to a `String`
//! when called; the other categories hand out a lazy `Provider`.

mod generator;
mod naming;
mod rust_file;

pub mod ast;
pub mod files;

pub use ast::{Field, Fn, Impl, MethodChain, Param, Struct, Trait};
pub use generator::{DEFAULT_RUNTIME_CRATE, Generator};
pub use naming::RUST_NAMING;
pub use rust_file::{RustFile, Use};
pub use typecat_codegen::{LanguageCodegen, PreviewFile};
