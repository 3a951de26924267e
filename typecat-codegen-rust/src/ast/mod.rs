//! Rust AST builders for generating structs, traits, impls, and functions.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which can then be rendered via CodeBuilder.

mod chains;
mod fns;
mod impls;
mod structs;
mod traits;

pub use chains::MethodChain;
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};
pub use traits::Trait;
