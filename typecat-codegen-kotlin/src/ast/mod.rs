//! Kotlin AST builders for generating classes, properties, and functions.
//!
//! These provide a high-level API for constructing Kotlin syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod fun;
mod import;
mod property;

pub use class::DataClass;
pub use fun::{Fun, Param};
pub use import::Import;
pub use property::Property;
