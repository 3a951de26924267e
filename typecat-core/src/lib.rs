//! Core utilities and types for typecat.
//!
//! This crate provides the pieces every other typecat crate leans on:
//! deriving accessor identifiers from catalog aliases, and writing
//! generated files to disk.

mod file;
mod identifier;

// File operations
pub use file::{File, GENERATED_HEADER, GeneratedFile, WriteResult};
// Identifier derivation
pub use identifier::{Identifier, convert, tokens, validate_identifier};
