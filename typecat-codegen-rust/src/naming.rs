//! Rust-specific naming conventions.

use typecat_codegen::NamingConvention;

/// Keywords that cannot be raw identifiers.
const NON_RAW: &[&str] = &["self", "Self", "super", "crate"];

fn escape_rust_reserved(name: &str) -> String {
    if NON_RAW.contains(&name) {
        format!("{}_", name)
    } else {
        format!("r#{}", name)
    }
}

/// Rust naming conventions.
///
/// Accessors are methods, so keywords are written as raw identifiers. The few
/// keywords that cannot be raw get a trailing underscore instead.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
    reserved_members: &[],
};
