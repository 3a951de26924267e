//! Indentation unit for generated code.

/// The text written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// rustfmt default.
    pub const RUST: Self = Self("    ");

    /// Kotlin coding conventions.
    pub const KOTLIN: Self = Self("    ");

    /// The text of one level.
    pub fn unit(&self) -> &'static str {
        self.0
    }

    /// The prefix of a line nested `level` times.
    pub fn at(&self, level: usize) -> String {
        self.0.repeat(level)
    }
}
