//! Line-oriented text buffer with nesting.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated lines, prefixing each with the current nesting.
///
/// Blank lines are written without indentation so generated files carry no
/// trailing whitespace.
///
/// # Example
///
/// ```
/// use typecat_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::kotlin();
/// builder.apply_fragment(CodeFragment::block(
///     "object Versions {",
///     vec![CodeFragment::line("const val KOTLIN = \"1.9.0\"")],
///     "}",
/// ));
///
/// assert_eq!(builder.build(), "object Versions {\n    const val KOTLIN = \"1.9.0\"\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            buffer: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    /// Write `s` on its own line at the current nesting.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&self.indent.at(self.level));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Leave one nesting level; never goes below zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(body) => self.nested(body),
            CodeFragment::KDoc(text) => {
                self.push_line(&format!("/** {} */", text));
            }
            CodeFragment::RustDoc(text) => {
                self.push_line(&format!("/// {}", text));
            }
        }
    }

    fn nested(&mut self, body: Vec<CodeFragment>) {
        self.push_indent();
        for fragment in body {
            self.apply_fragment(fragment);
        }
        self.push_dedent();
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::rust();
        builder.push_line("let x = 1;");
        assert_eq!(builder.build(), "let x = 1;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::kotlin();
        builder.push_indent().push_line("a").push_blank().push_line("b");
        assert_eq!(builder.build(), "    a\n\n    b\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::rust();
        builder.push_dedent().push_dedent();
        assert_eq!(builder.level(), 0);
    }

    #[test]
    fn test_nested_block_fragment() {
        let mut builder = CodeBuilder::rust();
        builder.apply_fragment(CodeFragment::block(
            "impl Foo {",
            vec![CodeFragment::block(
                "pub fn bar(&self) {",
                vec![CodeFragment::line("todo()")],
                "}",
            )],
            "}",
        ));

        assert_eq!(
            builder.as_str(),
            "impl Foo {\n    pub fn bar(&self) {\n        todo()\n    }\n}\n"
        );
    }

    #[test]
    fn test_indent_fragment() {
        let mut builder = CodeBuilder::kotlin();
        builder.apply_fragment(CodeFragment::line("val x: String"));
        builder.apply_fragment(CodeFragment::indent(vec![CodeFragment::line("get() = y")]));

        assert_eq!(builder.build(), "val x: String\n    get() = y\n");
    }

    #[test]
    fn test_doc_fragments() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent();
        builder.apply_fragment(CodeFragment::RustDoc("Versions.".to_string()));
        builder.apply_fragment(CodeFragment::KDoc("Versions.".to_string()));

        assert_eq!(
            builder.build(),
            "    /// Versions.\n    /** Versions. */\n"
        );
    }
}
