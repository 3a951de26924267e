//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes produce fragments; [`CodeBuilder`](super::CodeBuilder) turns
//! fragments into indented text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A KDoc comment (`/** text */`).
    KDoc(String),
    /// A Rust doc comment (`/// text`).
    RustDoc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `close`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.to_string()),
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block(
            "object Foo {",
            vec![CodeFragment::line("val x = 1")],
            "}",
        );
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "object Foo {");
                assert_eq!(body, vec![CodeFragment::Line("val x = 1".to_string())]);
                assert_eq!(close.as_deref(), Some("}"));
            }
            _ => panic!("Expected Block variant"),
        }
    }

    #[test]
    fn test_boxed_renderable() {
        struct One;
        impl Renderable for One {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Blank]
            }
        }

        let boxed: Box<dyn Renderable> = Box::new(One);
        assert_eq!(boxed.to_fragments(), vec![CodeFragment::Blank]);
    }
}
