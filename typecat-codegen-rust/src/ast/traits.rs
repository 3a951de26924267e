//! Rust trait definition builder.

use typecat_codegen::{CodeFragment, Renderable};

use super::Fn;

/// Builder for trait definitions with bodiless method declarations.
#[derive(Debug, Clone)]
pub struct Trait {
    name: String,
    doc: Option<String>,
    methods: Vec<Fn>,
}

impl Trait {
    /// Create a trait; the name may carry generics, e.g. `Convert<T>`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Declare a method. Trait methods are written without visibility.
    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method.private());
        self
    }
}

impl Renderable for Trait {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }

        let body = self.methods.iter().flat_map(Fn::to_declaration).collect();
        fragments.push(CodeFragment::block(
            format!("pub trait {} {{", self.name),
            body,
            "}",
        ));
        fragments
    }
}
