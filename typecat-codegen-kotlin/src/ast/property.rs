//! Kotlin property builder.

use typecat_codegen::{CodeFragment, Renderable};

#[derive(Debug, Clone)]
enum Initializer {
    /// `val x: T = expr`
    Value(String),
    /// `val x: T` followed by `get() = expr`
    Getter(String),
    /// `val x: T by lazy { expr }`
    Lazy(String),
}

/// Builder for a read-only Kotlin property.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: Option<String>,
    init: Initializer,
}

impl Property {
    /// A property initialized with `expr`.
    pub fn value(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            init: Initializer::Value(expr.into()),
        }
    }

    /// A property recomputed by a getter on every access.
    pub fn getter(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            init: Initializer::Getter(expr.into()),
        }
    }

    /// A property delegated to `lazy`, computed on first access.
    pub fn lazy(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            init: Initializer::Lazy(expr.into()),
        }
    }

    /// Declare the property type.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    fn declaration(&self) -> String {
        match &self.ty {
            Some(ty) => format!("val {}: {}", self.name, ty),
            None => format!("val {}", self.name),
        }
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let declaration = self.declaration();
        match &self.init {
            Initializer::Value(expr) => {
                vec![CodeFragment::line(format!("{} = {}", declaration, expr))]
            }
            Initializer::Getter(expr) => vec![
                CodeFragment::line(declaration),
                CodeFragment::indent(vec![CodeFragment::line(format!("get() = {}", expr))]),
            ],
            Initializer::Lazy(expr) => vec![CodeFragment::block(
                format!("{} by lazy {{", declaration),
                vec![CodeFragment::line(expr)],
                "}",
            )],
        }
    }
}
