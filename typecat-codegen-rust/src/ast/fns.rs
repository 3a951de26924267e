//! Rust function builder.

use typecat_codegen::{CodeFragment, Renderable};

/// A parameter in a Rust function.
///
/// An empty type renders the name alone, for receivers like `&self`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    is_public: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_public: true,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a node to the function body.
    pub fn body_node(mut self, node: impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// Add a prebuilt fragment to the function body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// The signature without body, e.g. `pub fn name(&self) -> T`.
    pub fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };

        let params_str = self
            .params
            .iter()
            .map(|p| {
                if p.ty.is_empty() {
                    p.name.clone()
                } else {
                    format!("{}: {}", p.name, p.ty)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("{}fn {}({}) -> {}", vis, self.name, params_str, ret),
            None => format!("{}fn {}({})", vis, self.name, params_str),
        }
    }

    /// Render as a declaration without body, for trait definitions.
    pub fn to_declaration(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }
        fragments.push(CodeFragment::line(format!("{};", self.signature())));
        fragments
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }
        fragments.push(CodeFragment::block(
            format!("{} {{", self.signature()),
            self.body.clone(),
            "}",
        ));
        fragments
    }
}
