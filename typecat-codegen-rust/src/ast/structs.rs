//! Struct declarations.

use typecat_codegen::{CodeFragment, Renderable};

/// A named field, private unless marked [`public`](Field::public).
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: String,
    doc: Option<String>,
    is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            is_public: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        self.doc
            .iter()
            .map(|doc| CodeFragment::RustDoc(doc.clone()))
            .chain([CodeFragment::Line(format!(
                "{}{}: {},",
                vis, self.name, self.ty
            ))])
            .collect()
    }
}

/// A public struct with named fields.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    generics: String,
    doc: Option<String>,
    attrs: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: String::new(),
            doc: None,
            attrs: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Generic parameters written after the name, e.g. `<'a>`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = generics.into();
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an outer attribute, written without `#[...]`.
    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .doc
            .iter()
            .map(|doc| CodeFragment::RustDoc(doc.clone()))
            .collect();
        fragments.extend(
            self.attrs
                .iter()
                .map(|attr| CodeFragment::Line(format!("#[{}]", attr))),
        );

        let decl = format!("pub struct {}{}", self.name, self.generics);
        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", decl)));
        } else {
            let body = self.fields.iter().flat_map(Field::to_fragments).collect();
            fragments.push(CodeFragment::block(format!("{} {{", decl), body, "}"));
        }

        fragments
    }
}
