//! Kotlin data class builder.

use typecat_codegen::{CodeFragment, Renderable};

/// Builder for a `data class` with a primary constructor and a body.
#[derive(Debug, Clone)]
pub struct DataClass {
    name: String,
    doc: Option<String>,
    params: Vec<String>,
    members: Vec<Vec<CodeFragment>>,
}

impl DataClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a primary constructor parameter, e.g. `val catalog: VersionCatalog`.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Add a body member (any Renderable).
    pub fn member<R: Renderable>(mut self, member: R) -> Self {
        self.members.push(member.to_fragments());
        self
    }

    /// Add multiple body members.
    pub fn members<R: Renderable>(mut self, members: impl IntoIterator<Item = R>) -> Self {
        for member in members {
            self.members.push(member.to_fragments());
        }
        self
    }
}

impl Renderable for DataClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::KDoc(doc.clone()));
        }
        fragments.push(CodeFragment::block(
            format!("data class {}({}) {{", self.name, self.params.join(", ")),
            self.members.iter().flatten().cloned().collect(),
            "}",
        ));
        fragments
    }
}
