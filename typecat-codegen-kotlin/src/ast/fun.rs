//! Kotlin function builder.

use typecat_codegen::{CodeFragment, Renderable};

/// A parameter in a Kotlin function.
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

/// Builder for top-level and extension functions.
#[derive(Debug, Clone)]
pub struct Fun {
    name: String,
    type_params: Vec<String>,
    receiver: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fun {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            receiver: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    /// Make this an extension function on `ty`.
    pub fn receiver(mut self, ty: impl Into<String>) -> Self {
        self.receiver = Some(ty.into());
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
        self.body.push(line.into());
        self
    }

    fn signature(&self) -> String {
        let mut signature = String::from("fun ");
        if !self.type_params.is_empty() {
            signature.push_str(&format!("<{}> ", self.type_params.join(", ")));
        }
        if let Some(receiver) = &self.receiver {
            signature.push_str(receiver);
            signature.push('.');
        }
        signature.push_str(&self.name);

        let params = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        signature.push_str(&format!("({})", params));

        if let Some(ret) = &self.return_type {
            signature.push_str(&format!(": {}", ret));
        }
        signature
    }
}

impl Renderable for Fun {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("{} {{", self.signature()),
            self.body.iter().map(CodeFragment::line).collect(),
            "}",
        )]
    }
}
