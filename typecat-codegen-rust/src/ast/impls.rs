//! Rust impl block builder.

use typecat_codegen::{CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    generics: Option<String>,
    type_name: String,
    trait_name: Option<String>,
    attrs: Vec<String>,
    methods: Vec<Fn>,
}

impl Impl {
    /// Create an inherent impl block for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            generics: None,
            type_name: type_name.into(),
            trait_name: None,
            attrs: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Create a trait impl block: `impl trait_name for type_name`.
    pub fn for_trait(trait_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            trait_name: Some(trait_name.into()),
            ..Self::new(type_name)
        }
    }

    /// Generic parameters declared on the impl, e.g. `<'a>`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    fn header(&self) -> String {
        let generics = self.generics.as_deref().unwrap_or("");
        match &self.trait_name {
            Some(trait_name) => {
                format!("impl{} {} for {} {{", generics, trait_name, self.type_name)
            }
            None => format!("impl{} {} {{", generics, self.type_name),
        }
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .attrs
            .iter()
            .map(|attr| CodeFragment::line(format!("#[{}]", attr)))
            .collect();

        let mut body = Vec::new();
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }

        fragments.push(CodeFragment::block(self.header(), body, "}"));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use typecat_codegen::CodeBuilder;

    use super::*;
    use crate::Param;

    fn build(i: &Impl) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(i);
        builder.build()
    }

    #[test]
    fn test_inherent_impl() {
        let i = Impl::new("Versions<'a>")
            .generics("<'a>")
            .attr("allow(non_snake_case)")
            .method(
                Fn::new("kotlin")
                    .param(Param::new("&self", ""))
                    .returns("&str")
                    .body_line("\"1.9.0\""),
            );
        assert_eq!(
            build(&i),
            "#[allow(non_snake_case)]\nimpl<'a> Versions<'a> {\n    pub fn kotlin(&self) -> &str {\n        \"1.9.0\"\n    }\n}\n"
        );
    }

    #[test]
    fn test_trait_impl() {
        let i = Impl::for_trait("Display", "Foo");
        assert_eq!(build(&i), "impl Display for Foo {\n}\n");
        assert!(i.is_empty());
    }

    #[test]
    fn test_methods_separated_by_blank_line() {
        let i = Impl::new("Foo").methods([Fn::new("a"), Fn::new("b")]);
        assert!(build(&i).contains("    }\n\n    pub fn b() {\n"));
    }
}
