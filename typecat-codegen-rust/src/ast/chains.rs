//! Builder for Rust method chains (fluent API patterns).

use typecat_codegen::{CodeFragment, Renderable};

/// A method call in a chain.
#[derive(Debug, Clone)]
struct MethodCall {
    name: String,
    args: Vec<String>,
}

impl MethodCall {
    fn format(&self) -> String {
        format!(".{}({})", self.name, self.args.join(", "))
    }
}

/// Builder for fluent method chains like `catalog.find_version("x").map(f)`.
///
/// Rendered one call per line, indented below the base expression.
#[derive(Debug, Clone)]
pub struct MethodChain {
    base: String,
    calls: Vec<MethodCall>,
}

impl MethodChain {
    /// Create a new method chain starting from a base expression.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            calls: Vec::new(),
        }
    }

    /// Add a method call with a single argument.
    pub fn method_arg(mut self, name: impl Into<String>, arg: impl Into<String>) -> Self {
        self.calls.push(MethodCall {
            name: name.into(),
            args: vec![arg.into()],
        });
        self
    }

    /// Add a method call with multiple arguments.
    pub fn method_args(
        mut self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.calls.push(MethodCall {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }
}

impl Renderable for MethodChain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.calls.is_empty() {
            return vec![CodeFragment::line(&self.base)];
        }
        vec![
            CodeFragment::line(&self.base),
            CodeFragment::indent(
                self.calls
                    .iter()
                    .map(|call| CodeFragment::line(call.format()))
                    .collect(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use typecat_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_multiline() {
        let chain = MethodChain::new("self.catalog")
            .method_arg("find_plugin", "\"ksp\"")
            .method_args("or_else_throw_illegal_args", ["\"ksp\"", "\"Plugin\""]);

        let mut builder = CodeBuilder::rust();
        builder.emit(&chain);
        assert_eq!(
            builder.build(),
            "self.catalog\n    .find_plugin(\"ksp\")\n    .or_else_throw_illegal_args(\"ksp\", \"Plugin\")\n"
        );
    }

    #[test]
    fn test_base_only() {
        let mut builder = CodeBuilder::rust();
        builder.emit(&MethodChain::new("value"));
        assert_eq!(builder.build(), "value\n");
    }
}
