//! A whole Rust source file: grouped imports followed by items.

use std::collections::{BTreeMap, BTreeSet};

use typecat_codegen::{CodeBuilder, CodeFragment, Renderable};

/// One `use` declaration importing any number of symbols from a module.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: BTreeSet<String>,
}

impl Use {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: BTreeSet::new(),
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.insert(symbol.into());
        self
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let symbols: Vec<&str> = self.symbols.iter().map(String::as_str).collect();
        let line = match symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            _ => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        };
        vec![CodeFragment::Line(line)]
    }
}

/// Builder for a generated Rust file.
///
/// Imports are merged per module and written in module order; items are
/// written in insertion order, separated by a blank line.
///
/// # Example
///
/// ```
/// use typecat_codegen_rust::{RustFile, Struct};
///
/// let code = RustFile::new()
///     .import("typecat_catalog", "AliasSource")
///     .add(Struct::new("Versions"))
///     .render();
///
/// assert_eq!(code, "use typecat_catalog::AliasSource;\n\npub struct Versions {}\n");
/// ```
#[derive(Default)]
pub struct RustFile {
    imports: BTreeMap<String, Use>,
    items: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import `symbol` from `module`.
    pub fn import(mut self, module: &str, symbol: impl Into<String>) -> Self {
        let entry = self
            .imports
            .remove(module)
            .unwrap_or_else(|| Use::new(module));
        self.imports.insert(module.to_string(), entry.symbol(symbol));
        self
    }

    /// Import each of `symbols` from `module`.
    pub fn import_all(
        self,
        module: &str,
        symbols: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        symbols
            .into_iter()
            .fold(self, |file, symbol| file.import(module, symbol))
    }

    /// Append an item.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, item: R) -> Self {
        self.items.push(item.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(self, items: impl IntoIterator<Item = R>) -> Self {
        items.into_iter().fold(self, RustFile::add)
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();

        for import in self.imports.values() {
            builder.emit(import);
        }

        let sections = self.items.iter().enumerate();
        for (i, fragments) in sections {
            if i > 0 || !self.imports.is_empty() {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render with `header` as the first line.
    pub fn render_with_header(&self, header: &str) -> String {
        match self.render() {
            content if content.is_empty() => format!("{}\n", header),
            content => format!("{}\n\n{}", header, content),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.items.is_empty()
    }
}
