//! KotlinFile abstraction for structured Kotlin file generation.
//!
//! Provides a high-level API for generating Kotlin files with a package
//! declaration, organized imports and body content.

use typecat_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A structured representation of a Kotlin source file.
///
/// Sections are rendered in order (package, imports, body) with one blank
/// line between sections and between body elements. Imports are sorted.
#[derive(Default)]
pub struct KotlinFile {
    package: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl KotlinFile {
    /// Create a new empty KotlinFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package declaration.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with Kotlin indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::KOTLIN);
        let mut sections = 0;

        if let Some(package) = &self.package {
            builder.push_line(&format!("package {}", package));
            sections += 1;
        }

        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            let mut imports = self.imports.clone();
            imports.sort();
            imports.dedup();
            for import in &imports {
                builder.emit(import);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        builder.build()
    }

    /// Render the file below a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.package.is_none() && self.imports.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Property;

    #[test]
    fn test_empty_file() {
        let file = KotlinFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
        assert_eq!(file.render_with_header("// header"), "// header\n");
    }

    #[test]
    fn test_imports_are_sorted_and_deduplicated() {
        let file = KotlinFile::new()
            .import(Import::new("org.gradle.api.provider.Provider"))
            .import(Import::new("java.util.Optional"))
            .import(Import::new("java.util.Optional"));

        assert_eq!(
            file.render(),
            "import java.util.Optional\nimport org.gradle.api.provider.Provider\n"
        );
    }

    #[test]
    fn test_sections_are_separated() {
        let file = KotlinFile::new()
            .package("com.example")
            .import(Import::new("java.util.Optional"))
            .add(Property::value("a", "1"))
            .add(Property::value("b", "2"));

        assert_eq!(
            file.render_with_header("// header"),
            "// header\n\npackage com.example\n\nimport java.util.Optional\n\nval a = 1\n\nval b = 2\n"
        );
    }
}
