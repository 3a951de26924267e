use std::path::{Path, PathBuf};

use typecat_catalog::Category;
use typecat_codegen::{
    AccessorKind, AccessorProperty, CatalogAccessor, CodeFragment, GENERATED_FILE_STEM,
    GeneratedModule, Renderable,
};
use typecat_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::{
    Field, Fn, Impl, MethodChain, Param, RustFile, Struct, Trait, naming::RUST_NAMING,
};

const OR_ELSE_THROW: &str = "OrElseThrowIllegalArgs";
const CATALOG_TYPE: &str = "&'a dyn AliasSource";

/// The GeneratedCatalog.rs file
pub struct GeneratedCatalogRs<'a> {
    runtime_crate: &'a str,
    module: &'a GeneratedModule,
}

impl<'a> GeneratedCatalogRs<'a> {
    pub fn new(runtime_crate: &'a str, module: &'a GeneratedModule) -> Self {
        Self {
            runtime_crate,
            module,
        }
    }

    /// Runtime symbols the rendered code uses.
    fn imports(&self) -> Vec<&'static str> {
        let mut symbols = vec!["AliasSource", "ArgumentError"];

        if self.module.property_count() > 0 {
            symbols.push("VersionCatalog");
        }

        let lazy: Vec<_> = self
            .module
            .accessors()
            .iter()
            .filter(|accessor| !accessor.is_empty() && accessor.kind() == AccessorKind::Lazy)
            .map(|accessor| provided_type(accessor.category()))
            .collect();
        if !lazy.is_empty() {
            symbols.push("Provider");
            symbols.extend(lazy);
        }

        symbols
    }

    fn or_else_throw_method() -> Fn {
        Fn::new("or_else_throw_illegal_args")
            .param(Param::new("self", ""))
            .param(Param::new("alias", "&str"))
            .param(Param::new("category", "&str"))
            .returns("Result<T, ArgumentError>")
    }

    /// The extension trait shared by every accessor.
    fn or_else_throw_trait() -> Trait {
        Trait::new(format!("{}<T>", OR_ELSE_THROW))
            .doc("Turns a missing alias into an [`ArgumentError`].")
            .method(Self::or_else_throw_method())
    }

    fn or_else_throw_impl() -> Impl {
        Impl::for_trait(format!("{}<T>", OR_ELSE_THROW), "Option<T>")
            .generics("<T>")
            .method(Self::or_else_throw_method().private().body_line(
                "self.ok_or_else(|| ArgumentError::new(format!(\"{} alias '{}' not found\", category, alias)))",
            ))
    }

    fn root_struct(&self) -> Struct {
        Struct::new("GeneratedCatalog")
            .generics("<'a>")
            .doc(format!(
                "Typed accessors for the `{}` catalog.",
                self.module.catalog_name()
            ))
            .fields(self.module.accessors().iter().map(|accessor| {
                Field::new(
                    accessor.field_name(),
                    format!("{}<'a>", accessor.type_name()),
                )
                .public()
            }))
    }

    fn root_impl(&self) -> Impl {
        let fields = self
            .module
            .accessors()
            .iter()
            .map(|accessor| {
                CodeFragment::line(format!(
                    "{}: {} {{ catalog }},",
                    accessor.field_name(),
                    accessor.type_name()
                ))
            })
            .collect();

        Impl::new("GeneratedCatalog<'a>").generics("<'a>").method(
            Fn::new("new")
                .param(Param::new("catalog", CATALOG_TYPE))
                .returns("Self")
                .body_fragment(CodeFragment::block("Self {", fields, "}")),
        )
    }

    fn accessor_struct(accessor: &CatalogAccessor) -> Struct {
        let s = Struct::new(accessor.type_name())
            .generics("<'a>")
            .field(Field::new("catalog", CATALOG_TYPE));

        // the field is only read by accessor methods
        if accessor.is_empty() {
            s.attr("allow(dead_code)")
        } else {
            s
        }
    }

    fn accessor_impl(accessor: &CatalogAccessor) -> Impl {
        Impl::new(format!("{}<'a>", accessor.type_name()))
            .generics("<'a>")
            .attr("allow(non_snake_case)")
            .methods(
                accessor
                    .properties()
                    .iter()
                    .map(|property| accessor_method(accessor, property)),
            )
    }
}

/// The method generated for one alias.
fn accessor_method(accessor: &CatalogAccessor, property: &AccessorProperty) -> Fn {
    let category = accessor.category();
    let alias = format!("{:?}", property.alias());
    let label = format!("{:?}", category.label());
    let lookup = format!("find_{}", category.label().to_lowercase());

    let method = Fn::new(RUST_NAMING.property_name(property.identifier()))
        .param(Param::new("&self", ""));

    match accessor.kind() {
        AccessorKind::Eager => method
            .returns("Result<String, ArgumentError>")
            .body_node(
                MethodChain::new("self.catalog")
                    .method_arg(lookup, alias.clone())
                    .method_args("or_else_throw_illegal_args", [alias, label])
                    .method_arg("map", "|version| version.required_version().to_string()"),
            ),
        AccessorKind::Lazy => {
            let chain = MethodChain::new("catalog")
                .method_arg(lookup, alias.clone())
                .method_args("or_else_throw_illegal_args", [alias, label]);
            method
                .returns(format!("Provider<'a, {}>", provided_type(category)))
                .body_line("let catalog = self.catalog;")
                .body_fragment(CodeFragment::block(
                    "Provider::new(move || {",
                    chain.to_fragments(),
                    "})",
                ))
        }
    }
}

/// Runtime type a lazy accessor of `category` provides.
fn provided_type(category: Category) -> &'static str {
    match category {
        Category::Library => "LibraryDependency",
        Category::Bundle => "BundleDependency",
        Category::Plugin => "PluginDependency",
        Category::Version => "VersionConstraint",
    }
}

impl GeneratedFile for GeneratedCatalogRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.rs", GENERATED_FILE_STEM))
    }

    fn render(&self) -> String {
        let accessors = self.module.accessors();

        let mut file = RustFile::new()
            .import_all(self.runtime_crate, self.imports())
            .add(Self::or_else_throw_trait())
            .add(Self::or_else_throw_impl())
            .add(self.root_struct())
            .add(self.root_impl());

        for accessor in accessors {
            file = file.add(Self::accessor_struct(accessor));
            if !accessor.is_empty() {
                file = file.add(Self::accessor_impl(accessor));
            }
        }

        file.render_with_header(GENERATED_HEADER)
    }
}
