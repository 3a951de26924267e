use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Category;

/// Result type for catalog operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "typecat.toml");
/// ctx.validation_error("module must be 'group:name'", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    /// Create a new source context.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Get the source content.
    pub fn src(&self) -> &'a str {
        self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Locate `key` in the source, see [`crate::validate::find_key_span`].
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        crate::validate::find_key_span(self.src, key)
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `key` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_span(key),
            message: message.into(),
        })
    }

    /// Create an invalid alias error.
    pub fn invalid_alias_error(
        &self,
        catalog: &str,
        category: Category,
        alias: &str,
        reason: &'static str,
    ) -> Box<Error> {
        Box::new(Error::InvalidAlias {
            src: self.named_source(),
            span: self.find_span(alias),
            catalog: catalog.to_string(),
            category,
            alias: alias.to_string(),
            reason,
        })
    }

    /// Create an unknown bundle member error.
    pub fn unknown_bundle_member_error(
        &self,
        catalog: &str,
        bundle: &str,
        member: &str,
    ) -> Box<Error> {
        Box::new(Error::UnknownBundleMember {
            src: self.named_source(),
            span: self.find_span(member),
            catalog: catalog.to_string(),
            bundle: bundle.to_string(),
            member: member.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run typecat from the directory holding typecat.toml or pass --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse typecat.toml")]
    #[diagnostic(code(typecat::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(typecat::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {category} alias '{alias}' in catalog '{catalog}'")]
    #[diagnostic(
        code(typecat::invalid_alias),
        help("{reason}; aliases are tokens separated by '-', '_' or '.'")
    )]
    InvalidAlias {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid alias")]
        span: Option<SourceSpan>,
        catalog: String,
        category: Category,
        alias: String,
        reason: &'static str,
    },

    #[error("bundle '{bundle}' in catalog '{catalog}' references unknown library '{member}'")]
    #[diagnostic(
        code(typecat::unknown_bundle_member),
        help("declare '{member}' under [catalogs.{catalog}.libraries] or remove it from the bundle")
    )]
    UnknownBundleMember {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a library alias")]
        span: Option<SourceSpan>,
        catalog: String,
        bundle: String,
        member: String,
    },

    #[error("catalog '{name}' not found")]
    #[diagnostic(code(typecat::catalog_not_found), help("known catalogs: {available}"))]
    CatalogNotFound { name: String, available: String },

    #[error("{category} alias '{alias}' not found")]
    #[diagnostic(code(typecat::alias_not_found))]
    AliasNotFound { category: Category, alias: String },
}

impl Error {
    /// Create a catalog-not-found error listing the catalogs that do exist.
    pub fn catalog_not_found<'a>(
        name: impl Into<String>,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Box<Self> {
        let available = available.into_iter().collect::<Vec<_>>();
        let available = if available.is_empty() {
            "(none)".to_string()
        } else {
            available.join(", ")
        };
        Box::new(Error::CatalogNotFound {
            name: name.into(),
            available,
        })
    }

    /// Create an alias-not-found error.
    pub fn alias_not_found(category: Category, alias: impl Into<String>) -> Box<Self> {
        Box::new(Error::AliasNotFound {
            category,
            alias: alias.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_not_found_message() {
        let err = Error::alias_not_found(Category::Version, "doesNotExist");
        assert_eq!(err.to_string(), "Version alias 'doesNotExist' not found");
    }

    #[test]
    fn test_catalog_not_found_lists_available() {
        let err = Error::catalog_not_found("deps", ["libs", "tools"]);
        assert_eq!(err.to_string(), "catalog 'deps' not found");
        match *err {
            Error::CatalogNotFound { available, .. } => assert_eq!(available, "libs, tools"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_catalog_not_found_without_catalogs() {
        let err = Error::catalog_not_found("libs", []);
        match *err {
            Error::CatalogNotFound { available, .. } => assert_eq!(available, "(none)"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
