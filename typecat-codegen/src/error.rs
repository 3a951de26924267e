use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use typecat_catalog::Category;

/// Errors raised while generating accessors.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// The catalog could not be found or read.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(Box<typecat_catalog::Error>),

    #[error("{category} aliases '{first}' and '{second}' both map to '{identifier}'")]
    #[diagnostic(
        code(typecat::identifier_collision),
        help("rename one of the aliases; '-', '_' and '.' are dropped when deriving accessor names")
    )]
    IdentifierCollision {
        category: Category,
        identifier: String,
        first: String,
        second: String,
    },

    #[error("{category} alias '{alias}' maps to invalid accessor name '{identifier}'")]
    #[diagnostic(code(typecat::invalid_identifier), help("{reason}"))]
    InvalidIdentifier {
        category: Category,
        alias: String,
        identifier: String,
        reason: &'static str,
    },

    #[error("invalid package '{package}': {reason}")]
    #[diagnostic(
        code(typecat::invalid_package),
        help("use dot-separated identifiers such as com.example.catalog")
    )]
    InvalidPackage {
        package: String,
        reason: &'static str,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(typecat::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<Box<typecat_catalog::Error>> for GenerateError {
    fn from(err: Box<typecat_catalog::Error>) -> Self {
        Self::Catalog(err)
    }
}
