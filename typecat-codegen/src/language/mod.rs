//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GENERATED_FILE_STEM, LanguageCodegen, PreviewFile};
