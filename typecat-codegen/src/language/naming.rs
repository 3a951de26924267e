//! Naming conventions for different target languages.

use typecat_core::Identifier;

/// Language-specific naming conventions.
///
/// Decides how an [`Identifier`] is written in the target language so that
/// it never collides with a keyword or with a member the backend declares
/// itself.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Keywords of the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
    /// Members declared by the generated code itself
    pub reserved_members: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name clashes with a member of the generated code.
    pub fn is_reserved_member(&self, name: &str) -> bool {
        self.reserved_members.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    ///
    /// Member clashes get a trailing `_`. Identifiers never contain `_`, so
    /// the escaped name cannot match another accessor.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved_member(name) {
            format!("{}_", name)
        } else if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Name of the accessor generated for `identifier`.
    pub fn property_name(&self, identifier: &Identifier) -> String {
        self.safe_name(identifier.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backticks(name: &str) -> String {
        format!("`{}`", name)
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        reserved_words: &["class", "object"],
        escape_reserved: backticks,
        reserved_members: &["catalog"],
    };

    #[test]
    fn test_safe_name() {
        assert_eq!(TEST_NAMING.safe_name("kotlin"), "kotlin");
        assert_eq!(TEST_NAMING.safe_name("class"), "`class`");
        assert_eq!(TEST_NAMING.safe_name("catalog"), "catalog_");
    }

    #[test]
    fn test_property_name() {
        let identifier = typecat_core::convert("room-runtime");
        assert_eq!(TEST_NAMING.property_name(&identifier), "roomRuntime");

        let identifier = typecat_core::convert("object");
        assert_eq!(TEST_NAMING.property_name(&identifier), "`object`");
    }
}
