//! Target languages for generated accessors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Languages typecat can emit accessors for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Kotlin, for Gradle build logic
    #[default]
    Kotlin,
    /// Rust
    Rust,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kotlin => "kotlin",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "rust" | "rs" => Ok(Language::Rust),
            _ => Err(format!(
                "unknown language '{}', expected 'kotlin' or 'rust'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("kotlin").unwrap(), Language::Kotlin);
        assert_eq!(Language::from_str("kt").unwrap(), Language::Kotlin);
        assert_eq!(Language::from_str("Rust").unwrap(), Language::Rust);
        assert_eq!(Language::from_str("rs").unwrap(), Language::Rust);

        let err = Language::from_str("groovy").unwrap_err();
        assert!(err.contains("'groovy'"));
    }

    #[test]
    fn test_default_is_kotlin() {
        assert_eq!(Language::default(), Language::Kotlin);
    }

    #[test]
    fn test_deserialize() {
        let rust: Language = serde_json::from_str(r#""rust""#).unwrap();
        assert_eq!(rust, Language::Rust);
        assert!(serde_json::from_str::<Language>(r#""kt""#).is_err());
    }
}
