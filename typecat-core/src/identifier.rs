//! Mapping catalog aliases to accessor identifiers.
//!
//! An alias such as `firebase.crashlytics.gradlePlugin` is split on `-`, `_`
//! and `.` into tokens. The first token is kept as written, every following
//! token has its first character uppercased, and the tokens are concatenated:
//! `firebaseCrashlyticsGradlePlugin`.

use std::fmt;

use serde::Serialize;

/// Characters that separate the tokens of an alias.
const SEPARATORS: &[char] = &['-', '_', '.'];

/// An accessor name derived from a catalog alias.
///
/// Identifiers never contain `_`: every separator is consumed by [`convert`].
/// Language backends rely on that to escape names with a trailing underscore
/// without risking a clash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return its text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check identifier syntax. Returns `None` if valid, `Some(reason)` otherwise.
    pub fn validate(&self) -> Option<&'static str> {
        validate_identifier(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Split an alias into its non-empty tokens.
///
/// Consecutive, leading or trailing separators yield no token.
pub fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SEPARATORS).filter(|token| !token.is_empty())
}

/// Convert an alias into its accessor identifier.
///
/// Total and deterministic. Token 0 is kept verbatim (it is not
/// decapitalized), so `Foo-bar` maps to `FooBar`. An alias made only of
/// separators maps to the empty identifier, which [`validate_identifier`]
/// rejects.
///
/// ```
/// use typecat_core::convert;
///
/// assert_eq!(convert("room-runtime"), "roomRuntime");
/// assert_eq!(convert("ksp"), "ksp");
/// ```
pub fn convert(raw: &str) -> Identifier {
    let mut out = String::with_capacity(raw.len());

    for (i, token) in tokens(raw).enumerate() {
        if i == 0 {
            out.push_str(token);
            continue;
        }

        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    Identifier(out)
}

/// Validate identifier syntax: an ASCII letter or underscore, followed by
/// ASCII letters, digits or underscores.
///
/// Returns `None` if valid, `Some(reason)` if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("identifier cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("identifier must start with a letter"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("identifier may only contain ASCII letters and digits");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_hyphenated() {
        assert_eq!(convert("room-runtime"), "roomRuntime");
        assert_eq!(convert("androidx-compose-bom"), "androidxComposeBom");
    }

    #[test]
    fn test_convert_single_token() {
        assert_eq!(convert("ksp"), "ksp");
    }

    #[test]
    fn test_convert_dotted_keeps_inner_case() {
        assert_eq!(
            convert("firebase.crashlytics.gradlePlugin"),
            "firebaseCrashlyticsGradlePlugin"
        );
    }

    #[test]
    fn test_convert_mixed_separators() {
        assert_eq!(convert("kotlin_stdlib.jdk-8"), "kotlinStdlibJdk8");
    }

    #[test]
    fn test_convert_does_not_decapitalize_first_token() {
        assert_eq!(convert("Foo-bar"), "FooBar");
    }

    #[test]
    fn test_convert_skips_empty_tokens() {
        assert_eq!(convert("a--b"), "aB");
        assert_eq!(convert("-leading"), "leading");
        assert_eq!(convert("trailing."), "trailing");
        assert_eq!(convert("---"), "");
    }

    #[test]
    fn test_convert_digit_tokens() {
        assert_eq!(convert("androidx-2fa"), "androidx2fa");
        assert_eq!(convert("2fa-auth"), "2faAuth");
    }

    #[test]
    fn test_convert_never_emits_underscore() {
        for alias in ["a_b", "__x__", "x_y_z", "a-_-b"] {
            assert!(!convert(alias).as_str().contains('_'), "{alias}");
        }
    }

    #[test]
    fn test_tokens() {
        let collected: Vec<_> = tokens("a.b-c_d").collect();
        assert_eq!(collected, vec!["a", "b", "c", "d"]);
        assert_eq!(tokens("..").count(), 0);
    }

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("roomRuntime"), None);
        assert_eq!(validate_identifier("_hidden"), None);
        assert_eq!(validate_identifier("v2"), None);
        assert_eq!(validate_identifier(""), Some("identifier cannot be empty"));
        assert_eq!(validate_identifier("2faAuth"), Some("identifier must start with a letter"));
        assert_eq!(
            validate_identifier("café"),
            Some("identifier may only contain ASCII letters and digits")
        );
    }

    #[test]
    fn test_identifier_serializes_as_string() {
        let json = serde_json::to_string(&convert("room-runtime")).unwrap();
        assert_eq!(json, "\"roomRuntime\"");
    }
}
