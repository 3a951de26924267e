//! Validation helpers for typecat.toml content.

use miette::SourceSpan;
use typecat_core::tokens;

/// Find the span of a key (or quoted value) in TOML source.
///
/// Looks for the key at the start of a line (`key =`, `"key" =`), then for a
/// quoted occurrence such as a bundle member, and finally anywhere.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    if key.is_empty() {
        return None;
    }

    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        let (start, rest) = if let Some(rest) = trimmed.strip_prefix(key) {
            (offset + indent, rest)
        } else if let Some(rest) = trimmed
            .strip_prefix('"')
            .and_then(|t| t.strip_prefix(key))
            .and_then(|t| t.strip_prefix('"'))
        {
            (offset + indent + 1, rest)
        } else {
            offset += line.len();
            continue;
        };

        if rest.trim_start().starts_with('=') {
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }

    let quoted = format!("\"{}\"", key);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, key.len())));
    }

    src.find(key)
        .map(|pos| SourceSpan::from((pos, key.len())))
}

/// Validate a raw alias.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_alias(alias: &str) -> Option<&'static str> {
    if alias.is_empty() {
        return Some("alias cannot be empty");
    }

    if tokens(alias).next().is_none() {
        return Some("alias must contain something besides separators");
    }

    if alias.chars().any(char::is_whitespace) {
        return Some("alias cannot contain whitespace");
    }

    None
}

/// Hard keywords of Kotlin. They cannot be used as names without backticks.
pub const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Validate a dotted Kotlin package name such as `com.example.catalog`.
///
/// Returns `None` if valid, `Some(reason)` if invalid.
pub fn validate_package(package: &str) -> Option<&'static str> {
    if package.is_empty() {
        return Some("package cannot be empty");
    }

    for segment in package.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(_) => return Some("package segments must start with a letter or underscore"),
            None => return Some("package cannot contain empty segments"),
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Some("package segments may only contain letters, digits and underscores");
        }
        if KOTLIN_KEYWORDS.contains(&segment) {
            return Some("package segments cannot be Kotlin keywords");
        }
    }

    None
}
