//! Syntactic checks applied to registration inputs.
//!
//! These never fail; they only answer whether a piece of text has the
//! expected shape. Nothing here talks to DNS or parses numbers into values.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
        r#"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])"#,
        r#"|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    ))
    .expect("email pattern must compile")
});

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)$").expect("number pattern must compile")
});

/// True when the text has at least one non-whitespace character.
pub fn is_non_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// True when the text looks like `local@domain`.
///
/// The local part is either dot-separated atoms without specials or a quoted
/// string. The domain is dotted labels ending in two or more letters, or a
/// bracketed IPv4 literal.
pub fn is_email_shaped(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// True when the text reads as a plain decimal number.
///
/// Surrounding whitespace is ignored and a blank entry counts as numeric,
/// the same way a blank phone field parses to zero. A leading `+` or `-` is
/// accepted for international phone entry. Letters, exponents and inner
/// spaces are not.
///
/// Stricter than a JavaScript `isNaN` check: `1e5`, `0x1F` and `Infinity`
/// are rejected here although `isNaN` treats them as numbers.
pub fn is_numeric_shaped(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || NUMBER_PATTERN.is_match(trimmed)
}
