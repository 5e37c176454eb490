//! Token parsing and validation.
//!
//! A token is a non-empty string with no whitespace in it. The backing string is
//! split on runs of whitespace, so leading, trailing and repeated separators
//! never produce empty tokens.

use crate::error::{Error, Result};

/// Returns `true` for every character that separates tokens.
///
/// This is the `\s` class of script hosts: Unicode whitespace without NEL
/// (U+0085), plus the byte order mark.
#[must_use]
pub fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Checks that `token` is non-empty and free of whitespace.
///
/// # Examples
///
/// ```rust
/// use token_list::token::validate;
///
/// assert_eq!(validate("active").unwrap(), "active");
/// assert!(validate("").is_err());
/// assert!(validate("two words").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyToken`] for `""` and [`Error::InvalidCharacter`] when
/// any separator character is present.
pub fn validate(token: &str) -> Result<&str> {
    if token.is_empty() {
        return Err(Error::EmptyToken);
    }
    if token.contains(is_separator) {
        return Err(Error::invalid_character(token));
    }
    Ok(token)
}

/// Splits a backing string into its tokens, in order, duplicates included.
///
/// # Examples
///
/// ```rust
/// use token_list::token::split_tokens;
///
/// let tokens: Vec<_> = split_tokens("  first\tsecond\n first ").collect();
/// assert_eq!(tokens, ["first", "second", "first"]);
/// ```
pub fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_separator).filter(|s| !s.is_empty())
}
