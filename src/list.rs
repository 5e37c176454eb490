//! The token list itself.
//!
//! A [`TokenList`] parses its owner's backing string once, answers queries from
//! the in-memory sequence, and writes the space-joined sequence back to the
//! owner before every mutating call returns.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{Error, Result};
use crate::options::{ParseMode, TokenListOptions, WriteBack};
use crate::owner::TokenOwner;
use crate::token::{split_tokens, validate};

/// An ordered set of tokens synchronized with a string attribute of `O`.
///
/// # Examples
///
/// ```rust
/// use token_list::TokenList;
///
/// let mut class = String::from("first second third");
/// let mut list = TokenList::new(&mut class);
///
/// assert_eq!(list.item(1), Some("second"));
/// assert_eq!(list.item(-1), None);
/// assert!(list.contains("second").unwrap());
///
/// list.remove(["second", "third"]).unwrap();
/// assert_eq!(class, "first");
/// ```
pub struct TokenList<O: TokenOwner> {
    owner: O,
    tokens: Vec<String>,
    options: TokenListOptions,
}

impl<O: TokenOwner> TokenList<O> {
    /// Builds a list from the owner's current backing string, with default options.
    ///
    /// An absent attribute reads as the empty string. Construction never fails.
    pub fn new(owner: O) -> Self {
        Self::with_options(owner, TokenListOptions::default())
    }

    /// Builds a list from the owner's current backing string.
    pub fn with_options(owner: O, options: TokenListOptions) -> Self {
        let tokens = match owner.token_string() {
            Some(value) => parse(&value, options.parse_mode),
            None => Vec::new(),
        };
        tracing::trace!(tokens = tokens.len(), "token list constructed");
        TokenList {
            owner,
            tokens,
            options,
        }
    }

    /// Returns the token at `index`, or `None` when `index` is negative or past the end.
    #[must_use]
    pub fn item(&self, index: isize) -> Option<&str> {
        usize::try_from(index).ok().and_then(|i| self.at(i))
    }

    /// Returns the token at `index`, if any.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Returns `true` if `token` is present.
    ///
    /// # Errors
    ///
    /// Fails with a validation error if `token` is empty or contains whitespace.
    pub fn contains(&self, token: &str) -> Result<bool> {
        let token = validate(token)?;
        Ok(self.position(token).is_some())
    }

    /// Appends each token that is not already present, in argument order.
    ///
    /// The backing string is written once, after the last token. If a token fails
    /// validation, the tokens before it stay added and are written back before the
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use token_list::TokenList;
    ///
    /// let mut class = String::from("first second");
    /// TokenList::new(&mut class).add(["third", "first"]).unwrap();
    /// assert_eq!(class, "first second third");
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with an argument error when `tokens` is empty and with a validation
    /// error on the first empty or whitespace-bearing token.
    pub fn add<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.apply_each("add", tokens, |list, token| {
            if list.position(token).is_some() {
                return false;
            }
            list.tokens.push(token.to_string());
            true
        })
    }

    /// Removes each token that is present, in argument order.
    ///
    /// Same arity, validation and write-back rules as [`TokenList::add`]. Under
    /// [`ParseMode::Preserve`] a token repeated in the backing string loses every
    /// copy, not just the first.
    ///
    /// # Errors
    ///
    /// Fails with an argument error when `tokens` is empty and with a validation
    /// error on the first empty or whitespace-bearing token.
    pub fn remove<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.apply_each("remove", tokens, |list, token| list.remove_token(token))
    }

    /// Removes `token` if present, adds it otherwise. Returns whether it is now present.
    ///
    /// # Errors
    ///
    /// Fails with a validation error if `token` is empty or contains whitespace.
    pub fn toggle(&mut self, token: &str) -> Result<bool> {
        self.toggle_with(token, None)
    }

    /// Toggles `token`, or forces it on (`Some(true)`) or off (`Some(false)`).
    ///
    /// Returns whether the token is present afterwards. When this removes a token
    /// parsed more than once under [`ParseMode::Preserve`], every copy goes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use token_list::TokenList;
    ///
    /// let mut class = String::from("a b");
    /// let mut list = TokenList::new(&mut class);
    /// assert!(list.toggle_with("a", Some(true)).unwrap());
    /// assert!(!list.toggle_with("c", Some(false)).unwrap());
    /// assert_eq!(list.to_string(), "a b");
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with a validation error if `token` is empty or contains whitespace.
    pub fn toggle_with(&mut self, token: &str, force: Option<bool>) -> Result<bool> {
        let token = validate(token)?;
        let (changed, present) = match (self.position(token), force) {
            (Some(_), Some(true)) => (false, true),
            (Some(_), _) => (self.remove_token(token), false),
            (None, Some(false)) => (false, false),
            (None, _) => {
                self.tokens.push(token.to_string());
                (true, true)
            }
        };
        self.sync(changed);
        Ok(present)
    }

    /// The serialized form: tokens joined by single spaces.
    #[must_use]
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn options(&self) -> TokenListOptions {
        self.options
    }

    /// The owner handle this list writes through.
    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// Releases the owner handle.
    pub fn into_owner(self) -> O {
        self.owner
    }

    fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    // Removes every occurrence; more than one only exists under `ParseMode::Preserve`.
    fn remove_token(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    fn apply_each<I, S, F>(
        &mut self,
        operation: &'static str,
        tokens: I,
        mut apply: F,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&mut Self, &str) -> bool,
    {
        let mut tokens = tokens.into_iter().peekable();
        if tokens.peek().is_none() {
            return Err(Error::not_enough_arguments(operation));
        }

        let mut changed = false;
        for token in tokens {
            match validate(token.as_ref()) {
                Ok(token) => changed |= apply(self, token),
                Err(err) => {
                    if changed {
                        self.write_back();
                    }
                    return Err(err);
                }
            }
        }
        self.sync(changed);
        Ok(())
    }

    fn sync(&mut self, changed: bool) {
        if changed || self.options.write_back == WriteBack::Always {
            self.write_back();
        }
    }

    fn write_back(&mut self) {
        let value = self.value();
        tracing::trace!(len = value.len(), "writing token list back to owner");
        self.owner.set_token_string(value);
    }
}

fn parse(value: &str, mode: ParseMode) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in split_tokens(value) {
        if mode == ParseMode::Normalize && tokens.iter().any(|t| t == token) {
            continue;
        }
        tokens.push(token.to_string());
    }
    tokens
}

/// Builds a [`TokenList`] bound to `owner`.
///
/// # Examples
///
/// ```rust
/// use token_list::create_token_list;
///
/// let mut class: Option<String> = None;
/// let mut list = create_token_list(&mut class);
/// assert!(list.is_empty());
/// assert!(list.toggle("open").unwrap());
/// assert_eq!(class.as_deref(), Some("open"));
/// ```
pub fn create_token_list<O: TokenOwner>(owner: O) -> TokenList<O> {
    TokenList::new(owner)
}

impl<O: TokenOwner> fmt::Display for TokenList<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.iter();
        if let Some(first) = tokens.next() {
            f.write_str(first)?;
            for token in tokens {
                f.write_str(" ")?;
                f.write_str(token)?;
            }
        }
        Ok(())
    }
}

impl<O: TokenOwner> fmt::Debug for TokenList<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenList")
            .field("tokens", &self.tokens)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a, O: TokenOwner> IntoIterator for &'a TokenList<O> {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<O: TokenOwner> Serialize for TokenList<O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.tokens.len()))?;
        for token in &self.tokens {
            seq.serialize_element(token)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_construct_from_messy_string() {
        let mut s = String::from("  a\t\tb \n c  ");
        let list = TokenList::new(&mut s);
        assert_eq!(list.as_slice(), ["a", "b", "c"]);
        assert_eq!(list.to_string(), "a b c");
    }

    #[test]
    fn test_construct_absent_is_empty() {
        let mut s: Option<String> = None;
        let list = TokenList::new(&mut s);
        assert!(list.is_empty());
        assert_eq!(list.value(), "");
    }

    #[test]
    fn test_construction_does_not_write() {
        let mut s = String::from("  a   b ");
        let _ = TokenList::new(&mut s);
        assert_eq!(s, "  a   b ");
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!(parse("a b a c b", ParseMode::Normalize), ["a", "b", "c"]);
        assert_eq!(parse("a b a c b", ParseMode::Preserve), ["a", "b", "a", "c", "b"]);
    }

    #[test]
    fn test_preserve_remove_drops_every_copy() {
        let mut s = String::from("a b a");
        let options = TokenListOptions::new().with_parse_mode(ParseMode::Preserve);
        let mut list = TokenList::with_options(&mut s, options);
        list.remove(["a"]).unwrap();
        assert_eq!(list.as_slice(), ["b"]);
        drop(list);
        assert_eq!(s, "b");
    }

    #[test]
    fn test_item_bounds() {
        let mut s = String::from("x y");
        let list = TokenList::new(&mut s);
        assert_eq!(list.item(0), Some("x"));
        assert_eq!(list.item(1), Some("y"));
        assert_eq!(list.item(2), None);
        assert_eq!(list.item(-1), None);
        assert_eq!(list.item(isize::MIN), None);
    }

    #[test]
    fn test_add_empty_iterator_is_argument_error() {
        let mut s = String::from("a");
        let mut list = TokenList::new(&mut s);
        let err = list.add(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, Error::not_enough_arguments("add"));
        let err = list.remove(std::iter::empty::<&str>()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_add_partial_effect_is_written_back() {
        let mut s = String::from("a");
        let mut list = TokenList::new(&mut s);
        let err = list.add(["b", "", "c"]).unwrap_err();
        assert_eq!(err, Error::EmptyToken);
        assert_eq!(list.as_slice(), ["a", "b"]);
        drop(list);
        assert_eq!(s, "a b");
    }

    #[test]
    fn test_invalid_first_token_leaves_owner_untouched() {
        let mut s = String::from(" a  b ");
        let mut list = TokenList::new(&mut s);
        assert!(list.remove(["x y", "a"]).is_err());
        drop(list);
        assert_eq!(s, " a  b ");
    }

    #[test]
    fn test_write_back_always_normalizes_on_noop() {
        let mut s = String::from("  a   b ");
        TokenList::new(&mut s).add(["a"]).unwrap();
        assert_eq!(s, "a b");
    }

    #[test]
    fn test_write_back_on_change_skips_noop() {
        let mut s = String::from("  a   b ");
        let options = TokenListOptions::new().with_write_back(WriteBack::OnChange);
        let mut list = TokenList::with_options(&mut s, options);
        list.add(["a"]).unwrap();
        list.remove(["z"]).unwrap();
        list.toggle_with("a", Some(true)).unwrap();
        drop(list);
        assert_eq!(s, "  a   b ");
    }

    #[derive(Default)]
    struct CountingOwner {
        value: String,
        writes: usize,
    }

    impl TokenOwner for CountingOwner {
        fn token_string(&self) -> Option<std::borrow::Cow<'_, str>> {
            Some(self.value.as_str().into())
        }

        fn set_token_string(&mut self, value: String) {
            self.value = value;
            self.writes += 1;
        }
    }

    #[test]
    fn test_multi_token_calls_write_once() {
        let mut owner = CountingOwner::default();
        let mut list = TokenList::new(&mut owner);

        list.add(["x", "y", "z"]).unwrap();
        assert_eq!(list.owner().writes, 1);
        list.remove(["x", "y"]).unwrap();
        assert_eq!(list.owner().writes, 2);
        list.toggle("w").unwrap();
        assert_eq!(list.owner().writes, 3);
        drop(list);

        assert_eq!(owner.value, "z w");
    }

    #[test]
    fn test_failed_first_token_does_not_write() {
        let mut owner = CountingOwner::default();
        let mut list = TokenList::new(&mut owner);

        assert!(list.add(["", "x"]).is_err());
        assert_eq!(list.owner().writes, 0);
        assert!(list.add(["x", "y", "bad token"]).is_err());
        assert_eq!(list.owner().writes, 1);
    }

    #[test]
    fn test_on_change_noops_do_not_write() {
        let mut owner = CountingOwner {
            value: "a".to_string(),
            writes: 0,
        };
        let options = TokenListOptions::new().with_write_back(WriteBack::OnChange);
        let mut list = TokenList::with_options(&mut owner, options);

        assert!(!list.toggle_with("b", Some(false)).unwrap());
        assert!(list.toggle_with("a", Some(true)).unwrap());
        list.add(["a"]).unwrap();
        list.remove(["b"]).unwrap();
        assert_eq!(list.owner().writes, 0);

        list.add(["a", "b", "c"]).unwrap();
        assert_eq!(list.owner().writes, 1);
    }

    #[test]
    fn test_toggle_decision_table() {
        let cases = [
            ("t", None, false, ""),
            ("t", Some(true), true, "t"),
            ("t", Some(false), false, ""),
            ("u", None, true, "t u"),
            ("u", Some(true), true, "t u"),
            ("u", Some(false), false, "t"),
        ];
        for (token, force, expected, backing) in cases {
            let mut s = String::from("t");
            let result = TokenList::new(&mut s).toggle_with(token, force).unwrap();
            assert_eq!(result, expected, "toggle({token}, {force:?})");
            assert_eq!(s, backing, "toggle({token}, {force:?})");
        }
    }

    #[test]
    fn test_serialize_as_sequence() {
        let mut s = String::from("a b");
        let list = TokenList::new(&mut s);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_iteration() {
        let mut s = String::from("a b c");
        let list = TokenList::new(&mut s);
        let joined: Vec<&String> = (&list).into_iter().collect();
        assert_eq!(joined.len(), 3);
        assert_eq!(list.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}
