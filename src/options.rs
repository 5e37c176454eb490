//! Configuration options for token lists.
//!
//! - [`TokenListOptions`]: Main configuration struct
//! - [`ParseMode`]: What construction does with duplicated tokens
//! - [`WriteBack`]: When mutations write to the backing string
//!
//! ## Examples
//!
//! ```rust
//! use token_list::{ParseMode, TokenList, TokenListOptions};
//!
//! let mut class = String::from("a a b");
//!
//! let options = TokenListOptions::new().with_parse_mode(ParseMode::Preserve);
//! let list = TokenList::with_options(&mut class, options);
//! assert_eq!(list.len(), 3);
//! ```

/// How construction treats tokens repeated in the backing string.
///
/// # Examples
///
/// ```rust
/// use token_list::{ParseMode, TokenList, TokenListOptions};
///
/// let mut class = String::from("x y x");
/// assert_eq!(TokenList::new(&mut class).len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Keep the first occurrence of each token.
    #[default]
    Normalize,
    /// Mirror the raw string, duplicates included, until a mutation touches them.
    Preserve,
}

/// When a mutating call writes to the backing string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WriteBack {
    /// Every mutating call writes exactly once, even if nothing changed.
    #[default]
    Always,
    /// Only calls that changed the token sequence write.
    OnChange,
}

/// Configuration options for a [`TokenList`](crate::TokenList).
///
/// # Examples
///
/// ```rust
/// use token_list::{ParseMode, TokenListOptions, WriteBack};
///
/// let options = TokenListOptions::new()
///     .with_parse_mode(ParseMode::Preserve)
///     .with_write_back(WriteBack::OnChange);
/// assert_eq!(options.write_back, WriteBack::OnChange);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenListOptions {
    pub parse_mode: ParseMode,
    pub write_back: WriteBack,
}

impl TokenListOptions {
    /// Creates default options (normalize duplicates, always write back).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use token_list::{ParseMode, TokenListOptions, WriteBack};
    ///
    /// let options = TokenListOptions::new();
    /// assert_eq!(options.parse_mode, ParseMode::Normalize);
    /// assert_eq!(options.write_back, WriteBack::Always);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how duplicated tokens in the backing string are parsed.
    #[must_use]
    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    /// Sets when mutations write to the backing string.
    #[must_use]
    pub fn with_write_back(mut self, write_back: WriteBack) -> Self {
        self.write_back = write_back;
        self
    }
}
