//! A dynamically-typed call surface for script hosts.
//!
//! Hosts that expose a token list to a scripting language receive method names
//! and loosely-typed argument lists. [`TokenList::invoke`] checks arity at
//! runtime, coerces arguments the way such languages do, and dispatches to the
//! typed methods.
//!
//! ## Examples
//!
//! ```rust
//! use token_list::{Arg, Outcome, TokenList};
//!
//! let mut class = String::from("first second");
//! let mut list = TokenList::new(&mut class);
//!
//! let out = list.invoke("toggle", &[Arg::from("second"), Arg::from(true)]).unwrap();
//! assert_eq!(out, Outcome::Bool(true));
//!
//! assert!(list.invoke("item", &[]).unwrap_err().is_argument_error());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::list::TokenList;
use crate::owner::TokenOwner;

/// A loosely-typed argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    Null,
    Bool(bool),
    Index(i64),
    Str(String),
}

impl Arg {
    /// The string form used where a token is expected.
    #[must_use]
    pub fn to_token(&self) -> String {
        match self {
            Arg::Null => "null".to_string(),
            Arg::Bool(b) => b.to_string(),
            Arg::Index(n) => n.to_string(),
            Arg::Str(s) => s.clone(),
        }
    }

    /// Truthiness. An explicit `Null` is a supplied, falsy value.
    #[must_use]
    pub fn to_force(&self) -> bool {
        match self {
            Arg::Null => false,
            Arg::Bool(b) => *b,
            Arg::Index(n) => *n != 0,
            Arg::Str(s) => !s.is_empty(),
        }
    }

    /// The index form used by `item`.
    ///
    /// Strings must be canonical decimal indices (`"0"`, `"12"`); forms such as
    /// `"+1"`, `"01"` or `"-1"` name no token.
    #[must_use]
    pub fn to_index(&self) -> Option<isize> {
        match self {
            Arg::Index(n) => isize::try_from(*n).ok(),
            Arg::Str(s) if is_canonical_index(s) => s.parse().ok(),
            Arg::Str(_) | Arg::Null | Arg::Bool(_) => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Index(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Index(i64::from(n))
    }
}

/// The result of a dynamic call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Result of `item`; `None` is the no-token marker.
    Token(Option<String>),
    /// Result of `contains` and `toggle`.
    Bool(bool),
    /// Result of `toString`.
    Text(String),
    /// Result of `add` and `remove`.
    Unit,
}

impl<O: TokenOwner> TokenList<O> {
    /// Calls the operation `name` with loosely-typed `args`.
    ///
    /// Recognized names are `item`, `contains`, `add`, `remove`, `toggle` and
    /// `toString`. Arguments beyond those an operation reads are ignored.
    ///
    /// # Errors
    ///
    /// Fails with an argument error for an unknown name or when an operation
    /// other than `toString` gets no arguments, and with a validation error for
    /// bad tokens.
    pub fn invoke(&mut self, name: &str, args: &[Arg]) -> Result<Outcome> {
        match name {
            "item" => {
                let index = first(args, "item")?;
                let token = index.to_index().and_then(|i| self.item(i));
                Ok(Outcome::Token(token.map(str::to_string)))
            }
            "contains" => {
                let token = first(args, "contains")?.to_token();
                self.contains(&token).map(Outcome::Bool)
            }
            "add" => self.add(args.iter().map(Arg::to_token)).map(|()| Outcome::Unit),
            "remove" => self
                .remove(args.iter().map(Arg::to_token))
                .map(|()| Outcome::Unit),
            "toggle" => {
                let token = first(args, "toggle")?.to_token();
                let force = args.get(1).map(Arg::to_force);
                self.toggle_with(&token, force).map(Outcome::Bool)
            }
            "toString" => Ok(Outcome::Text(self.value())),
            other => Err(Error::unknown_operation(other)),
        }
    }
}

fn is_canonical_index(s: &str) -> bool {
    match s.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

fn first<'a>(args: &'a [Arg], operation: &'static str) -> Result<&'a Arg> {
    args.first()
        .ok_or_else(|| Error::not_enough_arguments(operation))
}
