//! # token_list
//!
//! An ordered set of whitespace-separated tokens that stays in sync with a single
//! string attribute owned by someone else, like an element's `class` attribute.
//!
//! ## What is a token list?
//!
//! Many formats store a set of flags as one human-readable string:
//! `class="card active"`, `rel="noopener noreferrer"`. The string stays the
//! source of truth, but callers want set operations on it. A [`TokenList`] parses
//! the string once, answers `item`/`contains` from memory, and writes the
//! normalized string back to its owner after every `add`, `remove` and `toggle`.
//!
//! ## Key Features
//!
//! - **Write-through**: the owner's string is updated before a mutation returns
//! - **Idempotent**: adding a present token or removing an absent one changes nothing
//! - **Order-preserving**: existing tokens keep their position, new ones are appended
//! - **Validated**: empty tokens and tokens with whitespace are rejected
//! - **Host-agnostic**: anything implementing [`TokenOwner`] can back a list
//!
//! ## Quick Start
//!
//! ```rust
//! use token_list::TokenList;
//!
//! let mut class = String::from("first second");
//! let mut list = TokenList::new(&mut class);
//!
//! list.add(["third"]).unwrap();
//! assert!(list.contains("third").unwrap());
//!
//! assert!(!list.toggle("first").unwrap());
//! assert_eq!(list.to_string(), "second third");
//! drop(list);
//!
//! assert_eq!(class, "second third");
//! ```
//!
//! ### Attaching lists to a host type
//!
//! Any [`TokenOwner`] gets a `token_list()` method through [`HasTokenList`]:
//!
//! ```rust
//! use token_list::HasTokenList;
//!
//! let mut rel: Option<String> = None;
//! rel.token_list().add(["noopener", "noreferrer"]).unwrap();
//! assert_eq!(rel.as_deref(), Some("noopener noreferrer"));
//! ```
//!
//! ## Threading
//!
//! Every operation is synchronous and lock-free. A list owned through
//! `Arc<Mutex<T>>` takes the lock for each read or write of the backing string,
//! but sequences of operations must be serialized by the caller.

pub mod attributes;
pub mod dynamic;
pub mod error;
pub mod list;
pub mod options;
pub mod owner;
pub mod token;

pub use attributes::{AttributeSlot, Attributes};
pub use dynamic::{Arg, Outcome};
pub use error::{Error, ErrorKind, Result};
pub use list::{create_token_list, TokenList};
pub use options::{ParseMode, TokenListOptions, WriteBack};
pub use owner::TokenOwner;

/// Gives every [`TokenOwner`] a `token_list()` accessor.
///
/// Each call builds a new list from the current backing string; nothing is cached.
pub trait HasTokenList: TokenOwner {
    /// Builds a list over this owner's backing string.
    fn token_list(&mut self) -> TokenList<&mut Self> {
        TokenList::new(self)
    }

    /// Builds a list over this owner's backing string with custom options.
    fn token_list_with(&mut self, options: TokenListOptions) -> TokenList<&mut Self> {
        TokenList::with_options(self, options)
    }
}

impl<T: TokenOwner + ?Sized> HasTokenList for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_list_rederives_each_access() {
        let mut class = String::from("a");
        class.token_list().add(["b"]).unwrap();
        class.push_str(" c");
        assert_eq!(class.token_list().as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_token_list_with_options() {
        let mut class = String::from("a a");
        let list = class.token_list_with(
            TokenListOptions::new().with_parse_mode(ParseMode::Preserve),
        );
        assert_eq!(list.len(), 2);
    }
}
