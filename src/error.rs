//! Error types for token list operations.
//!
//! Every failure a [`TokenList`](crate::TokenList) reports is a malformed call,
//! never a transient condition, so there is nothing to retry.
//!
//! ## Error Categories
//!
//! - **Argument errors**: an operation that needs at least one token was given none,
//!   or the dynamic surface was asked for an operation that does not exist
//! - **Validation errors**: a token was empty or contained whitespace
//!
//! ## Examples
//!
//! ```rust
//! use token_list::{ErrorKind, TokenList};
//!
//! let mut class = String::from("first second");
//! let mut list = TokenList::new(&mut class);
//!
//! let err = list.add(["bad token"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! ```

use thiserror::Error;

/// Represents all possible errors raised by token list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation requiring at least one argument was called with none
    #[error("Not enough arguments to TokenList.{operation}")]
    NotEnoughArguments { operation: &'static str },

    /// The token was the empty string
    #[error("An invalid or illegal string was specified")]
    EmptyToken,

    /// The token contained a whitespace character
    #[error("String contains an invalid character: {token:?}")]
    InvalidCharacter { token: String },

    /// The dynamic call surface was asked for an unknown operation
    #[error("Unknown TokenList operation: {0}")]
    UnknownOperation(String),
}

/// The two broad classes of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The call was missing required arguments or named no real operation.
    Argument,
    /// A supplied token was empty or contained whitespace.
    Validation,
}

impl Error {
    /// Creates an arity error for `operation`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use token_list::Error;
    ///
    /// let err = Error::not_enough_arguments("add");
    /// assert_eq!(err.to_string(), "Not enough arguments to TokenList.add");
    /// ```
    pub fn not_enough_arguments(operation: &'static str) -> Self {
        Error::NotEnoughArguments { operation }
    }

    /// Creates an error for a token carrying whitespace.
    pub fn invalid_character(token: &str) -> Self {
        Error::InvalidCharacter {
            token: token.to_string(),
        }
    }

    /// Creates an error for an operation name the dynamic surface does not know.
    pub fn unknown_operation(name: &str) -> Self {
        Error::UnknownOperation(name.to_string())
    }

    /// Classifies this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotEnoughArguments { .. } | Error::UnknownOperation(_) => ErrorKind::Argument,
            Error::EmptyToken | Error::InvalidCharacter { .. } => ErrorKind::Validation,
        }
    }

    /// Returns `true` for arity and unknown-operation errors.
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }

    /// Returns `true` for empty or whitespace-bearing tokens.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

pub type Result<T> = std::result::Result<T, Error>;
