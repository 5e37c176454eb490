//! The host side of the synchronization contract.
//!
//! A [`TokenOwner`] is anything holding one string attribute that a
//! [`TokenList`](crate::TokenList) reads once on construction and overwrites
//! after every mutation. The list holds whatever handle the host hands it:
//!
//! - `&mut T`: the borrow checker stops the list from outliving the host.
//! - `Rc<RefCell<T>>`, `Arc<Mutex<T>>`: the list shares ownership and keeps the
//!   host alive.
//! - `rc::Weak<RefCell<T>>`: a non-owning handle. Once the host is dropped,
//!   reads see an absent attribute and writes are discarded.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex};

/// Read/write access to a backing string attribute.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use token_list::{TokenList, TokenOwner};
///
/// struct Element {
///     class_name: Option<String>,
/// }
///
/// impl TokenOwner for Element {
///     fn token_string(&self) -> Option<Cow<'_, str>> {
///         self.class_name.as_deref().map(Cow::Borrowed)
///     }
///
///     fn set_token_string(&mut self, value: String) {
///         self.class_name = Some(value);
///     }
/// }
///
/// let mut element = Element { class_name: None };
/// TokenList::new(&mut element).add(["open"]).unwrap();
/// assert_eq!(element.class_name.as_deref(), Some("open"));
/// ```
pub trait TokenOwner {
    /// Current value of the attribute, `None` when it is absent.
    fn token_string(&self) -> Option<Cow<'_, str>>;

    /// Overwrites the attribute.
    fn set_token_string(&mut self, value: String);
}

impl TokenOwner for String {
    fn token_string(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }

    fn set_token_string(&mut self, value: String) {
        *self = value;
    }
}

impl TokenOwner for Option<String> {
    fn token_string(&self) -> Option<Cow<'_, str>> {
        self.as_deref().map(Cow::Borrowed)
    }

    fn set_token_string(&mut self, value: String) {
        *self = Some(value);
    }
}

impl<T: TokenOwner + ?Sized> TokenOwner for &mut T {
    fn token_string(&self) -> Option<Cow<'_, str>> {
        (**self).token_string()
    }

    fn set_token_string(&mut self, value: String) {
        (**self).set_token_string(value);
    }
}

impl<T: TokenOwner + ?Sized> TokenOwner for Box<T> {
    fn token_string(&self) -> Option<Cow<'_, str>> {
        (**self).token_string()
    }

    fn set_token_string(&mut self, value: String) {
        (**self).set_token_string(value);
    }
}

// Shared handles hand out owned copies since the borrow ends with the call.
impl<T: TokenOwner + ?Sized> TokenOwner for Rc<RefCell<T>> {
    fn token_string(&self) -> Option<Cow<'_, str>> {
        self.borrow()
            .token_string()
            .map(|value| Cow::Owned(value.into_owned()))
    }

    fn set_token_string(&mut self, value: String) {
        self.borrow_mut().set_token_string(value);
    }
}

impl<T: TokenOwner + ?Sized> TokenOwner for Weak<RefCell<T>> {
    fn token_string(&self) -> Option<Cow<'_, str>> {
        let host = self.upgrade()?;
        let value = host.borrow().token_string().map(Cow::into_owned);
        value.map(Cow::Owned)
    }

    fn set_token_string(&mut self, value: String) {
        if let Some(host) = self.upgrade() {
            host.borrow_mut().set_token_string(value);
        }
    }
}

impl<T: TokenOwner + ?Sized> TokenOwner for Arc<Mutex<T>> {
    fn token_string(&self) -> Option<Cow<'_, str>> {
        let guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let value = guard.token_string().map(Cow::into_owned);
        value.map(Cow::Owned)
    }

    fn set_token_string(&mut self, value: String) {
        let mut guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.set_token_string(value);
    }
}
