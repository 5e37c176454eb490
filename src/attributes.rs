//! An ordered attribute map that can host token lists.
//!
//! [`Attributes`] wraps an [`IndexMap`] of attribute names to string values, the
//! way an element keeps its attributes. [`Attributes::token_list`] binds one
//! named attribute to a fresh [`TokenList`] through an [`AttributeSlot`].
//!
//! ## Examples
//!
//! ```rust
//! use token_list::Attributes;
//!
//! let mut attrs = Attributes::new();
//! attrs.set("class", "card");
//!
//! attrs.token_list("class").add(["active"]).unwrap();
//! attrs.token_list("rel").add(["noopener", "noreferrer"]).unwrap();
//!
//! assert_eq!(attrs.get("class"), Some("card active"));
//! assert_eq!(attrs.get("rel"), Some("noopener noreferrer"));
//! ```

use indexmap::IndexMap;
use std::borrow::Cow;

use crate::{TokenList, TokenOwner};

/// Insertion-ordered attribute names and their string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    /// Creates an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Attributes(IndexMap::new())
    }

    /// Sets `name` to `value`, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the value of `name`, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use token_list::Attributes;
    ///
    /// let mut attrs = Attributes::new();
    /// assert_eq!(attrs.get("id"), None);
    /// attrs.set("id", "main");
    /// assert_eq!(attrs.get("id"), Some("main"));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Removes `name`, keeping the order of the remaining attributes.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over name/value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Borrows the attribute `name` as a token owner.
    pub fn slot<'a>(&'a mut self, name: &'a str) -> AttributeSlot<'a> {
        AttributeSlot { attrs: self, name }
    }

    /// Builds a token list over the attribute `name`.
    ///
    /// An absent attribute reads as empty and is created by the first write.
    pub fn token_list<'a>(&'a mut self, name: &'a str) -> TokenList<AttributeSlot<'a>> {
        TokenList::new(self.slot(name))
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Attributes(IndexMap::from_iter(iter))
    }
}

impl IntoIterator for Attributes {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One named attribute of an [`Attributes`] map, usable as a [`TokenOwner`].
#[derive(Debug)]
pub struct AttributeSlot<'a> {
    attrs: &'a mut Attributes,
    name: &'a str,
}

impl AttributeSlot<'_> {
    /// The attribute name this slot is bound to.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }
}

impl TokenOwner for AttributeSlot<'_> {
    fn token_string(&self) -> Option<Cow<'_, str>> {
        self.attrs.get(self.name).map(Cow::Borrowed)
    }

    fn set_token_string(&mut self, value: String) {
        match self.attrs.0.get_mut(self.name) {
            Some(existing) => *existing = value,
            None => {
                self.attrs.0.insert(self.name.to_string(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut attrs = Attributes::new();
        assert!(attrs.is_empty());
        assert!(attrs.set("id", "a").is_none());
        assert_eq!(attrs.set("id", "b").as_deref(), Some("a"));
        attrs.set("class", "x");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.remove("id").as_deref(), Some("b"));
        let names: Vec<_> = attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["class"]);
    }

    #[test]
    fn test_slot_creates_missing_attribute() {
        let mut attrs = Attributes::new();
        let mut slot = attrs.slot("class");
        assert_eq!(slot.name(), "class");
        assert!(slot.token_string().is_none());
        slot.set_token_string("on".to_string());
        assert_eq!(attrs.get("class"), Some("on"));
    }

    #[test]
    fn test_token_list_keeps_attribute_order() {
        let mut attrs: Attributes = [
            ("id".to_string(), "main".to_string()),
            ("class".to_string(), "a".to_string()),
        ]
        .into_iter()
        .collect();

        attrs.token_list("class").toggle("b").unwrap();
        let pairs: Vec<_> = attrs.into_iter().collect();
        assert_eq!(
            pairs,
            [
                ("id".to_string(), "main".to_string()),
                ("class".to_string(), "a b".to_string()),
            ]
        );
    }
}
