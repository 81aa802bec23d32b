// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::css::InlineStyle;
use crate::tag::Tag;

/// A handle to an element in a [`Document`](crate::Document)'s arena.
///
/// Handles stay valid for the life of the document, including after the
/// element's begin/end units have been spliced out of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) u32);

/// An element record: tag identity, attributes and inline style.
///
/// There are no interface casts here — whether an element supports a given
/// attribute or behavior is a capability query on its [`Tag`].
#[derive(Clone, Debug)]
pub struct Element {
    tag: Tag,
    attributes: HashMap<Box<str>, Box<str>>,
    style: InlineStyle,
}

impl Element {
    pub(crate) fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: HashMap::new(),
            style: InlineStyle::new(),
        }
    }

    /// Returns the element's tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub(crate) fn set_tag(&mut self, tag: Tag) {
        self.tag = tag;
    }

    /// Returns the attribute value, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| &**v)
    }

    /// Sets an attribute.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Removes an attribute; returns `true` if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    /// Returns `true` if the attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterates over `(name, value)` attribute pairs in arbitrary order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (&**k, &**v))
    }

    /// Copies every attribute of `other` onto this element.
    pub fn copy_attributes_from(&mut self, other: &Self) {
        for (name, value) in other.attributes() {
            self.set_attribute(name, value);
        }
    }

    /// Returns the element's inline style.
    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Returns the element's inline style for mutation.
    pub fn style_mut(&mut self) -> &mut InlineStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_round_trip() {
        let mut element = Element::new(Tag::Img);
        element.set_attribute("src", "cat.png");
        assert_eq!(element.attribute("src"), Some("cat.png"));
        assert!(element.has_attribute("src"));
        assert!(element.remove_attribute("src"));
        assert!(!element.has_attribute("src"));
    }

    #[test]
    fn copy_attributes_overwrites_and_adds() {
        let mut a = Element::new(Tag::S);
        a.set_attribute("class", "x");
        a.set_attribute("id", "one");
        let mut b = Element::new(Tag::Strike);
        b.set_attribute("id", "two");
        b.copy_attributes_from(&a);
        assert_eq!(b.attribute("id"), Some("one"));
        assert_eq!(b.attribute("class"), Some("x"));
    }
}
