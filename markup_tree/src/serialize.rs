// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup serialization for diagnostics and assertions.
//!
//! This is a writer only; parsing markup back in is the host's concern.

use core::fmt::Write as _;

use crate::document::{ContainerId, Document, Unit};
use crate::element::ElementId;
use crate::pointer::MarkupRange;

impl Document {
    /// Serializes the content of a container's body.
    pub fn container_markup(&self, container: ContainerId) -> String {
        let units = &self.container(container).units;
        // Skip the body's own begin and end units.
        self.units_markup(&units[1..units.len() - 1])
    }

    /// Serializes the content between a range's boundaries.
    ///
    /// The range is expected to span whole subtrees; a partial overlap
    /// serializes as the raw unit sequence, unmatched tags included.
    pub fn range_markup(&self, range: MarkupRange) -> String {
        let (container, start) = self.location_of(range.start);
        let end = self.index_of(range.end);
        self.units_markup(&self.container(container).units[start..end])
    }

    fn units_markup(&self, units: &[Unit]) -> String {
        let mut out = String::new();
        let mut skip_end_of: Option<ElementId> = None;
        for unit in units {
            match unit {
                Unit::Begin(e) => {
                    let element = self.element(*e);
                    if element.tag() == &crate::Tag::Comment {
                        let data = element.attribute("data").unwrap_or("");
                        let _ = write!(out, "<!--{data}-->");
                        skip_end_of = Some(*e);
                        continue;
                    }
                    let _ = write!(out, "<{}", element.tag().name());
                    let mut attributes: Vec<_> = element.attributes().collect();
                    attributes.sort_by_key(|(name, _)| *name);
                    for (name, value) in attributes {
                        let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
                    }
                    if !element.style().is_empty() {
                        let _ = write!(out, " style=\"{}\"", element.style());
                    }
                    if element.tag().is_void() {
                        out.push_str(" />");
                        skip_end_of = Some(*e);
                    } else {
                        out.push('>');
                    }
                }
                Unit::End(e) => {
                    if skip_end_of == Some(*e) {
                        skip_end_of = None;
                        continue;
                    }
                    let _ = write!(out, "</{}>", self.element(*e).tag().name());
                }
                Unit::Char(ch) => match ch {
                    '&' => out.push_str("&amp;"),
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    _ => out.push(*ch),
                },
            }
        }
        out
    }
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
