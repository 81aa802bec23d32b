// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The native formatting command set.
//!
//! A fixed set of commands a host exposes against a movable text range, with
//! an enabled query and toggle/value execution. Execution realizes
//! formatting the way the editing host does: wrapping content in the
//! minimal legacy formatting element, or clearing a format by splitting and
//! unwrapping the in-range elements that establish it (falling back to a
//! style-override wrapper when the format is inherited from outside the
//! range).

use core::cmp::Ordering;

use crate::computed::ComputedTextStyle;
use crate::css::{CssProperty, CssValue, Rgba};
use crate::document::Document;
use crate::element::Element;
use crate::pointer::MarkupRange;
use crate::tag::Tag;

/// A native formatting command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Toggle bold.
    Bold,
    /// Toggle italic.
    Italic,
    /// Toggle underline.
    Underline,
    /// Toggle strikethrough.
    Strikethrough,
    /// Set the font family; requires a [`CommandValue::Name`].
    FontName,
    /// Set the text color; requires a [`CommandValue::Color`].
    ForeColor,
    /// Set the highlight color; requires a [`CommandValue::Color`].
    BackColor,
}

/// The value argument of a valued [`Command`].
#[derive(Clone, Debug, PartialEq)]
pub enum CommandValue {
    /// A font family name.
    Name(Box<str>),
    /// A color.
    Color(Rgba),
}

/// A text format a clearing pass can strip from a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TextFacet {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    FontFamily,
    ForeColor,
}

impl TextFacet {
    /// Whether `element` establishes this facet through its tag identity or
    /// presentational attributes.
    fn established_by(self, element: &Element) -> bool {
        match self {
            Self::Bold => matches!(element.tag(), Tag::B | Tag::Strong),
            Self::Italic => matches!(element.tag(), Tag::I | Tag::Em),
            Self::Underline => matches!(element.tag(), Tag::U),
            Self::Strikethrough => matches!(element.tag(), Tag::Strike | Tag::S),
            Self::FontFamily => *element.tag() == Tag::Font && element.has_attribute("face"),
            Self::ForeColor => *element.tag() == Tag::Font && element.has_attribute("color"),
        }
    }

    /// Neutralizes the facet on the element in place where possible (legacy
    /// `font` attributes); returns `false` if the element must be unwrapped
    /// instead.
    fn neutralize_in_place(self, element: &mut Element) -> bool {
        match self {
            Self::FontFamily => element.remove_attribute("face"),
            Self::ForeColor => element.remove_attribute("color"),
            _ => false,
        }
    }

    /// The inline properties that can establish the facet on any element.
    fn properties(self) -> &'static [CssProperty] {
        match self {
            Self::Bold => &[CssProperty::FontWeight],
            Self::Italic => &[CssProperty::FontStyle],
            Self::Underline | Self::Strikethrough => &[CssProperty::TextDecoration],
            Self::FontFamily => &[CssProperty::FontFamily],
            Self::ForeColor => &[CssProperty::Color],
        }
    }

    /// The declaration that overrides an inherited instance of the facet.
    fn override_declaration(self) -> (CssProperty, CssValue) {
        match self {
            Self::Bold => (CssProperty::FontWeight, CssValue::keyword("normal")),
            Self::Italic => (CssProperty::FontStyle, CssValue::keyword("normal")),
            Self::Underline | Self::Strikethrough => {
                (CssProperty::TextDecoration, CssValue::keyword("none"))
            }
            // Family and color overrides are never inherited-only: the
            // valued commands always write an explicit wrapper.
            Self::FontFamily => (CssProperty::FontFamily, CssValue::keyword("inherit")),
            Self::ForeColor => (CssProperty::Color, CssValue::keyword("inherit")),
        }
    }

    fn present_in(self, style: &ComputedTextStyle) -> bool {
        match self {
            Self::Bold => style.bold,
            Self::Italic => style.italic,
            Self::Underline => style.underline,
            Self::Strikethrough => style.strikethrough,
            Self::FontFamily | Self::ForeColor => false,
        }
    }
}

impl Document {
    /// Reports whether a command can currently execute against `range`.
    ///
    /// Underline reports disabled inside a hyperlink: the command cannot
    /// remove the underline a link paints on its own text, so callers that
    /// need link text un-underlined must apply a style override instead.
    pub fn is_command_enabled(&self, range: MarkupRange, command: Command) -> bool {
        if !self.range_is_positioned(range) {
            return false;
        }
        if self.compare_pointers(range.start, range.end) == Ordering::Greater {
            return false;
        }
        match command {
            Command::Underline => self
                .enclosing_element_matching(range.start, |e| *e.tag() == Tag::A)
                .is_none(),
            _ => true,
        }
    }

    /// Executes a formatting command against `range`.
    ///
    /// Toggle commands flip the state sampled at the range start; valued
    /// commands require their value and set it across the range. A disabled
    /// or value-less command is a no-op, not an error.
    pub fn execute_command(
        &mut self,
        range: MarkupRange,
        command: Command,
        value: Option<CommandValue>,
    ) {
        if !self.is_command_enabled(range, command) {
            return;
        }
        let state = self.computed_text_style_at(range.start);
        match command {
            Command::Bold => self.toggle_facet(range, TextFacet::Bold, state.bold, Tag::B),
            Command::Italic => self.toggle_facet(range, TextFacet::Italic, state.italic, Tag::I),
            Command::Underline => {
                self.toggle_facet(range, TextFacet::Underline, state.underline, Tag::U);
            }
            Command::Strikethrough => {
                self.toggle_facet(
                    range,
                    TextFacet::Strikethrough,
                    state.strikethrough,
                    Tag::Strike,
                );
            }
            Command::FontName => {
                let Some(CommandValue::Name(name)) = value else {
                    return;
                };
                self.clear_facet(range, TextFacet::FontFamily);
                let font = self.create_element(Tag::Font);
                self.element_mut(font).set_attribute("face", &name);
                self.wrap_range(range, font);
            }
            Command::ForeColor => {
                let Some(CommandValue::Color(color)) = value else {
                    return;
                };
                self.clear_facet(range, TextFacet::ForeColor);
                let font = self.create_element(Tag::Font);
                self.element_mut(font)
                    .set_attribute("color", &color.to_string());
                self.wrap_range(range, font);
            }
            Command::BackColor => {
                let Some(CommandValue::Color(color)) = value else {
                    return;
                };
                // Highlight semantics: the nearest wrapper wins, so no
                // clearing pass is needed.
                let span = self.create_element(Tag::Span);
                self.element_mut(span)
                    .style_mut()
                    .set(CssProperty::BackgroundColor, CssValue::Color(color));
                self.wrap_range(range, span);
            }
        }
    }

    fn toggle_facet(&mut self, range: MarkupRange, facet: TextFacet, currently_on: bool, tag: Tag) {
        if currently_on {
            self.clear_facet(range, facet);
        } else {
            let element = self.create_element(tag);
            self.wrap_range(range, element);
        }
    }

    /// Strips every in-range source of `facet` and, if the format is still
    /// inherited from outside the range, wraps the range in an override.
    fn clear_facet(&mut self, range: MarkupRange, facet: TextFacet) {
        self.balance_range(range);

        // Split facet elements that enclose the whole range so their
        // in-range portion becomes a wholly contained element (or strip the
        // facet directly when no fragment would be left outside).
        loop {
            let (container, _) = self.location_of(range.start);
            let body = self.body(container);
            let enclosing = self
                .enclosing_elements(range.start)
                .into_iter()
                .rev()
                .filter(|e| *e != body)
                .find(|e| {
                    facet.established_by(self.element(*e))
                        && self.enclosing_elements(range.end).contains(e)
                });
            let Some(element) = enclosing else {
                break;
            };
            let (_, begin, end) = self
                .element_units(element)
                .expect("enclosing element must be attached");
            if self.index_of(range.start) == begin + 1 {
                // The element's content starts at the range: split off only
                // the tail beyond the range, then strip the facet here.
                if self.index_of(range.end) < end {
                    self.split_element_at(element, range.end);
                }
                if !facet.neutralize_in_place(self.element_mut(element)) {
                    self.remove_element(element);
                }
            } else {
                let right = self.split_element_at(element, range.start);
                let (_, _, right_end) = self
                    .element_units(right)
                    .expect("split fragment must be attached");
                if self.index_of(range.end) < right_end {
                    self.split_element_at(right, range.end);
                }
                // The in-range fragment is now wholly contained; the pass
                // below strips it.
            }
        }

        // Unwrap (or neutralize) facet elements inside the range and strip
        // facet declarations from everything else in it.
        for element in self.elements_in_range(range, |_| true) {
            let strips_facet = facet.established_by(self.element(element));
            if strips_facet && !facet.neutralize_in_place(self.element_mut(element)) {
                self.remove_element(element);
            }
            for property in facet.properties() {
                self.element_mut(element).style_mut().remove(*property);
            }
        }

        // The format may still cascade in from outside the range.
        if facet.present_in(&self.computed_text_style_at(range.start)) {
            let (property, value) = facet.override_declaration();
            let span = self.create_element(Tag::Span);
            self.element_mut(span).style_mut().set(property, value);
            self.wrap_range(range, span);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::pointer::Adjacency;

    fn range_over(doc: &mut Document, element: crate::ElementId) -> MarkupRange {
        let range = doc.create_range();
        doc.move_range_to_element(range, element, false);
        range
    }

    #[test]
    fn bold_toggles_on_by_wrapping() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        doc.append_text(body, "plain");
        let range = doc.body_content_range(doc.primary_container());

        doc.execute_command(range, Command::Bold, None);
        assert_eq!(doc.container_markup(doc.primary_container()), "<b>plain</b>");
        assert!(doc.computed_text_style_at(range.start).bold);
    }

    #[test]
    fn bold_toggles_off_by_unwrapping() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let b = doc.append_element(body, Tag::B);
        doc.append_text(b, "loud");
        let range = range_over(&mut doc, b);

        doc.execute_command(range, Command::Bold, None);
        assert_eq!(doc.container_markup(doc.primary_container()), "loud");
    }

    #[test]
    fn clearing_an_inherited_format_wraps_an_override() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let h1 = doc.append_element(body, Tag::H1);
        doc.append_text(h1, "title");
        let range = range_over(&mut doc, h1);

        doc.execute_command(range, Command::Bold, None);
        assert!(!doc.computed_text_style_at(range.start).bold);
        assert_eq!(
            doc.container_markup(doc.primary_container()),
            r#"<h1><span style="font-weight: normal">title</span></h1>"#
        );
    }

    #[test]
    fn partial_bold_clear_splits_the_element() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let b = doc.append_element(body, Tag::B);
        doc.append_text(b, "abcd");
        // Un-bold just "bc".
        let range = doc.create_range();
        doc.move_adjacent_to_element(range.start, b, Adjacency::AfterBegin);
        doc.move_adjacent_to_element(range.end, b, Adjacency::AfterBegin);
        let (c, i) = doc.location_of(range.start);
        doc.set_index(range.start, c, i + 1);
        doc.set_index(range.end, c, i + 3);

        doc.execute_command(range, Command::Bold, None);
        assert_eq!(
            doc.container_markup(doc.primary_container()),
            "<b>a</b>bc<b>d</b>"
        );
    }

    #[test]
    fn forecolor_wraps_a_font_element() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        doc.append_text(body, "x");
        let range = doc.body_content_range(doc.primary_container());

        doc.execute_command(
            range,
            Command::ForeColor,
            Some(CommandValue::Color(Rgba::rgb(255, 0, 0))),
        );
        assert_eq!(
            doc.container_markup(doc.primary_container()),
            r##"<font color="#ff0000">x</font>"##
        );
        assert_eq!(
            doc.computed_text_style_at(range.start).color,
            Rgba::rgb(255, 0, 0)
        );
    }

    #[test]
    fn underline_is_disabled_inside_hyperlinks() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let a = doc.append_element(body, Tag::A);
        doc.append_text(a, "link");
        let range = range_over(&mut doc, a);

        assert!(!doc.is_command_enabled(range, Command::Underline));
        // Execution is a silent no-op.
        let before = doc.container_markup(doc.primary_container());
        doc.execute_command(range, Command::Underline, None);
        assert_eq!(doc.container_markup(doc.primary_container()), before);
    }

    #[test]
    fn valued_command_without_value_is_a_no_op() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        doc.append_text(body, "x");
        let range = doc.body_content_range(doc.primary_container());
        let before = doc.container_markup(doc.primary_container());
        doc.execute_command(range, Command::FontName, None);
        assert_eq!(doc.container_markup(doc.primary_container()), before);
    }
}
