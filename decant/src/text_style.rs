// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style-dimension vocabulary and per-dimension apply operations.

use markup_tree::css::{CssProperty, CssValue, Length, Rgba};
use markup_tree::{Command, CommandValue, Document, MarkupRange, PointerId, Tag};

/// One of the twelve independent visual text attributes.
///
/// This is a closed set: the diff loop matches over it exhaustively, and
/// per-dimension state lives in fixed [`COUNT`](Self::COUNT)-sized arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleDimension {
    /// Weight at or above bold.
    Bold,
    /// Italic or oblique style.
    Italic,
    /// Underline decoration.
    Underline,
    /// Line-through decoration.
    Strikethrough,
    /// Overline decoration.
    Overline,
    /// Subscript baseline shift.
    Subscript,
    /// Superscript baseline shift.
    Superscript,
    /// Small-caps variant.
    SmallCaps,
    /// Font family.
    FontFamily,
    /// Font size.
    FontSize,
    /// Text color.
    Color,
    /// Highlight (background) color.
    Background,
}

impl StyleDimension {
    /// The number of dimensions.
    pub const COUNT: usize = 12;

    /// Every dimension, in diff order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::Overline,
        Self::Subscript,
        Self::Superscript,
        Self::SmallCaps,
        Self::FontFamily,
        Self::FontSize,
        Self::Color,
        Self::Background,
    ];

    /// The dimension's index into per-dimension state arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single dimension's value: the dimension tag plus the value that range
/// of text renders with.
#[derive(Clone, Debug, PartialEq)]
pub enum TextStyle {
    /// Bold on or off.
    Bold(bool),
    /// Italic on or off.
    Italic(bool),
    /// Underline on or off.
    Underline(bool),
    /// Strikethrough on or off.
    Strikethrough(bool),
    /// Overline on or off.
    Overline(bool),
    /// Subscript on or off.
    Subscript(bool),
    /// Superscript on or off.
    Superscript(bool),
    /// Small caps on or off.
    SmallCaps(bool),
    /// The resolved font family name, lowercased.
    FontFamily(Box<str>),
    /// The resolved font size in CSS pixels.
    FontSize(f32),
    /// The text color.
    Color(Rgba),
    /// The painted background, if any.
    Background(Option<Rgba>),
}

impl TextStyle {
    /// Returns which dimension this value belongs to.
    pub fn dimension(&self) -> StyleDimension {
        match self {
            Self::Bold(_) => StyleDimension::Bold,
            Self::Italic(_) => StyleDimension::Italic,
            Self::Underline(_) => StyleDimension::Underline,
            Self::Strikethrough(_) => StyleDimension::Strikethrough,
            Self::Overline(_) => StyleDimension::Overline,
            Self::Subscript(_) => StyleDimension::Subscript,
            Self::Superscript(_) => StyleDimension::Superscript,
            Self::SmallCaps(_) => StyleDimension::SmallCaps,
            Self::FontFamily(_) => StyleDimension::FontFamily,
            Self::FontSize(_) => StyleDimension::FontSize,
            Self::Color(_) => StyleDimension::Color,
            Self::Background(_) => StyleDimension::Background,
        }
    }

    /// Mutates the destination so `range` renders with this value.
    ///
    /// Dimensions covered by the native command set go through it, guarded
    /// by the enabled query — an unavailable command makes this a no-op,
    /// not a failure. The remaining dimensions synthesize a minimal wrapper
    /// element. Underline carries the one special case: the native command
    /// cannot un-underline text inside a hyperlink, so that combination is
    /// realized with an explicit style override instead.
    pub fn apply(&self, doc: &mut Document, range: MarkupRange) {
        let current = doc.computed_text_style_at(range.start);
        match self {
            Self::Bold(value) => {
                if current.bold != *value && doc.is_command_enabled(range, Command::Bold) {
                    doc.execute_command(range, Command::Bold, None);
                }
            }
            Self::Italic(value) => {
                if current.italic != *value && doc.is_command_enabled(range, Command::Italic) {
                    doc.execute_command(range, Command::Italic, None);
                }
            }
            Self::Underline(value) => {
                if current.underline == *value {
                    return;
                }
                let in_hyperlink = doc
                    .enclosing_element_matching(range.start, |e| *e.tag() == Tag::A)
                    .is_some();
                if !*value && in_hyperlink {
                    // The native command cannot remove the underline a link
                    // paints on its own text.
                    wrap_styled_span(
                        doc,
                        range,
                        CssProperty::TextDecoration,
                        CssValue::keyword("none"),
                    );
                } else if doc.is_command_enabled(range, Command::Underline) {
                    doc.execute_command(range, Command::Underline, None);
                }
            }
            Self::Strikethrough(value) => {
                if current.strikethrough != *value
                    && doc.is_command_enabled(range, Command::Strikethrough)
                {
                    doc.execute_command(range, Command::Strikethrough, None);
                }
            }
            Self::Overline(value) => {
                if current.overline != *value {
                    let keyword = if *value { "overline" } else { "none" };
                    wrap_styled_span(
                        doc,
                        range,
                        CssProperty::TextDecoration,
                        CssValue::keyword(keyword),
                    );
                }
            }
            Self::Subscript(value) => {
                if current.subscript != *value {
                    if *value {
                        let sub = doc.create_element(Tag::Sub);
                        doc.wrap_range(range, sub);
                    } else {
                        wrap_styled_span(
                            doc,
                            range,
                            CssProperty::VerticalAlign,
                            CssValue::keyword("baseline"),
                        );
                    }
                }
            }
            Self::Superscript(value) => {
                if current.superscript != *value {
                    if *value {
                        let sup = doc.create_element(Tag::Sup);
                        doc.wrap_range(range, sup);
                    } else {
                        wrap_styled_span(
                            doc,
                            range,
                            CssProperty::VerticalAlign,
                            CssValue::keyword("baseline"),
                        );
                    }
                }
            }
            Self::SmallCaps(value) => {
                if current.small_caps != *value {
                    let keyword = if *value { "small-caps" } else { "normal" };
                    wrap_styled_span(
                        doc,
                        range,
                        CssProperty::FontVariant,
                        CssValue::keyword(keyword),
                    );
                }
            }
            Self::FontFamily(family) => {
                if current.font_family != *family
                    && doc.is_command_enabled(range, Command::FontName)
                {
                    doc.execute_command(
                        range,
                        Command::FontName,
                        Some(CommandValue::Name(family.clone())),
                    );
                }
            }
            Self::FontSize(px) => {
                // Font size is not in the native command set (the legacy
                // command only takes 1–7 sizes), so it always wraps.
                if current.font_size_px != *px {
                    wrap_styled_span(doc, range, CssProperty::FontSize, Length::px(*px).into());
                }
            }
            Self::Color(color) => {
                if current.color != *color && doc.is_command_enabled(range, Command::ForeColor) {
                    doc.execute_command(
                        range,
                        Command::ForeColor,
                        Some(CommandValue::Color(*color)),
                    );
                }
            }
            Self::Background(background) => {
                if current.background == *background {
                    return;
                }
                match background {
                    Some(color) => {
                        if doc.is_command_enabled(range, Command::BackColor) {
                            doc.execute_command(
                                range,
                                Command::BackColor,
                                Some(CommandValue::Color(*color)),
                            );
                        }
                    }
                    // There is no command for clearing a highlight.
                    None => wrap_styled_span(
                        doc,
                        range,
                        CssProperty::BackgroundColor,
                        CssValue::keyword("transparent"),
                    ),
                }
            }
        }
    }
}

fn wrap_styled_span(doc: &mut Document, range: MarkupRange, property: CssProperty, value: CssValue) {
    let span = doc.create_element(Tag::Span);
    doc.element_mut(span).style_mut().set(property, value);
    doc.wrap_range(range, span);
}

/// The values of all twelve dimensions, sampled at one position.
///
/// Two vectors are only ever compared dimension-by-dimension, never
/// holistically.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyleVector {
    values: [TextStyle; StyleDimension::COUNT],
}

impl TextStyleVector {
    /// Samples the style vector at a position.
    pub fn sample(doc: &Document, position: PointerId) -> Self {
        let computed = doc.computed_text_style_at(position);
        Self {
            values: [
                TextStyle::Bold(computed.bold),
                TextStyle::Italic(computed.italic),
                TextStyle::Underline(computed.underline),
                TextStyle::Strikethrough(computed.strikethrough),
                TextStyle::Overline(computed.overline),
                TextStyle::Subscript(computed.subscript),
                TextStyle::Superscript(computed.superscript),
                TextStyle::SmallCaps(computed.small_caps),
                TextStyle::FontFamily(computed.font_family),
                TextStyle::FontSize(computed.font_size_px),
                TextStyle::Color(computed.color),
                TextStyle::Background(computed.background),
            ],
        }
    }

    /// Returns the value for one dimension.
    pub fn get(&self, dimension: StyleDimension) -> &TextStyle {
        &self.values[dimension.index()]
    }

    /// Iterates the values in [`StyleDimension::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &TextStyle> {
        self.values.iter()
    }
}
