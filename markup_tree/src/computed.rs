// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascaded and computed style queries.
//!
//! Two query surfaces, mirroring the split between an element's *cascaded*
//! style (the value in effect from inline styles, presentational attributes,
//! the built-in default sheet and inheritance — units preserved as authored)
//! and the *computed* text style at a position (the fully resolved values of
//! the visual text attributes, for the style-vector sampling the transfer
//! engine performs on every text run).
//!
//! One deliberate compatibility quirk: `text-decoration: none` on an element
//! suppresses decorations established by enclosing elements, the way the
//! original editing host renders it, rather than the CSS propagation model
//! where an outer underline cannot be un-painted from inside.

use crate::css::{CssProperty, CssValue, Length, Rgba};
use crate::document::Document;
use crate::element::{Element, ElementId};
use crate::pointer::PointerId;
use crate::tag::Tag;

/// The default color of hyperlink text.
pub const LINK_COLOR: Rgba = Rgba::rgb(0, 0, 238);

/// The resolved visual text attributes in effect at a position.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedTextStyle {
    /// Resolved `font-family`, lowercased.
    pub font_family: Box<str>,
    /// Resolved `font-size` in CSS pixels.
    pub font_size_px: f32,
    /// Weight at or above bold.
    pub bold: bool,
    /// Italic or oblique style.
    pub italic: bool,
    /// Underline decoration.
    pub underline: bool,
    /// Line-through decoration.
    pub strikethrough: bool,
    /// Overline decoration.
    pub overline: bool,
    /// Subscript baseline shift.
    pub subscript: bool,
    /// Superscript baseline shift.
    pub superscript: bool,
    /// Small-caps variant.
    pub small_caps: bool,
    /// Text color.
    pub color: Rgba,
    /// The nearest enclosing painted background, if any.
    pub background: Option<Rgba>,
}

impl Default for ComputedTextStyle {
    fn default() -> Self {
        Self {
            font_family: "times new roman".into(),
            font_size_px: 16.0,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            overline: false,
            subscript: false,
            superscript: false,
            small_caps: false,
            color: Rgba::BLACK,
            background: None,
        }
    }
}

/// Legacy `<font size="1..7">` sizes in CSS pixels.
const LEGACY_FONT_SIZES_PX: [f32; 7] = [10.0, 13.0, 16.0, 18.0, 24.0, 32.0, 48.0];

impl Document {
    /// Computes the visual text attributes in effect at a pointer.
    pub fn computed_text_style_at(&self, p: PointerId) -> ComputedTextStyle {
        let mut style = self.default_style.clone();
        let root_px = self.default_style.font_size_px;
        for element in self.enclosing_elements(p) {
            apply_element(self.element(element), root_px, &mut style);
        }
        style
    }

    /// Returns the cascaded value of `property` on an element: inline style,
    /// then presentational attributes, then the default sheet, then (for
    /// inherited properties) the parent's cascade, then the CSS initial.
    ///
    /// Units are preserved as authored — a cascaded `em` value stays in
    /// `em`s, which is what lets the transfer engine detect values that must
    /// be re-anchored before font-size overrides are stripped.
    pub fn cascaded_css(&self, element: ElementId, property: CssProperty) -> CssValue {
        if let Some(value) = self.element(element).style().get(property) {
            return value.clone();
        }
        if let Some(value) = presentational_css(self.element(element), property) {
            return value;
        }
        if let Some(value) = ua_css(self.element(element).tag(), property) {
            return value;
        }
        if property.is_inherited() {
            if let Some(parent) = self.parent_element(element) {
                return self.cascaded_css(parent, property);
            }
        }
        property.initial()
    }

    /// Computes an element's font size in CSS pixels.
    pub fn computed_font_size(&self, element: ElementId) -> f32 {
        let root_px = self.default_style.font_size_px;
        let parent_px = self
            .parent_element(element)
            .map_or(root_px, |p| self.computed_font_size(p));
        match font_size_source(self.element(element)) {
            Some(CssValue::Length(l)) => l.resolve_px(parent_px, root_px, parent_px),
            Some(CssValue::Number(n)) => n,
            _ => parent_px,
        }
    }

    /// Resolves a length against an element's rendering context: its
    /// computed font size, the root font size and a caller-chosen
    /// percentage basis.
    pub fn resolve_length_px(
        &self,
        element: ElementId,
        length: Length,
        percent_basis_px: f32,
    ) -> f32 {
        let font_px = self.computed_font_size(element);
        length.resolve_px(font_px, self.default_style.font_size_px, percent_basis_px)
    }

    /// Returns `true` if the element flows inline.
    ///
    /// Foreign markup ([`Tag::Custom`]) is classified by its computed
    /// `display` — a compatibility shim carried over from the original
    /// host's handling of word-processor namespaced elements, not a derived
    /// rule.
    pub fn is_inline_element(&self, element: ElementId) -> bool {
        match self.element(element).tag() {
            Tag::Custom(_) => self
                .cascaded_css(element, CssProperty::Display)
                .is_keyword("inline"),
            tag => tag.is_inline(),
        }
    }
}

/// Applies one element's contribution to the computed text style.
///
/// Per element, the inline declaration wins over the presentational
/// attribute, which wins over the default sheet.
fn apply_element(element: &Element, root_px: f32, style: &mut ComputedTextStyle) {
    let layered = |property: CssProperty| -> Option<CssValue> {
        element
            .style()
            .get(property)
            .cloned()
            .or_else(|| presentational_css(element, property))
            .or_else(|| ua_css(element.tag(), property))
    };

    // Font size first: the other properties never depend on it, but its own
    // relative units resolve against the inherited size.
    match layered(CssProperty::FontSize) {
        Some(CssValue::Length(l)) => {
            style.font_size_px = l.resolve_px(style.font_size_px, root_px, style.font_size_px);
        }
        Some(CssValue::Number(n)) => style.font_size_px = n,
        _ => {}
    }
    if let Some(CssValue::Keyword(family)) = layered(CssProperty::FontFamily) {
        style.font_family = family;
    }
    if let Some(value) = layered(CssProperty::FontWeight) {
        match value {
            CssValue::Keyword(k) => match &*k {
                "bold" | "bolder" => style.bold = true,
                "normal" | "lighter" => style.bold = false,
                _ => {}
            },
            CssValue::Number(n) => style.bold = n >= 600.0,
            _ => {}
        }
    }
    if let Some(CssValue::Keyword(k)) = layered(CssProperty::FontStyle) {
        match &*k {
            "italic" | "oblique" => style.italic = true,
            "normal" => style.italic = false,
            _ => {}
        }
    }
    if let Some(CssValue::Keyword(k)) = layered(CssProperty::FontVariant) {
        match &*k {
            "small-caps" => style.small_caps = true,
            "normal" => style.small_caps = false,
            _ => {}
        }
    }
    if let Some(CssValue::Keyword(k)) = layered(CssProperty::TextDecoration) {
        for word in k.split_ascii_whitespace() {
            match word {
                "none" => {
                    style.underline = false;
                    style.strikethrough = false;
                    style.overline = false;
                }
                "underline" => style.underline = true,
                "line-through" => style.strikethrough = true,
                "overline" => style.overline = true,
                _ => {}
            }
        }
    }
    if let Some(CssValue::Keyword(k)) = layered(CssProperty::VerticalAlign) {
        match &*k {
            "sub" => style.subscript = true,
            "super" => style.superscript = true,
            "baseline" => {
                style.subscript = false;
                style.superscript = false;
            }
            _ => {}
        }
    }
    if let Some(CssValue::Color(c)) = layered(CssProperty::Color) {
        style.color = c;
    }
    // An explicit transparent clears an enclosing highlight; absence leaves
    // it painting through.
    match layered(CssProperty::BackgroundColor) {
        Some(CssValue::Color(c)) => style.background = (!c.is_transparent()).then_some(c),
        Some(CssValue::Keyword(k)) if &*k == "transparent" => style.background = None,
        _ => {}
    }
}

fn font_size_source(element: &Element) -> Option<CssValue> {
    element
        .style()
        .get(CssProperty::FontSize)
        .cloned()
        .or_else(|| presentational_css(element, CssProperty::FontSize))
        .or_else(|| ua_css(element.tag(), CssProperty::FontSize))
}

/// Style contributions of legacy presentational attributes.
fn presentational_css(element: &Element, property: CssProperty) -> Option<CssValue> {
    match property {
        CssProperty::TextAlign => element.attribute("align").map(CssValue::keyword),
        CssProperty::Width => element.attribute("width").and_then(parse_dimension),
        CssProperty::Height => element.attribute("height").and_then(parse_dimension),
        CssProperty::FontFamily if *element.tag() == Tag::Font => {
            element.attribute("face").map(CssValue::keyword)
        }
        CssProperty::Color if *element.tag() == Tag::Font => element
            .attribute("color")
            .and_then(Rgba::from_hex)
            .map(CssValue::Color),
        CssProperty::FontSize if *element.tag() == Tag::Font => {
            let size: usize = element.attribute("size")?.parse().ok()?;
            let px = *LEGACY_FONT_SIZES_PX.get(size.checked_sub(1)?)?;
            Some(CssValue::Length(Length::px(px)))
        }
        _ => None,
    }
}

/// Parses a legacy dimension attribute: digits for pixels, a trailing `%`
/// for a percentage.
fn parse_dimension(value: &str) -> Option<CssValue> {
    if let Some(percent) = value.strip_suffix('%') {
        let n: f32 = percent.trim().parse().ok()?;
        Some(CssValue::Length(Length::percent(n)))
    } else {
        let n: f32 = value.trim().parse().ok()?;
        Some(CssValue::Length(Length::px(n)))
    }
}

/// The built-in default sheet: per-tag property defaults applied beneath
/// presentational attributes and inline styles.
fn ua_css(tag: &Tag, property: CssProperty) -> Option<CssValue> {
    use CssProperty as P;
    let value = match (tag, property) {
        (t, P::Display) if t.is_block() => CssValue::keyword("block"),
        (Tag::Table, P::Display) => CssValue::keyword("table"),
        (Tag::Tr, P::Display) => CssValue::keyword("table-row"),
        (Tag::Td | Tag::Th, P::Display) => CssValue::keyword("table-cell"),
        (Tag::Thead | Tag::Tbody | Tag::Tfoot, P::Display) => CssValue::keyword("table-row-group"),
        (Tag::Colgroup, P::Display) => CssValue::keyword("table-column-group"),
        (Tag::Col, P::Display) => CssValue::keyword("table-column"),
        (Tag::Comment, P::Display) => CssValue::keyword("none"),

        // Default-sheet lengths are pre-resolved to pixels, the way a
        // cascaded-style query reports them; only *authored* font-relative
        // units survive cascading with their unit intact.
        (Tag::P | Tag::Blockquote | Tag::Ul | Tag::Ol, P::MarginTop | P::MarginBottom) => {
            CssValue::Length(Length::px(16.0))
        }
        (Tag::Blockquote, P::MarginLeft | P::MarginRight) => CssValue::Length(Length::px(40.0)),
        (Tag::Ul | Tag::Ol, P::PaddingLeft) => CssValue::Length(Length::px(40.0)),
        (Tag::Ol, P::ListStyleType) => CssValue::keyword("decimal"),

        (Tag::H1, P::MarginTop | P::MarginBottom) => CssValue::Length(Length::px(21.44)),
        (Tag::H2, P::MarginTop | P::MarginBottom) => CssValue::Length(Length::px(19.92)),
        (Tag::H3, P::MarginTop | P::MarginBottom) => CssValue::Length(Length::px(18.72)),
        (Tag::H4, P::MarginTop | P::MarginBottom) => CssValue::Length(Length::px(21.28)),
        (Tag::H5, P::MarginTop | P::MarginBottom) => CssValue::Length(Length::px(22.18)),
        (Tag::H6, P::MarginTop | P::MarginBottom) => CssValue::Length(Length::px(24.98)),

        (Tag::H1, P::FontSize) => CssValue::Length(Length::em(2.0)),
        (Tag::H2, P::FontSize) => CssValue::Length(Length::em(1.5)),
        (Tag::H3, P::FontSize) => CssValue::Length(Length::em(1.17)),
        (Tag::H5, P::FontSize) => CssValue::Length(Length::em(0.83)),
        (Tag::H6, P::FontSize) => CssValue::Length(Length::em(0.67)),
        (Tag::Sub | Tag::Sup | Tag::Small, P::FontSize) => CssValue::Length(Length::em(0.8333)),
        (Tag::Big, P::FontSize) => CssValue::Length(Length::em(1.2)),

        (
            Tag::B
            | Tag::Strong
            | Tag::Th
            | Tag::H1
            | Tag::H2
            | Tag::H3
            | Tag::H4
            | Tag::H5
            | Tag::H6,
            P::FontWeight,
        ) => CssValue::keyword("bold"),
        (Tag::I | Tag::Em, P::FontStyle) => CssValue::keyword("italic"),
        (Tag::U | Tag::A, P::TextDecoration) => CssValue::keyword("underline"),
        (Tag::S | Tag::Strike, P::TextDecoration) => CssValue::keyword("line-through"),
        (Tag::A, P::Color) => CssValue::Color(LINK_COLOR),
        (Tag::Sub, P::VerticalAlign) => CssValue::keyword("sub"),
        (Tag::Sup, P::VerticalAlign) => CssValue::keyword("super"),
        (Tag::Th, P::TextAlign) => CssValue::keyword("center"),
        (Tag::Td | Tag::Th, P::VerticalAlign) => CssValue::keyword("middle"),
        (Tag::Pre, P::FontFamily) => CssValue::keyword("courier new"),
        (Tag::Pre, P::WhiteSpace) => CssValue::keyword("pre"),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::Adjacency;

    #[test]
    fn tag_defaults_reach_the_computed_style() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let b = doc.append_element(body, Tag::B);
        let i = doc.append_element(b, Tag::I);
        doc.append_text(i, "x");

        let p = doc.create_pointer();
        doc.move_adjacent_to_element(p, i, Adjacency::AfterBegin);
        let style = doc.computed_text_style_at(p);
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.underline);
        assert_eq!(style.color, Rgba::BLACK);
    }

    #[test]
    fn inline_declarations_override_tag_defaults() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let b = doc.append_element(body, Tag::B);
        doc.element_mut(b)
            .style_mut()
            .set(CssProperty::FontWeight, CssValue::keyword("normal"));
        doc.append_text(b, "x");

        let p = doc.create_pointer();
        doc.move_adjacent_to_element(p, b, Adjacency::AfterBegin);
        assert!(!doc.computed_text_style_at(p).bold);
    }

    #[test]
    fn anchors_underline_and_recolor() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let a = doc.append_element(body, Tag::A);
        doc.append_text(a, "link");

        let p = doc.create_pointer();
        doc.move_adjacent_to_element(p, a, Adjacency::AfterBegin);
        let style = doc.computed_text_style_at(p);
        assert!(style.underline);
        assert_eq!(style.color, LINK_COLOR);
    }

    #[test]
    fn decoration_none_suppresses_enclosing_decorations() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let a = doc.append_element(body, Tag::A);
        let span = doc.append_element(a, Tag::Span);
        doc.element_mut(span)
            .style_mut()
            .set(CssProperty::TextDecoration, CssValue::keyword("none"));
        doc.append_text(span, "x");

        let p = doc.create_pointer();
        doc.move_adjacent_to_element(p, span, Adjacency::AfterBegin);
        assert!(!doc.computed_text_style_at(p).underline);
    }

    #[test]
    fn font_sizes_compound_through_nesting() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let h1 = doc.append_element(body, Tag::H1);
        let small = doc.append_element(h1, Tag::Small);
        doc.append_text(small, "x");

        assert_eq!(doc.computed_font_size(h1), 32.0);
        let nested = doc.computed_font_size(small);
        assert!((nested - 32.0 * 0.8333).abs() < 0.01, "got {nested}");
    }

    #[test]
    fn font_element_attributes_are_presentational() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let font = doc.append_element(body, Tag::Font);
        doc.element_mut(font).set_attribute("face", "Georgia");
        doc.element_mut(font).set_attribute("color", "#ff0000");
        doc.element_mut(font).set_attribute("size", "5");
        doc.append_text(font, "x");

        let p = doc.create_pointer();
        doc.move_adjacent_to_element(p, font, Adjacency::AfterBegin);
        let style = doc.computed_text_style_at(p);
        assert_eq!(&*style.font_family, "georgia");
        assert_eq!(style.color, Rgba::rgb(255, 0, 0));
        assert_eq!(style.font_size_px, 24.0);
    }

    #[test]
    fn cascaded_css_preserves_authored_units() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let div = doc.append_element(body, Tag::Div);
        doc.element_mut(div)
            .style_mut()
            .set(CssProperty::MarginTop, Length::em(2.0).into());

        let cascaded = doc.cascaded_css(div, CssProperty::MarginTop);
        assert_eq!(cascaded, CssValue::Length(Length::em(2.0)));
        assert_eq!(doc.resolve_length_px(div, Length::em(2.0), 0.0), 32.0);
    }

    #[test]
    fn inherited_properties_walk_the_parent_chain() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let div = doc.append_element(body, Tag::Div);
        doc.element_mut(div)
            .style_mut()
            .set(CssProperty::TextAlign, CssValue::keyword("center"));
        let span = doc.append_element(div, Tag::Span);

        assert!(doc
            .cascaded_css(span, CssProperty::TextAlign)
            .is_keyword("center"));
        // Margin does not inherit.
        doc.element_mut(div)
            .style_mut()
            .set(CssProperty::MarginTop, Length::px(9.0).into());
        assert_eq!(
            doc.cascaded_css(span, CssProperty::MarginTop),
            CssProperty::MarginTop.initial()
        );
    }

    #[test]
    fn custom_elements_classify_by_display() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let custom = doc.append_element(body, Tag::Custom("o:p".into()));
        assert!(doc.is_inline_element(custom));
        doc.element_mut(custom)
            .style_mut()
            .set(CssProperty::Display, CssValue::keyword("block"));
        assert!(!doc.is_inline_element(custom));
    }
}
