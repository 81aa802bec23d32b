// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-level reconciliation of structural (non-text) properties.
//!
//! Structural properties are copied once per element, coarse-grained and
//! idempotent; text appearance is deliberately excluded here because it must
//! be corrected per character run (inline text can straddle elements with
//! different effective styles) and is owned by the fixup-segment mechanism.

use markup_tree::css::{CssProperty, CssValue, Length};
use markup_tree::{Document, ElementId};

/// How one property's copy decision deviates from the plain compare-and-set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CopyRule {
    /// Compare cascaded values; copy on difference.
    Plain,
    /// Skip the difference-copy when the source value is `auto` (margins and
    /// `vertical-align` report `auto` in contexts where inlining it would
    /// change layout).
    SkipIfAuto,
    /// Only copy when the named side's border style is not `none` — there is
    /// no point inlining the color or width of a border that does not draw.
    IfBorderDrawn(CssProperty),
    /// Only copy when the outline style is not `none`.
    IfOutlineDrawn,
    /// `line-height` is the one property whose percentage resolves against
    /// the element's own font size, so percentages convert to pixels along
    /// with the font-relative units.
    LineHeight,
}

struct PropertySpec {
    property: CssProperty,
    rule: CopyRule,
}

const fn spec(property: CssProperty, rule: CopyRule) -> PropertySpec {
    PropertySpec { property, rule }
}

/// The explicit list of structural properties the reconciler copies, in
/// copy order.
///
/// `color`, the `font-*` family, `text-decoration` and (on inline elements)
/// `background-color` are intentionally absent: they belong to the text
/// mechanism, and inline background is achieved through highlighting.
const STRUCTURAL_PROPERTIES: &[PropertySpec] = &[
    spec(CssProperty::BackgroundAttachment, CopyRule::Plain),
    // background-color is special-cased in `copy_minimum_css` (block-level
    // elements only).
    spec(CssProperty::BackgroundImage, CopyRule::Plain),
    spec(CssProperty::BackgroundPositionX, CopyRule::Plain),
    spec(CssProperty::BackgroundPositionY, CopyRule::Plain),
    spec(CssProperty::BackgroundRepeat, CopyRule::Plain),
    spec(CssProperty::BorderCollapse, CopyRule::Plain),
    spec(CssProperty::BorderSpacing, CopyRule::Plain),
    spec(
        CssProperty::BorderBottomColor,
        CopyRule::IfBorderDrawn(CssProperty::BorderBottomStyle),
    ),
    spec(CssProperty::BorderBottomStyle, CopyRule::Plain),
    spec(
        CssProperty::BorderBottomWidth,
        CopyRule::IfBorderDrawn(CssProperty::BorderBottomStyle),
    ),
    spec(
        CssProperty::BorderLeftColor,
        CopyRule::IfBorderDrawn(CssProperty::BorderLeftStyle),
    ),
    spec(CssProperty::BorderLeftStyle, CopyRule::Plain),
    spec(
        CssProperty::BorderLeftWidth,
        CopyRule::IfBorderDrawn(CssProperty::BorderLeftStyle),
    ),
    spec(
        CssProperty::BorderRightColor,
        CopyRule::IfBorderDrawn(CssProperty::BorderRightStyle),
    ),
    spec(CssProperty::BorderRightStyle, CopyRule::Plain),
    spec(
        CssProperty::BorderRightWidth,
        CopyRule::IfBorderDrawn(CssProperty::BorderRightStyle),
    ),
    spec(
        CssProperty::BorderTopColor,
        CopyRule::IfBorderDrawn(CssProperty::BorderTopStyle),
    ),
    spec(CssProperty::BorderTopStyle, CopyRule::Plain),
    spec(
        CssProperty::BorderTopWidth,
        CopyRule::IfBorderDrawn(CssProperty::BorderTopStyle),
    ),
    spec(CssProperty::Bottom, CopyRule::Plain),
    spec(CssProperty::CaptionSide, CopyRule::Plain),
    spec(CssProperty::Clear, CopyRule::Plain),
    spec(CssProperty::Clip, CopyRule::Plain),
    spec(CssProperty::Cursor, CopyRule::Plain),
    spec(CssProperty::Direction, CopyRule::Plain),
    spec(CssProperty::Display, CopyRule::Plain),
    spec(CssProperty::EmptyCells, CopyRule::Plain),
    spec(CssProperty::Float, CopyRule::Plain),
    spec(CssProperty::Height, CopyRule::Plain),
    spec(CssProperty::Left, CopyRule::Plain),
    spec(CssProperty::LetterSpacing, CopyRule::Plain),
    spec(CssProperty::LineHeight, CopyRule::LineHeight),
    spec(CssProperty::ListStyleImage, CopyRule::Plain),
    spec(CssProperty::ListStylePosition, CopyRule::Plain),
    spec(CssProperty::ListStyleType, CopyRule::Plain),
    spec(CssProperty::MarginBottom, CopyRule::SkipIfAuto),
    spec(CssProperty::MarginLeft, CopyRule::SkipIfAuto),
    spec(CssProperty::MarginRight, CopyRule::SkipIfAuto),
    spec(CssProperty::MarginTop, CopyRule::SkipIfAuto),
    spec(CssProperty::MaxHeight, CopyRule::Plain),
    spec(CssProperty::MaxWidth, CopyRule::Plain),
    spec(CssProperty::MinHeight, CopyRule::Plain),
    spec(CssProperty::MinWidth, CopyRule::Plain),
    spec(CssProperty::Orphans, CopyRule::Plain),
    spec(CssProperty::OutlineStyle, CopyRule::Plain),
    spec(CssProperty::OutlineColor, CopyRule::IfOutlineDrawn),
    spec(CssProperty::OutlineWidth, CopyRule::IfOutlineDrawn),
    spec(CssProperty::Overflow, CopyRule::Plain),
    spec(CssProperty::PaddingBottom, CopyRule::Plain),
    spec(CssProperty::PaddingLeft, CopyRule::Plain),
    spec(CssProperty::PaddingRight, CopyRule::Plain),
    spec(CssProperty::PaddingTop, CopyRule::Plain),
    spec(CssProperty::PageBreakAfter, CopyRule::Plain),
    spec(CssProperty::PageBreakBefore, CopyRule::Plain),
    spec(CssProperty::PageBreakInside, CopyRule::Plain),
    spec(CssProperty::Position, CopyRule::Plain),
    spec(CssProperty::Quotes, CopyRule::Plain),
    spec(CssProperty::Right, CopyRule::Plain),
    spec(CssProperty::TableLayout, CopyRule::Plain),
    spec(CssProperty::TextAlign, CopyRule::Plain),
    spec(CssProperty::TextIndent, CopyRule::Plain),
    spec(CssProperty::TextTransform, CopyRule::Plain),
    spec(CssProperty::Top, CopyRule::Plain),
    spec(CssProperty::UnicodeBidi, CopyRule::Plain),
    spec(CssProperty::VerticalAlign, CopyRule::SkipIfAuto),
    spec(CssProperty::Visibility, CopyRule::Plain),
    spec(CssProperty::WhiteSpace, CopyRule::Plain),
    spec(CssProperty::Widows, CopyRule::Plain),
    spec(CssProperty::Width, CopyRule::Plain),
    spec(CssProperty::ZIndex, CopyRule::Plain),
    spec(CssProperty::RubyAlign, CopyRule::Plain),
    spec(CssProperty::RubyOverhang, CopyRule::Plain),
    spec(CssProperty::RubyPosition, CopyRule::Plain),
    spec(CssProperty::TextAlignLast, CopyRule::Plain),
    spec(CssProperty::TextJustify, CopyRule::Plain),
    spec(CssProperty::TextOverflow, CopyRule::Plain),
    spec(CssProperty::WordBreak, CopyRule::Plain),
    spec(CssProperty::WordSpacing, CopyRule::Plain),
    spec(CssProperty::WordWrap, CopyRule::Plain),
    spec(CssProperty::WritingMode, CopyRule::Plain),
];

/// The inline text properties stripped after the structural copy, so the
/// fixup-segment mechanism is the sole source of truth for text appearance.
const TEXT_INLINE_PROPERTIES: &[CssProperty] = &[
    CssProperty::FontFamily,
    CssProperty::FontSize,
    CssProperty::FontStyle,
    CssProperty::FontVariant,
    CssProperty::FontWeight,
    CssProperty::Color,
    CssProperty::TextDecoration,
];

/// Copies the minimum set of structural properties needed to make the
/// destination element render like the source element.
///
/// Cascaded values are compared; a differing value is inlined on the
/// destination. A source value in font-relative units is first resolved to
/// pixels against the *source's* rendering context, because the inline
/// `font-size` that anchored it is about to be stripped; a destination
/// inline value left in font-relative units is rewritten for the same
/// reason even when the cascaded values agree.
pub(crate) fn copy_minimum_css(doc: &mut Document, source: ElementId, destination: ElementId) {
    // Background color only inlines on block elements; inline elements get
    // their background through highlighting semantics instead.
    if !doc.is_inline_element(source) {
        let src = doc.cascaded_css(source, CssProperty::BackgroundColor);
        let dst = doc.cascaded_css(destination, CssProperty::BackgroundColor);
        if src != dst {
            doc.element_mut(destination)
                .style_mut()
                .set(CssProperty::BackgroundColor, src);
        }
    }

    for spec in STRUCTURAL_PROPERTIES {
        let src = doc.cascaded_css(source, spec.property);
        let dst = doc.cascaded_css(destination, spec.property);
        let dst_inline_font_relative = doc
            .element(destination)
            .style()
            .get(spec.property)
            .is_some_and(CssValue::is_font_relative);

        let src_needs_resolving = src.is_font_relative()
            || (spec.rule == CopyRule::LineHeight && is_percentage(&src));
        if src_needs_resolving {
            let resolved = resolve_on_source(doc, source, spec.property, &src);
            doc.element_mut(destination)
                .style_mut()
                .set(spec.property, resolved);
            continue;
        }

        let gated_out = match spec.rule {
            CopyRule::Plain | CopyRule::LineHeight => false,
            CopyRule::SkipIfAuto => src.is_keyword("auto"),
            CopyRule::IfBorderDrawn(style_property) => doc
                .cascaded_css(source, style_property)
                .is_keyword("none"),
            CopyRule::IfOutlineDrawn => doc
                .cascaded_css(source, CssProperty::OutlineStyle)
                .is_keyword("none"),
        };
        if (src != dst && !gated_out) || dst_inline_font_relative {
            doc.element_mut(destination)
                .style_mut()
                .set(spec.property, src);
        }
    }
}

/// Resolves a font-relative (or, for `line-height`, percentage) cascaded
/// value to whole pixels against the source element.
fn resolve_on_source(
    doc: &Document,
    source: ElementId,
    property: CssProperty,
    value: &CssValue,
) -> CssValue {
    let percent_basis = if property == CssProperty::LineHeight {
        doc.computed_font_size(source)
    } else {
        0.0
    };
    let resolve = |length: Length| {
        let px = doc.resolve_length_px(source, length, percent_basis);
        Length::px(px.trunc())
    };
    match value {
        CssValue::Length(l) => CssValue::Length(resolve(*l)),
        CssValue::Rect(edges) => CssValue::Rect([
            resolve(edges[0]),
            resolve(edges[1]),
            resolve(edges[2]),
            resolve(edges[3]),
        ]),
        other => other.clone(),
    }
}

fn is_percentage(value: &CssValue) -> bool {
    matches!(
        value,
        CssValue::Length(Length {
            unit: markup_tree::css::LengthUnit::Percent,
            ..
        })
    )
}

/// Strips the inline text-related properties from a destination element.
///
/// The fixup-segment mechanism re-establishes text appearance per run;
/// leaving these inline would double-apply them. Background color stays on
/// block elements (users edit block backgrounds directly) and is stripped
/// only on inline elements, whose background is owned by highlighting.
pub(crate) fn remove_text_related_inline_css(doc: &mut Document, element: ElementId) {
    let inline = doc.is_inline_element(element);
    let style = doc.element_mut(element).style_mut();
    for property in TEXT_INLINE_PROPERTIES {
        style.remove(*property);
    }
    if inline {
        style.remove(CssProperty::BackgroundColor);
    }
}

/// Promotes `text-align`, `width` and `height` from CSS to the legacy
/// attributes on destination element types that support them, for
/// compatibility with the native formatting commands.
///
/// Pixel conversion is computed off the *source* element so font-relative
/// units resolve in the context they were authored in. A percentage on an
/// element whose attribute only takes pixels is left as CSS — without
/// layout there is no basis to resolve it against.
pub(crate) fn move_css_properties_to_attributes(
    doc: &mut Document,
    source: ElementId,
    destination: ElementId,
) {
    let tag = doc.element(destination).tag().clone();

    if let Some(CssValue::Keyword(alignment)) =
        doc.element(destination).style().get(CssProperty::TextAlign).cloned()
    {
        if tag.supports_align_attribute() {
            // CSS text-align and the align attribute map one-to-one.
            doc.element_mut(destination).set_attribute("align", &alignment);
            doc.element_mut(destination)
                .style_mut()
                .remove(CssProperty::TextAlign);
        }
    }

    promote_dimension(
        doc,
        source,
        destination,
        CssProperty::Width,
        "width",
        tag.supports_percentage_width_attribute(),
        tag.supports_pixel_width_attribute(),
    );
    promote_dimension(
        doc,
        source,
        destination,
        CssProperty::Height,
        "height",
        tag.supports_percentage_height_attribute(),
        tag.supports_pixel_height_attribute(),
    );
}

fn promote_dimension(
    doc: &mut Document,
    source: ElementId,
    destination: ElementId,
    property: CssProperty,
    attribute: &str,
    takes_percentage: bool,
    takes_pixels: bool,
) {
    let Some(value) = doc.element(destination).style().get(property).cloned() else {
        return;
    };
    if value.is_keyword("auto") {
        return;
    }
    let CssValue::Length(length) = value else {
        return;
    };

    if is_percentage(&CssValue::Length(length)) {
        if takes_percentage {
            doc.element_mut(destination)
                .set_attribute(attribute, &format!("{}%", length.value));
            doc.element_mut(destination).style_mut().remove(property);
        }
    } else if takes_pixels {
        let px = doc.resolve_length_px(source, length, 0.0).trunc();
        doc.element_mut(destination)
            .set_attribute(attribute, &format!("{px}"));
        doc.element_mut(destination).style_mut().remove(property);
    }
}
