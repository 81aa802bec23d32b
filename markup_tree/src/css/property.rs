// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::value::{CssValue, Length, Rgba};

/// The closed set of CSS properties the editing layer understands.
///
/// This covers the CSS 2.1 properties the transfer engine reconciles plus
/// the small CSS 3 set the original editing hosts implemented, and the text
/// properties the cascade resolves for the style-vector query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CssProperty {
    /// `background-attachment`.
    BackgroundAttachment,
    /// `background-color`.
    BackgroundColor,
    /// `background-image`.
    BackgroundImage,
    /// `background-position-x`.
    BackgroundPositionX,
    /// `background-position-y`.
    BackgroundPositionY,
    /// `background-repeat`.
    BackgroundRepeat,
    /// `border-collapse`.
    BorderCollapse,
    /// `border-spacing`.
    BorderSpacing,
    /// `border-bottom-color`.
    BorderBottomColor,
    /// `border-bottom-style`.
    BorderBottomStyle,
    /// `border-bottom-width`.
    BorderBottomWidth,
    /// `border-left-color`.
    BorderLeftColor,
    /// `border-left-style`.
    BorderLeftStyle,
    /// `border-left-width`.
    BorderLeftWidth,
    /// `border-right-color`.
    BorderRightColor,
    /// `border-right-style`.
    BorderRightStyle,
    /// `border-right-width`.
    BorderRightWidth,
    /// `border-top-color`.
    BorderTopColor,
    /// `border-top-style`.
    BorderTopStyle,
    /// `border-top-width`.
    BorderTopWidth,
    /// `bottom`.
    Bottom,
    /// `caption-side`.
    CaptionSide,
    /// `clear`.
    Clear,
    /// `clip`.
    Clip,
    /// `color`.
    Color,
    /// `cursor`.
    Cursor,
    /// `direction`.
    Direction,
    /// `display`.
    Display,
    /// `empty-cells`.
    EmptyCells,
    /// `float`.
    Float,
    /// `font-family`.
    FontFamily,
    /// `font-size`.
    FontSize,
    /// `font-style`.
    FontStyle,
    /// `font-variant`.
    FontVariant,
    /// `font-weight`.
    FontWeight,
    /// `height`.
    Height,
    /// `left`.
    Left,
    /// `letter-spacing`.
    LetterSpacing,
    /// `line-height`.
    LineHeight,
    /// `list-style-image`.
    ListStyleImage,
    /// `list-style-position`.
    ListStylePosition,
    /// `list-style-type`.
    ListStyleType,
    /// `margin-bottom`.
    MarginBottom,
    /// `margin-left`.
    MarginLeft,
    /// `margin-right`.
    MarginRight,
    /// `margin-top`.
    MarginTop,
    /// `max-height`.
    MaxHeight,
    /// `max-width`.
    MaxWidth,
    /// `min-height`.
    MinHeight,
    /// `min-width`.
    MinWidth,
    /// `orphans`.
    Orphans,
    /// `outline-color`.
    OutlineColor,
    /// `outline-style`.
    OutlineStyle,
    /// `outline-width`.
    OutlineWidth,
    /// `overflow`.
    Overflow,
    /// `padding-bottom`.
    PaddingBottom,
    /// `padding-left`.
    PaddingLeft,
    /// `padding-right`.
    PaddingRight,
    /// `padding-top`.
    PaddingTop,
    /// `page-break-after`.
    PageBreakAfter,
    /// `page-break-before`.
    PageBreakBefore,
    /// `page-break-inside`.
    PageBreakInside,
    /// `position`.
    Position,
    /// `quotes`.
    Quotes,
    /// `right`.
    Right,
    /// `ruby-align`.
    RubyAlign,
    /// `ruby-overhang`.
    RubyOverhang,
    /// `ruby-position`.
    RubyPosition,
    /// `table-layout`.
    TableLayout,
    /// `text-align`.
    TextAlign,
    /// `text-align-last`.
    TextAlignLast,
    /// `text-decoration`.
    TextDecoration,
    /// `text-indent`.
    TextIndent,
    /// `text-justify`.
    TextJustify,
    /// `text-overflow`.
    TextOverflow,
    /// `text-transform`.
    TextTransform,
    /// `top`.
    Top,
    /// `unicode-bidi`.
    UnicodeBidi,
    /// `vertical-align`.
    VerticalAlign,
    /// `visibility`.
    Visibility,
    /// `white-space`.
    WhiteSpace,
    /// `widows`.
    Widows,
    /// `width`.
    Width,
    /// `word-break`.
    WordBreak,
    /// `word-spacing`.
    WordSpacing,
    /// `word-wrap`.
    WordWrap,
    /// `writing-mode`.
    WritingMode,
    /// `z-index`.
    ZIndex,
}

impl CssProperty {
    /// Returns the serialized property name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BackgroundAttachment => "background-attachment",
            Self::BackgroundColor => "background-color",
            Self::BackgroundImage => "background-image",
            Self::BackgroundPositionX => "background-position-x",
            Self::BackgroundPositionY => "background-position-y",
            Self::BackgroundRepeat => "background-repeat",
            Self::BorderCollapse => "border-collapse",
            Self::BorderSpacing => "border-spacing",
            Self::BorderBottomColor => "border-bottom-color",
            Self::BorderBottomStyle => "border-bottom-style",
            Self::BorderBottomWidth => "border-bottom-width",
            Self::BorderLeftColor => "border-left-color",
            Self::BorderLeftStyle => "border-left-style",
            Self::BorderLeftWidth => "border-left-width",
            Self::BorderRightColor => "border-right-color",
            Self::BorderRightStyle => "border-right-style",
            Self::BorderRightWidth => "border-right-width",
            Self::BorderTopColor => "border-top-color",
            Self::BorderTopStyle => "border-top-style",
            Self::BorderTopWidth => "border-top-width",
            Self::Bottom => "bottom",
            Self::CaptionSide => "caption-side",
            Self::Clear => "clear",
            Self::Clip => "clip",
            Self::Color => "color",
            Self::Cursor => "cursor",
            Self::Direction => "direction",
            Self::Display => "display",
            Self::EmptyCells => "empty-cells",
            Self::Float => "float",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontStyle => "font-style",
            Self::FontVariant => "font-variant",
            Self::FontWeight => "font-weight",
            Self::Height => "height",
            Self::Left => "left",
            Self::LetterSpacing => "letter-spacing",
            Self::LineHeight => "line-height",
            Self::ListStyleImage => "list-style-image",
            Self::ListStylePosition => "list-style-position",
            Self::ListStyleType => "list-style-type",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::MarginRight => "margin-right",
            Self::MarginTop => "margin-top",
            Self::MaxHeight => "max-height",
            Self::MaxWidth => "max-width",
            Self::MinHeight => "min-height",
            Self::MinWidth => "min-width",
            Self::Orphans => "orphans",
            Self::OutlineColor => "outline-color",
            Self::OutlineStyle => "outline-style",
            Self::OutlineWidth => "outline-width",
            Self::Overflow => "overflow",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::PaddingRight => "padding-right",
            Self::PaddingTop => "padding-top",
            Self::PageBreakAfter => "page-break-after",
            Self::PageBreakBefore => "page-break-before",
            Self::PageBreakInside => "page-break-inside",
            Self::Position => "position",
            Self::Quotes => "quotes",
            Self::Right => "right",
            Self::RubyAlign => "ruby-align",
            Self::RubyOverhang => "ruby-overhang",
            Self::RubyPosition => "ruby-position",
            Self::TableLayout => "table-layout",
            Self::TextAlign => "text-align",
            Self::TextAlignLast => "text-align-last",
            Self::TextDecoration => "text-decoration",
            Self::TextIndent => "text-indent",
            Self::TextJustify => "text-justify",
            Self::TextOverflow => "text-overflow",
            Self::TextTransform => "text-transform",
            Self::Top => "top",
            Self::UnicodeBidi => "unicode-bidi",
            Self::VerticalAlign => "vertical-align",
            Self::Visibility => "visibility",
            Self::WhiteSpace => "white-space",
            Self::Widows => "widows",
            Self::Width => "width",
            Self::WordBreak => "word-break",
            Self::WordSpacing => "word-spacing",
            Self::WordWrap => "word-wrap",
            Self::WritingMode => "writing-mode",
            Self::ZIndex => "z-index",
        }
    }

    /// Returns `true` if the property inherits through the cascade.
    pub fn is_inherited(self) -> bool {
        matches!(
            self,
            Self::BorderCollapse
                | Self::BorderSpacing
                | Self::CaptionSide
                | Self::Color
                | Self::Cursor
                | Self::Direction
                | Self::EmptyCells
                | Self::FontFamily
                | Self::FontSize
                | Self::FontStyle
                | Self::FontVariant
                | Self::FontWeight
                | Self::LetterSpacing
                | Self::LineHeight
                | Self::ListStyleImage
                | Self::ListStylePosition
                | Self::ListStyleType
                | Self::Orphans
                | Self::Quotes
                | Self::RubyAlign
                | Self::RubyOverhang
                | Self::RubyPosition
                | Self::TextAlign
                | Self::TextAlignLast
                | Self::TextIndent
                | Self::TextJustify
                | Self::TextTransform
                | Self::Visibility
                | Self::WhiteSpace
                | Self::Widows
                | Self::WordBreak
                | Self::WordSpacing
                | Self::WordWrap
                | Self::WritingMode
        )
    }

    /// Returns `true` if font-relative units of this property resolve
    /// against the vertical axis (used when percentage bases differ by
    /// axis in the host's unit conversion).
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            Self::BackgroundPositionY
                | Self::BorderBottomWidth
                | Self::BorderTopWidth
                | Self::Bottom
                | Self::Height
                | Self::LineHeight
                | Self::MarginBottom
                | Self::MarginTop
                | Self::MaxHeight
                | Self::MinHeight
                | Self::PaddingBottom
                | Self::PaddingTop
                | Self::Top
                | Self::VerticalAlign
        )
    }

    /// Returns the CSS initial value for this property.
    pub fn initial(self) -> CssValue {
        match self {
            Self::BackgroundAttachment => CssValue::keyword("scroll"),
            Self::BackgroundColor => CssValue::Color(Rgba::TRANSPARENT),
            Self::BackgroundImage => CssValue::keyword("none"),
            Self::BackgroundPositionX | Self::BackgroundPositionY => {
                CssValue::Length(Length::percent(0.0))
            }
            Self::BackgroundRepeat => CssValue::keyword("repeat"),
            Self::BorderCollapse => CssValue::keyword("separate"),
            Self::BorderSpacing => CssValue::Length(Length::px(0.0)),
            Self::BorderBottomColor
            | Self::BorderLeftColor
            | Self::BorderRightColor
            | Self::BorderTopColor
            | Self::OutlineColor => CssValue::keyword("currentcolor"),
            Self::BorderBottomStyle
            | Self::BorderLeftStyle
            | Self::BorderRightStyle
            | Self::BorderTopStyle
            | Self::OutlineStyle => CssValue::keyword("none"),
            Self::BorderBottomWidth
            | Self::BorderLeftWidth
            | Self::BorderRightWidth
            | Self::BorderTopWidth
            | Self::OutlineWidth => CssValue::keyword("medium"),
            Self::Bottom | Self::Left | Self::Right | Self::Top => CssValue::keyword("auto"),
            Self::CaptionSide => CssValue::keyword("top"),
            Self::Clear => CssValue::keyword("none"),
            Self::Clip => CssValue::keyword("auto"),
            Self::Color => CssValue::Color(Rgba::BLACK),
            Self::Cursor => CssValue::keyword("auto"),
            Self::Direction => CssValue::keyword("ltr"),
            Self::Display => CssValue::keyword("inline"),
            Self::EmptyCells => CssValue::keyword("show"),
            Self::Float => CssValue::keyword("none"),
            Self::FontFamily => CssValue::keyword("times new roman"),
            Self::FontSize => CssValue::Length(Length::px(16.0)),
            Self::FontStyle => CssValue::keyword("normal"),
            Self::FontVariant => CssValue::keyword("normal"),
            Self::FontWeight => CssValue::keyword("normal"),
            Self::Height | Self::Width => CssValue::keyword("auto"),
            Self::LetterSpacing => CssValue::keyword("normal"),
            Self::LineHeight => CssValue::keyword("normal"),
            Self::ListStyleImage => CssValue::keyword("none"),
            Self::ListStylePosition => CssValue::keyword("outside"),
            Self::ListStyleType => CssValue::keyword("disc"),
            Self::MarginBottom | Self::MarginLeft | Self::MarginRight | Self::MarginTop => {
                CssValue::Length(Length::px(0.0))
            }
            Self::MaxHeight | Self::MaxWidth => CssValue::keyword("none"),
            Self::MinHeight | Self::MinWidth => CssValue::Length(Length::px(0.0)),
            Self::Orphans | Self::Widows => CssValue::Number(2.0),
            Self::Overflow => CssValue::keyword("visible"),
            Self::PaddingBottom | Self::PaddingLeft | Self::PaddingRight | Self::PaddingTop => {
                CssValue::Length(Length::px(0.0))
            }
            Self::PageBreakAfter | Self::PageBreakBefore | Self::PageBreakInside => {
                CssValue::keyword("auto")
            }
            Self::Position => CssValue::keyword("static"),
            Self::Quotes => CssValue::keyword("auto"),
            Self::RubyAlign => CssValue::keyword("auto"),
            Self::RubyOverhang => CssValue::keyword("auto"),
            Self::RubyPosition => CssValue::keyword("above"),
            Self::TableLayout => CssValue::keyword("auto"),
            Self::TextAlign => CssValue::keyword("left"),
            Self::TextAlignLast => CssValue::keyword("auto"),
            Self::TextDecoration => CssValue::keyword("none"),
            Self::TextIndent => CssValue::Length(Length::px(0.0)),
            Self::TextJustify => CssValue::keyword("auto"),
            Self::TextOverflow => CssValue::keyword("clip"),
            Self::TextTransform => CssValue::keyword("none"),
            Self::UnicodeBidi => CssValue::keyword("normal"),
            Self::VerticalAlign => CssValue::keyword("baseline"),
            Self::Visibility => CssValue::keyword("visible"),
            Self::WhiteSpace => CssValue::keyword("normal"),
            Self::WordBreak => CssValue::keyword("normal"),
            Self::WordSpacing => CssValue::keyword("normal"),
            Self::WordWrap => CssValue::keyword("normal"),
            Self::WritingMode => CssValue::keyword("horizontal-tb"),
            Self::ZIndex => CssValue::keyword("auto"),
        }
    }
}
