// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed element vocabulary.

/// The tag identity of an element.
///
/// This is a closed vocabulary covering the element types the editing layer
/// understands natively, plus a [`Tag::Custom`] escape hatch for foreign
/// markup (for example namespaced elements pasted from word processors).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The editable root of a container.
    Body,
    /// `p`.
    P,
    /// `div`.
    Div,
    /// `blockquote`.
    Blockquote,
    /// `pre`.
    Pre,
    /// `h1`.
    H1,
    /// `h2`.
    H2,
    /// `h3`.
    H3,
    /// `h4`.
    H4,
    /// `h5`.
    H5,
    /// `h6`.
    H6,
    /// `ul`.
    Ul,
    /// `ol`.
    Ol,
    /// `li`.
    Li,
    /// `table`.
    Table,
    /// `thead`.
    Thead,
    /// `tbody`.
    Tbody,
    /// `tfoot`.
    Tfoot,
    /// `tr`.
    Tr,
    /// `td`.
    Td,
    /// `th`.
    Th,
    /// `colgroup`.
    Colgroup,
    /// `col`.
    Col,
    /// `hr`.
    Hr,
    /// `br`.
    Br,
    /// `img`.
    Img,
    /// `iframe`.
    Iframe,
    /// `object`.
    Object,
    /// `applet`.
    Applet,
    /// `input`.
    Input,
    /// `a`.
    A,
    /// `span`.
    Span,
    /// `font`.
    Font,
    /// `b`.
    B,
    /// `strong`.
    Strong,
    /// `i`.
    I,
    /// `em`.
    Em,
    /// `u`.
    U,
    /// `s`. Not supported by the native formatting commands; normalization
    /// replaces it with [`Tag::Strike`].
    S,
    /// `strike`.
    Strike,
    /// `sub`.
    Sub,
    /// `sup`.
    Sup,
    /// `small`.
    Small,
    /// `big`.
    Big,
    /// A comment node. Carries no children; its text lives in the element's
    /// `data` attribute.
    Comment,
    /// A foreign element outside the native vocabulary, identified by its
    /// qualified name.
    Custom(Box<str>),
}

impl Tag {
    /// Returns the serialized name for this tag.
    pub fn name(&self) -> &str {
        match self {
            Self::Body => "body",
            Self::P => "p",
            Self::Div => "div",
            Self::Blockquote => "blockquote",
            Self::Pre => "pre",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Li => "li",
            Self::Table => "table",
            Self::Thead => "thead",
            Self::Tbody => "tbody",
            Self::Tfoot => "tfoot",
            Self::Tr => "tr",
            Self::Td => "td",
            Self::Th => "th",
            Self::Colgroup => "colgroup",
            Self::Col => "col",
            Self::Hr => "hr",
            Self::Br => "br",
            Self::Img => "img",
            Self::Iframe => "iframe",
            Self::Object => "object",
            Self::Applet => "applet",
            Self::Input => "input",
            Self::A => "a",
            Self::Span => "span",
            Self::Font => "font",
            Self::B => "b",
            Self::Strong => "strong",
            Self::I => "i",
            Self::Em => "em",
            Self::U => "u",
            Self::S => "s",
            Self::Strike => "strike",
            Self::Sub => "sub",
            Self::Sup => "sup",
            Self::Small => "small",
            Self::Big => "big",
            Self::Comment => "!comment",
            Self::Custom(name) => name,
        }
    }

    /// Returns `true` for element types that establish a block.
    ///
    /// [`Tag::Custom`] is *not* classified here: foreign markup is treated as
    /// inline exactly when its computed `display` is `inline`, which requires
    /// a style query. See [`Document::is_inline_element`].
    ///
    /// [`Document::is_inline_element`]: crate::Document::is_inline_element
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Body
                | Self::P
                | Self::Div
                | Self::Blockquote
                | Self::Pre
                | Self::H1
                | Self::H2
                | Self::H3
                | Self::H4
                | Self::H5
                | Self::H6
                | Self::Ul
                | Self::Ol
                | Self::Li
                | Self::Hr
        )
    }

    /// Returns `true` for table-structure element types.
    pub fn is_table(&self) -> bool {
        matches!(
            self,
            Self::Table
                | Self::Thead
                | Self::Tbody
                | Self::Tfoot
                | Self::Tr
                | Self::Td
                | Self::Th
                | Self::Colgroup
                | Self::Col
        )
    }

    /// Returns `true` for element types that flow inline by default.
    ///
    /// `br` counts as inline here: a line break does not end the scope of an
    /// inline wrapper, so corrections may span across it.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::A
                | Self::Span
                | Self::Font
                | Self::B
                | Self::Strong
                | Self::I
                | Self::Em
                | Self::U
                | Self::S
                | Self::Strike
                | Self::Sub
                | Self::Sup
                | Self::Small
                | Self::Big
                | Self::Img
                | Self::Br
                | Self::Input
                | Self::Comment
        )
    }

    /// Returns `true` for embedded, non-text content (an insertion point must
    /// not sit inside one of these).
    pub fn is_embedded_content(&self) -> bool {
        matches!(self, Self::Img | Self::Iframe | Self::Object | Self::Applet)
    }

    /// Returns `true` for element types serialized without children.
    pub fn is_void(&self) -> bool {
        matches!(
            self,
            Self::Br | Self::Hr | Self::Img | Self::Input | Self::Col | Self::Comment
        )
    }

    /// Per the HTML 4.01 and XHTML Transitional DTD, the element types that
    /// support the `align="LEFT|CENTER|RIGHT|JUSTIFY"` attribute.
    pub fn supports_align_attribute(&self) -> bool {
        matches!(
            self,
            Self::Div
                | Self::P
                | Self::H1
                | Self::H2
                | Self::H3
                | Self::H4
                | Self::H5
                | Self::H6
                | Self::Colgroup
                | Self::Col
                | Self::Thead
                | Self::Tbody
                | Self::Tfoot
                | Self::Tr
                | Self::Th
                | Self::Td
        )
    }

    /// Per the HTML 4.01 and XHTML Transitional DTD, the element types whose
    /// `width` attribute accepts a percentage.
    pub fn supports_percentage_width_attribute(&self) -> bool {
        matches!(
            self,
            Self::Img
                | Self::Table
                | Self::Colgroup
                | Self::Col
                | Self::Th
                | Self::Td
                | Self::Hr
                | Self::Iframe
        )
    }

    /// Per the HTML 4.01 and XHTML Transitional DTD, the element types whose
    /// `width` attribute accepts a pixel count.
    pub fn supports_pixel_width_attribute(&self) -> bool {
        matches!(
            self,
            Self::Img
                | Self::Applet
                | Self::Object
                | Self::Table
                | Self::Colgroup
                | Self::Col
                | Self::Th
                | Self::Td
                | Self::Hr
                | Self::Iframe
        )
    }

    /// Per the HTML 4.01 and XHTML Transitional DTD, the element types whose
    /// `height` attribute accepts a percentage.
    pub fn supports_percentage_height_attribute(&self) -> bool {
        matches!(self, Self::Img | Self::Th | Self::Td | Self::Iframe)
    }

    /// Per the HTML 4.01 and XHTML Transitional DTD, the element types whose
    /// `height` attribute accepts a pixel count.
    pub fn supports_pixel_height_attribute(&self) -> bool {
        matches!(
            self,
            Self::Img | Self::Applet | Self::Object | Self::Th | Self::Td | Self::Iframe
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_and_inline_are_disjoint() {
        let all = [
            Tag::Body,
            Tag::P,
            Tag::Div,
            Tag::Blockquote,
            Tag::Pre,
            Tag::H1,
            Tag::Ul,
            Tag::Ol,
            Tag::Li,
            Tag::Table,
            Tag::Td,
            Tag::A,
            Tag::Span,
            Tag::B,
            Tag::Img,
            Tag::Br,
        ];
        for tag in all {
            assert!(
                !(tag.is_block() && tag.is_inline()),
                "{} is both block and inline",
                tag.name()
            );
        }
    }

    #[test]
    fn width_attribute_capabilities_follow_the_dtd() {
        assert!(Tag::Table.supports_percentage_width_attribute());
        assert!(Tag::Img.supports_pixel_width_attribute());
        // applet/object take pixel widths but not percentages
        assert!(Tag::Object.supports_pixel_width_attribute());
        assert!(!Tag::Object.supports_percentage_width_attribute());
        assert!(!Tag::P.supports_pixel_width_attribute());
    }

    #[test]
    fn custom_tags_keep_their_name() {
        let tag = Tag::Custom("o:p".into());
        assert_eq!(tag.name(), "o:p");
        assert!(!tag.is_block());
        assert!(!tag.is_inline());
    }
}
