// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end transfer scenarios.

use decant::transfer_formatting;
use markup_tree::css::{CssProperty, CssValue, Rgba};
use markup_tree::{ComputedTextStyle, Document, MarkupRange, Tag, Token};

const RED: Rgba = Rgba::rgb(255, 0, 0);

/// Samples the computed text style at the start of every text run in
/// `range`, in document order.
fn styles_per_text_run(doc: &mut Document, range: MarkupRange) -> Vec<ComputedTextStyle> {
    let cursor = doc.create_range_at(range.start);
    let mut styles = Vec::new();
    while let Some(token) = doc.next_token(cursor, range.end) {
        if matches!(token, Token::Text(_)) {
            styles.push(doc.computed_text_style_at(cursor.start));
        }
    }
    styles
}

#[test]
fn bold_red_source_text_gets_one_correction_per_dimension() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let b = doc.append_element(doc.body(staged), Tag::B);
    let font = doc.append_element(b, Tag::Font);
    doc.element_mut(font).set_attribute("color", "#ff0000");
    doc.append_text(font, "Hello");
    // The range covers only the text; bold and red are ambient styling of
    // the source position.
    let source = doc.create_range();
    doc.move_range_to_element(source, font, false);

    let destination = doc.body_content_range(doc.primary_container());
    let result = transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    assert_eq!(doc.range_text(result), "Hello");
    // One bold wrapper and one color wrapper, each spanning all five
    // characters; the later correction nests inside the earlier one.
    assert_eq!(
        doc.container_markup(doc.primary_container()),
        r##"<b><font color="#ff0000">Hello</font></b>"##
    );
    for style in styles_per_text_run(&mut doc, result) {
        assert!(style.bold);
        assert_eq!(style.color, RED);
    }
}

#[test]
fn partially_bold_source_corrects_only_the_bold_run() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let staged_body = doc.body(staged);
    let span = doc.append_element(staged_body, Tag::Span);
    doc.element_mut(span)
        .style_mut()
        .set(CssProperty::FontWeight, CssValue::keyword("bold"));
    doc.append_text(span, "AB");
    doc.append_text(staged_body, "CD");
    let source = doc.body_content_range(staged);

    let destination = doc.body_content_range(doc.primary_container());
    let result = transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    // The copied span's inline font-weight is stripped, and the single bold
    // fixup covers exactly "AB". No color fixup appears anywhere.
    assert_eq!(
        doc.container_markup(doc.primary_container()),
        "<span><b>AB</b></span>CD"
    );
    let styles = styles_per_text_run(&mut doc, result);
    assert_eq!(styles.len(), 2);
    assert!(styles[0].bold);
    assert!(!styles[1].bold);
    assert!(styles.iter().all(|s| s.color == Rgba::BLACK));
}

#[test]
fn color_fixups_never_span_a_paragraph_boundary() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let staged_body = doc.body(staged);
    // Both paragraphs carry the same color, so the values would match
    // across the boundary; the fixups must still be per-paragraph.
    for text in ["AA", "BB"] {
        let p = doc.append_element(staged_body, Tag::P);
        doc.element_mut(p)
            .style_mut()
            .set(CssProperty::Color, CssValue::Color(RED));
        doc.append_text(p, text);
    }
    let source = doc.body_content_range(staged);

    let destination = doc.body_content_range(doc.primary_container());
    let result = transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    assert_eq!(
        doc.container_markup(doc.primary_container()),
        r##"<p><font color="#ff0000">AA</font></p><p><font color="#ff0000">BB</font></p>"##
    );
    for style in styles_per_text_run(&mut doc, result) {
        assert_eq!(style.color, RED);
    }
}

#[test]
fn un_underlined_link_text_survives_pasting_into_a_link() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let staged_a = doc.append_element(doc.body(staged), Tag::A);
    let staged_span = doc.append_element(staged_a, Tag::Span);
    doc.element_mut(staged_span)
        .style_mut()
        .set(CssProperty::TextDecoration, CssValue::keyword("none"));
    doc.append_text(staged_span, "click");
    // The range covers only the link text, which renders un-underlined.
    let source = doc.create_range();
    doc.move_range_to_element(source, staged_span, false);

    let body = doc.body(doc.primary_container());
    let a = doc.append_element(body, Tag::A);
    doc.append_text(a, "old");
    let destination = doc.create_range();
    doc.move_range_to_element(destination, a, false);

    let result = transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    // The native underline toggle cannot do this inside a hyperlink; the
    // special case wraps an explicit override instead.
    assert_eq!(
        doc.container_markup(doc.primary_container()),
        r#"<a><span style="text-decoration: none">click</span></a>"#
    );
    for style in styles_per_text_run(&mut doc, result) {
        assert!(!style.underline);
    }
}

#[test]
fn block_source_content_splits_the_destination_paragraph() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let staged_p = doc.append_element(doc.body(staged), Tag::P);
    doc.append_text(staged_p, "new");
    let source = doc.body_content_range(staged);

    let body = doc.body(doc.primary_container());
    let p = doc.append_element(body, Tag::P);
    doc.append_text(p, "xy");
    // A collapsed destination (a caret) between 'x' and 'y'.
    let destination = doc.create_range();
    doc.move_range_to_element(destination, p, false);
    doc.collapse_range(destination, true);
    doc.move_pointer_right(destination.start, 1);
    doc.collapse_range(destination, true);

    let result = transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    // Block content must not land mid-paragraph: the destination paragraph
    // splits at the insertion point.
    assert_eq!(
        doc.container_markup(doc.primary_container()),
        "<p>x</p><p>new</p><p>y</p>"
    );
    assert_eq!(doc.range_text(result), "new");
}
