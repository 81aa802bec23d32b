// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariant-level properties of the transfer engine.

use decant::{transfer_formatting, FormatPreservingTransfer, TransferErrorKind};
use markup_tree::css::{CssProperty, CssValue, Rgba};
use markup_tree::{ComputedTextStyle, Document, MarkupRange, Tag, Token};

/// Samples the computed text style at the start of every text run.
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
fn converged_content_transfers_without_corrections() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let b = doc.append_element(doc.body(staged), Tag::B);
    doc.append_text(b, "hi");
    // The range includes the bold wrapper, so the raw copy alone already
    // renders identically at every position.
    let source = doc.body_content_range(staged);
    let destination = doc.body_content_range(doc.primary_container());

    transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    // No fixup wrappers, no inlined styles: the markup is exactly the
    // copied source.
    assert_eq!(doc.container_markup(doc.primary_container()), "<b>hi</b>");
}

#[test]
fn corrections_converge_to_the_source_style_vector() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let staged_body = doc.body(staged);
    // "AB" bold, "CD" bold+italic, "EF" italic: the two dimensions change
    // at different offsets.
    let bold = doc.append_element(staged_body, Tag::Span);
    doc.element_mut(bold)
        .style_mut()
        .set(CssProperty::FontWeight, CssValue::keyword("bold"));
    doc.append_text(bold, "AB");
    let both = doc.append_element(bold, Tag::Span);
    doc.element_mut(both)
        .style_mut()
        .set(CssProperty::FontStyle, CssValue::keyword("italic"));
    doc.append_text(both, "CD");
    let italic = doc.append_element(staged_body, Tag::Span);
    doc.element_mut(italic)
        .style_mut()
        .set(CssProperty::FontStyle, CssValue::keyword("italic"));
    doc.append_text(italic, "EF");

    let source = doc.body_content_range(staged);
    let destination = doc.body_content_range(doc.primary_container());
    let result = transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    let source_range = doc.body_content_range(staged);
    let expected = styles_per_text_run(&mut doc, source_range);
    let actual = styles_per_text_run(&mut doc, result);
    assert_eq!(actual, expected);
    assert_eq!(
        actual
            .iter()
            .map(|s| (s.bold, s.italic))
            .collect::<Vec<_>>(),
        vec![(true, false), (true, true), (false, true)]
    );
}

#[test]
fn dimension_segments_ignore_other_dimensions_boundaries() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let staged_body = doc.body(staged);
    // Bold covers AB+CD; italic covers only CD. The bold correction must
    // come out as a single wrapper even though italic changes inside it.
    let bold = doc.append_element(staged_body, Tag::Span);
    doc.element_mut(bold)
        .style_mut()
        .set(CssProperty::FontWeight, CssValue::keyword("bold"));
    doc.append_text(bold, "AB");
    let both = doc.append_element(bold, Tag::Span);
    doc.element_mut(both)
        .style_mut()
        .set(CssProperty::FontStyle, CssValue::keyword("italic"));
    doc.append_text(both, "CD");

    let source = doc.body_content_range(staged);
    let destination = doc.body_content_range(doc.primary_container());
    transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    let markup = doc.container_markup(doc.primary_container());
    assert_eq!(markup.matches("<b>").count(), 1, "one bold segment: {markup}");
    assert_eq!(markup.matches("<i>").count(), 1, "one italic segment: {markup}");
}

#[test]
fn fixups_are_force_closed_at_block_boundaries() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let staged_body = doc.body(staged);
    // Ambient bold on the staged body covers both paragraphs.
    doc.element_mut(staged_body)
        .style_mut()
        .set(CssProperty::FontWeight, CssValue::keyword("bold"));
    for text in ["one", "two"] {
        let p = doc.append_element(staged_body, Tag::P);
        doc.append_text(p, text);
    }
    let source = doc.body_content_range(staged);
    let destination = doc.body_content_range(doc.primary_container());
    let result = transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    // Two per-paragraph wrappers, not one straddling wrapper.
    assert_eq!(
        doc.container_markup(doc.primary_container()),
        "<p><b>one</b></p><p><b>two</b></p>"
    );
    for style in styles_per_text_run(&mut doc, result) {
        assert!(style.bold);
    }
}

#[test]
fn source_normalization_replaces_unsupported_strikethrough() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let s = doc.append_element(doc.body(staged), Tag::S);
    doc.element_mut(s).set_attribute("class", "keep");
    doc.append_text(s, "gone");
    let source = doc.body_content_range(staged);
    let destination = doc.body_content_range(doc.primary_container());

    let result = transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    assert_eq!(
        doc.container_markup(doc.primary_container()),
        r#"<strike class="keep">gone</strike>"#
    );
    for style in styles_per_text_run(&mut doc, result) {
        assert!(style.strikethrough);
    }
}

#[test]
fn source_normalization_drops_comments_and_hidden_inputs() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let staged_body = doc.body(staged);
    doc.append_text(staged_body, "keep");
    let comment = doc.append_element(staged_body, Tag::Comment);
    doc.element_mut(comment).set_attribute("data", "noise");
    let input = doc.append_element(staged_body, Tag::Input);
    doc.element_mut(input).set_attribute("type", "hidden");

    let source = doc.body_content_range(staged);
    let destination = doc.body_content_range(doc.primary_container());
    transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    assert_eq!(doc.container_markup(doc.primary_container()), "keep");
}

#[test]
fn transferred_images_are_marked_against_default_decoration() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let img = doc.append_element(doc.body(staged), Tag::Img);
    doc.element_mut(img).set_attribute("src", "cat.png");
    let source = doc.body_content_range(staged);
    let destination = doc.body_content_range(doc.primary_container());

    transfer_formatting(&mut doc, source, destination).expect("valid ranges");

    let copied = doc.elements_matching(doc.primary_container(), |e| *e.tag() == Tag::Img);
    assert_eq!(copied.len(), 1);
    assert_eq!(
        doc.element(copied[0]).attribute(decant::NO_DEFAULT_DECORATORS_ATTRIBUTE),
        Some("true")
    );
    // The source image is not marked.
    assert_eq!(
        doc.element(img).attribute(decant::NO_DEFAULT_DECORATORS_ATTRIBUTE),
        None
    );
}

#[test]
fn inverted_ranges_are_rejected() {
    let mut doc = Document::new();
    let body = doc.body(doc.primary_container());
    doc.append_text(body, "xy");
    let inverted = doc.create_range();
    doc.move_range_to_element(inverted, body, false);
    let flipped = MarkupRange {
        start: inverted.end,
        end: inverted.start,
    };
    let destination = doc.body_content_range(doc.primary_container());

    let err = FormatPreservingTransfer::new(&mut doc, flipped, destination)
        .err()
        .expect("inverted source must be rejected");
    assert_eq!(err.kind(), TransferErrorKind::InvertedRange);
}

#[test]
fn unpositioned_ranges_are_rejected() {
    let mut doc = Document::new();
    let unpositioned = doc.create_range();
    let destination = doc.body_content_range(doc.primary_container());

    let err = FormatPreservingTransfer::new(&mut doc, unpositioned, destination)
        .err()
        .expect("unpositioned source must be rejected");
    assert_eq!(err.kind(), TransferErrorKind::UnpositionedRange);
}

#[test]
fn rerunning_a_transfer_over_its_own_result_changes_nothing() {
    let mut doc = Document::new();
    let staged = doc.create_container();
    let span = doc.append_element(doc.body(staged), Tag::Span);
    doc.element_mut(span)
        .style_mut()
        .set(CssProperty::Color, CssValue::Color(Rgba::rgb(0, 128, 0)));
    doc.append_text(span, "green");
    let source = doc.body_content_range(staged);
    let destination = doc.body_content_range(doc.primary_container());

    let first = transfer_formatting(&mut doc, source, destination).expect("valid ranges");
    let after_first = doc.container_markup(doc.primary_container());

    let source_again = doc.body_content_range(staged);
    let second = transfer_formatting(&mut doc, source_again, first).expect("valid ranges");
    assert_eq!(doc.container_markup(doc.primary_container()), after_first);

    for style in styles_per_text_run(&mut doc, second) {
        assert_eq!(style.color, Rgba::rgb(0, 128, 0));
    }
}
