// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transfer orchestrator.

use markup_tree::{Document, ElementId, Gravity, MarkupRange, Tag, Token};

use crate::error::{RangeRole, TransferError};
use crate::fixup::{FixupSegment, FixupSegments};
use crate::structural::{
    copy_minimum_css, move_css_properties_to_attributes, remove_text_related_inline_css,
};
use crate::text_style::{StyleDimension, TextStyleVector};

/// The attribute written on transferred images to keep a host's default
/// image decorators from re-applying defaults over the transferred styling.
pub const NO_DEFAULT_DECORATORS_ATTRIBUTE: &str = "data-no-default-decorators";

/// A format-preserving transfer of one range's content over another.
///
/// The transfer pastes the source content over the destination content and
/// then corrects the destination, per style dimension and per sub-range,
/// until it renders like the source — using the minimal set of corrections
/// rather than explicit styling on every element.
///
/// The operation is synchronous, runs to completion, and is not reentrant:
/// it must be the only mutation of the document while in progress, and the
/// host must refresh any positions it cached elsewhere after
/// [`execute`](Self::execute) returns.
#[derive(Debug)]
pub struct FormatPreservingTransfer<'a> {
    doc: &'a mut Document,
    source: MarkupRange,
    destination: MarkupRange,
}

impl<'a> FormatPreservingTransfer<'a> {
    /// Prepares a transfer of `source`'s content over `destination`.
    ///
    /// Both ranges must be positioned, ordered, and owned by `doc` (the
    /// shared root context; the ranges may live in different containers of
    /// it). The ranges are cloned defensively: the caller's pointers are
    /// never moved.
    pub fn new(
        doc: &'a mut Document,
        source: MarkupRange,
        destination: MarkupRange,
    ) -> Result<Self, TransferError> {
        for (range, role) in [(source, RangeRole::Source), (destination, RangeRole::Destination)] {
            if !doc.range_is_positioned(range) {
                return Err(TransferError::unpositioned(role));
            }
            if doc.compare_pointers(range.start, range.end) == core::cmp::Ordering::Greater {
                return Err(TransferError::inverted(role));
            }
        }

        let source = doc.clone_range(source);
        let destination = doc.clone_range(destination);
        for range in [source, destination] {
            doc.set_gravity(range.start, Gravity::Left);
            doc.set_gravity(range.end, Gravity::Right);
        }

        Ok(Self {
            doc,
            source,
            destination,
        })
    }

    /// Runs the transfer and returns the destination range spanning the
    /// inserted, corrected content.
    pub fn execute(mut self) -> MarkupRange {
        self.normalize_source();
        self.paste_source_over_destination();
        let result = self.fixup_destination_formatting();
        self.doc.release_range(self.source);
        result
    }

    /// Gets the source content into a state the later phases can rely on:
    /// elements with no visual meaning are dropped, and elements the native
    /// formatting commands cannot manipulate are replaced with a supported
    /// equivalent carrying the same attributes. This is what guarantees the
    /// source and destination token streams stay congruent after the raw
    /// copy.
    fn normalize_source(&mut self) {
        let mut to_remove: Vec<ElementId> = Vec::new();
        let mut to_replace: Vec<(ElementId, Tag)> = Vec::new();

        let cursor = self.doc.create_range_at(self.source.start);
        while let Some(token) = self.doc.next_token(cursor, self.source.end) {
            if let Token::Enter(element) = token {
                match self.doc.element(element).tag() {
                    Tag::Comment => to_remove.push(element),
                    // The native commands cannot toggle `s`; `strike` is the
                    // supported equivalent.
                    Tag::S => to_replace.push((element, Tag::Strike)),
                    _ => {}
                }
            }
        }
        self.doc.release_range(cursor);

        for element in to_remove {
            self.doc.remove_element(element);
        }

        let replacement_range = self.doc.create_range();
        self.doc.set_gravity(replacement_range.start, Gravity::Right);
        self.doc.set_gravity(replacement_range.end, Gravity::Left);
        for (element, tag) in to_replace {
            self.doc.move_range_to_element(replacement_range, element, true);
            let replacement = self.doc.create_element(tag);
            let original = self.doc.element(element).clone();
            self.doc.element_mut(replacement).copy_attributes_from(&original);
            *self.doc.element_mut(replacement).style_mut() = original.style().clone();
            self.doc.remove_element(element);
            self.doc.insert_element(replacement, replacement_range);
        }
        self.doc.release_range(replacement_range);

        // Range walks skip nothing here, but hidden inputs carry no visual
        // meaning wherever they sit in the container, so they are
        // enumerated document-wide like the element collection the original
        // hosts expose.
        let container = self
            .doc
            .pointer_container(self.source.start)
            .expect("source range was validated as positioned");
        let hidden_inputs = self.doc.elements_matching(container, |e| {
            *e.tag() == Tag::Input
                && e.attribute("type")
                    .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
        });
        for element in hidden_inputs {
            self.doc.remove_element(element);
        }
    }

    /// Clears the destination and pastes the normalized source content at
    /// the collapsed insertion point.
    fn paste_source_over_destination(&mut self) {
        // The destination edges must not sit inside embedded non-text
        // content.
        self.doc
            .break_out_of_embedded_content(self.destination.start, false);
        self.doc
            .break_out_of_embedded_content(self.destination.end, true);

        self.doc.remove_content(self.destination);
        self.doc.collapse_range(self.destination, true);

        // Only block-level source content needs the destination block split;
        // inline content can land mid-paragraph.
        let source_has_blocks = self
            .doc
            .range_contains_element_matching(self.source, |e| {
                e.tag().is_block() || e.tag().is_table()
            });
        if source_has_blocks {
            self.doc.split_block_for_insertion(self.destination.start);
            self.doc.collapse_range(self.destination, true);
        }

        self.doc.set_gravity(self.destination.start, Gravity::Left);
        self.doc.set_gravity(self.destination.end, Gravity::Right);

        self.doc.copy_range(self.source, self.destination.start);
    }

    /// Walks the source range and the pasted destination range in lockstep
    /// and corrects the destination: structural properties per element,
    /// text appearance per run through fixup segments.
    fn fixup_destination_formatting(&mut self) -> MarkupRange {
        let segments = self.collect_fixup_segments();
        self.execute_fixup_segments(segments);
        self.destination
    }

    fn collect_fixup_segments(&mut self) -> Vec<FixupSegment> {
        let mut segments = FixupSegments::new();
        let source_cursor = self.doc.create_range_at(self.source.start);
        let destination_cursor = self.doc.create_range_at(self.destination.start);

        loop {
            let source_token = self.doc.next_token(source_cursor, self.source.end);
            let destination_token = self
                .doc
                .next_token(destination_cursor, self.destination.end);

            let (source_token, destination_token) = match (source_token, destination_token) {
                (None, None) => break,
                (Some(s), Some(d)) => (s, d),
                (s, d) => {
                    debug_assert!(false, "walks ended unevenly: {s:?} vs {d:?}");
                    tracing::warn!("source and destination walks ended unevenly; stopping fixup");
                    break;
                }
            };
            if !source_token.is_congruent_with(&destination_token, self.doc) {
                // A congruence violation means normalization failed to keep
                // the trees parallel. Never take the host down over a
                // formatting miss: skip the pair and keep walking.
                debug_assert!(
                    false,
                    "mismatched tokens: {source_token:?} vs {destination_token:?}"
                );
                tracing::warn!(
                    ?source_token,
                    ?destination_token,
                    "mismatched walk tokens; skipping"
                );
                continue;
            }

            match (&source_token, &destination_token) {
                (Token::Enter(source_element), Token::Enter(destination_element)) => {
                    if *self.doc.element(*source_element).tag() == Tag::Img {
                        // Keep the host's default image decorators from
                        // overriding the styling this transfer establishes.
                        self.doc
                            .element_mut(*destination_element)
                            .set_attribute(NO_DEFAULT_DECORATORS_ATTRIBUTE, "true");
                    }
                    copy_minimum_css(self.doc, *source_element, *destination_element);
                    remove_text_related_inline_css(self.doc, *destination_element);
                    move_css_properties_to_attributes(
                        self.doc,
                        *source_element,
                        *destination_element,
                    );
                }
                (Token::Text(_), Token::Text(_)) => {
                    let source_vector = TextStyleVector::sample(self.doc, source_cursor.start);
                    let destination_vector =
                        TextStyleVector::sample(self.doc, destination_cursor.start);
                    for dimension in StyleDimension::ALL {
                        segments.observe(
                            self.doc,
                            source_vector.get(dimension),
                            destination_vector.get(dimension),
                            destination_cursor,
                        );
                    }
                }
                (Token::Exit(source_element), Token::Exit(_)) => {
                    // An inline wrapper correction cannot span a block
                    // boundary, so leaving a block force-closes everything.
                    if !self.doc.is_inline_element(*source_element) {
                        segments.close_all();
                    }
                }
                _ => unreachable!("congruence was checked above"),
            }
        }

        self.doc.release_range(source_cursor);
        self.doc.release_range(destination_cursor);
        segments.finish()
    }

    fn execute_fixup_segments(&mut self, segments: Vec<FixupSegment>) {
        // Segment application is the expensive part; one movable cursor is
        // reused across all of them.
        let cursor = self.doc.create_range();
        for segment in &segments {
            self.doc.move_pointer_to_pointer(cursor.start, segment.range.start);
            self.doc.move_pointer_to_pointer(cursor.end, segment.range.end);
            // Corrections applied by earlier segments may have wrapped this
            // segment's content; normalize to the content so this
            // correction nests instead of splitting those wrappers.
            self.doc.shrink_range_to_content(cursor);
            segment.target.apply(self.doc, cursor);
        }
        self.doc.release_range(cursor);
        for segment in segments {
            self.doc.release_range(segment.range);
        }
    }
}

/// Transfers `source`'s content over `destination`, preserving the source's
/// rendered formatting, and returns the range of the inserted content.
///
/// This is a convenience over [`FormatPreservingTransfer::new`] +
/// [`FormatPreservingTransfer::execute`].
pub fn transfer_formatting(
    doc: &mut Document,
    source: MarkupRange,
    destination: MarkupRange,
) -> Result<MarkupRange, TransferError> {
    Ok(FormatPreservingTransfer::new(doc, source, destination)?.execute())
}
