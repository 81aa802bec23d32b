// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixup-segment tracking: the per-dimension open/close interval state of
//! the diff walk.

use markup_tree::{Document, MarkupRange};

use crate::text_style::{StyleDimension, TextStyle};

/// A destination sub-range queued for correction, plus the single source
/// value it must be corrected to.
///
/// Segments are created and destroyed entirely within one transfer: the
/// executor releases their pointers once applied.
#[derive(Debug)]
pub struct FixupSegment {
    /// The destination sub-range needing correction.
    pub range: MarkupRange,
    /// The source-side value the range must render with.
    pub target: TextStyle,
}

impl FixupSegment {
    fn open(doc: &mut Document, at: MarkupRange, target: TextStyle) -> Self {
        // Both boundaries keep left gravity: a wrapper another segment
        // inserts at a boundary must stay outside this segment, and the
        // executor re-normalizes the cursor to content before applying.
        let range = doc.clone_range(at);
        Self { range, target }
    }
}

/// The diff walk's segment state: at most one open segment per dimension,
/// plus the closed segments in closure order.
#[derive(Debug, Default)]
pub struct FixupSegments {
    open: [Option<FixupSegment>; StyleDimension::COUNT],
    closed: Vec<FixupSegment>,
}

impl FixupSegments {
    /// Creates empty segment state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one dimension's source and destination values for the text run
    /// currently under the walk cursors.
    ///
    /// `at` is the destination cursor, spanning the current text run. Per
    /// dimension and independently of every other dimension:
    ///
    /// - an open segment closes if the destination has converged with the
    ///   source, or if the source value drifted away from the segment's
    ///   target;
    /// - a new segment opens on a mismatch not already covered by an open
    ///   segment targeting the current source value;
    /// - otherwise an open segment extends across this run.
    pub fn observe(
        &mut self,
        doc: &mut Document,
        source: &TextStyle,
        destination: &TextStyle,
        at: MarkupRange,
    ) {
        debug_assert_eq!(
            source.dimension(),
            destination.dimension(),
            "mismatched dimensions"
        );
        let slot = &mut self.open[source.dimension().index()];

        if let Some(segment) = slot.take() {
            let converged = destination == source;
            let target_drifted = segment.target != *source;
            if converged || target_drifted {
                self.closed.push(segment);
            } else {
                *slot = Some(segment);
            }
        }

        let covered = slot
            .as_ref()
            .is_some_and(|segment| segment.target == *source);
        if source != destination && !covered {
            *slot = Some(FixupSegment::open(doc, at, source.clone()));
        } else if let Some(segment) = slot.as_ref() {
            doc.move_pointer_to_pointer(segment.range.end, at.end);
        }
    }

    /// Force-closes every open segment, in dimension order.
    ///
    /// Called when the walk leaves a block-level element (an inline wrapper
    /// correction cannot span a block boundary) and at the end of the walk.
    pub fn close_all(&mut self) {
        for slot in &mut self.open {
            if let Some(segment) = slot.take() {
                self.closed.push(segment);
            }
        }
    }

    /// Returns the closed segments in closure order.
    ///
    /// Any still-open segments are force-closed first.
    pub fn finish(mut self) -> Vec<FixupSegment> {
        self.close_all();
        self.closed
    }

    /// The number of segments closed so far.
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }
}
