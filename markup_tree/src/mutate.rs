// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural mutation of containers.
//!
//! Every operation here states how it treats registered pointers; anything
//! not called out follows the splice adjustment rules on
//! [`Document::splice`](crate::Document).

use hashbrown::HashMap;

use crate::document::{ContainerId, Document, Unit};
use crate::element::ElementId;
use crate::pointer::{Adjacency, Gravity, MarkupRange, PointerId};
use crate::tag::Tag;

impl Document {
    /// Inserts text at a pointer. The pointer's own gravity decides which
    /// side of the new text it ends up on.
    pub fn insert_text(&mut self, p: PointerId, text: &str) {
        let (container, index) = self.location_of(p);
        let units: Vec<Unit> = text.chars().map(Unit::Char).collect();
        self.splice(container, index, index, &units);
    }

    /// Inserts a new, empty element at a pointer and returns it.
    pub fn insert_empty_element(&mut self, p: PointerId, tag: Tag) -> ElementId {
        let element = self.create_element(tag);
        let (container, index) = self.location_of(p);
        self.splice(
            container,
            index,
            index,
            &[Unit::Begin(element), Unit::End(element)],
        );
        element
    }

    /// Inserts a detached element so that it encloses the content between
    /// the range's boundaries.
    ///
    /// The begin unit lands at the range start and the end unit at the range
    /// end; the range's own pointers follow their gravity, so a caller that
    /// wants them inside the new element gives the start [`Gravity::Right`]
    /// and the end [`Gravity::Left`].
    ///
    /// # Panics
    ///
    /// If the range is unpositioned or inverted, or the element is already
    /// attached.
    pub fn insert_element(&mut self, element: ElementId, range: MarkupRange) {
        assert!(
            self.element_units(element).is_none(),
            "element is already attached"
        );
        let (container, start) = self.location_of(range.start);
        let end = self.index_of(range.end);
        assert!(start <= end, "range inverted");
        self.splice(container, end, end, &[Unit::End(element)]);
        self.splice(container, start, start, &[Unit::Begin(element)]);
    }

    /// Removes an element's begin and end units, leaving its content in
    /// place.
    ///
    /// Pointers adjacent to the removed units collapse onto the surviving
    /// content. The element record itself stays in the arena, detached.
    pub fn remove_element(&mut self, element: ElementId) {
        let Some((container, begin, end)) = self.element_units(element) else {
            return;
        };
        self.splice(container, end, end + 1, &[]);
        self.splice(container, begin, begin + 1, &[]);
    }

    /// Removes the content between a range's boundaries.
    ///
    /// Elements partially overlapping the range are split at its boundaries
    /// first, so only whole subtrees are removed. Clinging pointers inside
    /// the removed region become unpositioned; others collapse to the
    /// removal site.
    pub fn remove_content(&mut self, range: MarkupRange) {
        self.balance_range(range);
        let (container, start) = self.location_of(range.start);
        let end = self.index_of(range.end);
        self.splice(container, start, end, &[]);
    }

    /// Copies the content between `source`'s boundaries to `target`,
    /// verbatim: structure, attributes and inline styles as authored.
    ///
    /// Elements are deep-cloned into fresh arena records, so the copy shares
    /// nothing with the source; source and target may be in different
    /// containers. The target pointer's gravity decides which side of the
    /// copied content it ends up on.
    pub fn copy_range(&mut self, source: MarkupRange, target: PointerId) {
        let (container, start) = self.location_of(source.start);
        let end = self.index_of(source.end);
        debug_assert!(
            self.is_balanced(container, start, end),
            "copy source must span whole subtrees"
        );

        let source_units: Vec<Unit> = self.container(container).units[start..end].to_vec();
        let mut clones: HashMap<ElementId, ElementId> = HashMap::new();
        for unit in &source_units {
            if let Unit::Begin(e) = unit {
                let clone = self.element(*e).clone();
                let id = self.create_element(clone.tag().clone());
                *self.element_mut(id) = clone;
                clones.insert(*e, id);
            }
        }
        let copied: Vec<Unit> = source_units
            .iter()
            .map(|unit| match unit {
                Unit::Begin(e) => Unit::Begin(clones[e]),
                Unit::End(e) => Unit::End(clones[e]),
                Unit::Char(ch) => Unit::Char(*ch),
            })
            .collect();

        let (target_container, index) = self.location_of(target);
        self.splice(target_container, index, index, &copied);
    }

    /// Splits an attached element in two at a pointer inside it, cloning the
    /// tag, attributes and inline style onto the second fragment.
    ///
    /// Returns the second fragment. `p` ends up between the fragments; other
    /// pointers at the split point follow their gravity into one fragment or
    /// the other.
    ///
    /// # Panics
    ///
    /// If `p` does not lie strictly inside `element`'s content.
    pub fn split_element_at(&mut self, element: ElementId, p: PointerId) -> ElementId {
        let (container, begin, end) = self
            .element_units(element)
            .expect("element must be attached to a container");
        let (pc, index) = self.location_of(p);
        assert_eq!(pc, container, "pointer is in a different container");
        assert!(
            index > begin && index <= end,
            "pointer must lie inside the element"
        );

        let second = {
            let clone = self.element(element).clone();
            let id = self.create_element(clone.tag().clone());
            *self.element_mut(id) = clone;
            id
        };
        self.splice(
            container,
            index,
            index,
            &[Unit::End(element), Unit::Begin(second)],
        );
        // The original end unit (now two to the right) closes the second
        // fragment. Direct rewrite; no pointer is affected.
        self.containers[container.0 as usize].units[end + 2] = Unit::End(second);
        self.set_index(p, container, index + 1);
        second
    }

    /// Splits every element that partially overlaps the range at the range
    /// boundary it crosses, so that the range contains only whole subtrees.
    ///
    /// The body is never split.
    pub fn balance_range(&mut self, range: MarkupRange) {
        loop {
            let (container, start) = self.location_of(range.start);
            let end = self.index_of(range.end);
            debug_assert!(start <= end, "range inverted");
            let body = self.body(container);

            let start_stack = self.enclosing_at(container, start);
            let end_stack = self.enclosing_at(container, end);

            // An element enclosing exactly one boundary crosses it.
            let crosses_start = start_stack
                .iter()
                .rev()
                .find(|e| **e != body && !end_stack.contains(e))
                .copied();
            if let Some(element) = crosses_start {
                self.split_element_at(element, range.start);
                continue;
            }
            let crosses_end = end_stack
                .iter()
                .rev()
                .find(|e| **e != body && !start_stack.contains(e))
                .copied();
            if let Some(element) = crosses_end {
                self.split_element_at(element, range.end);
                continue;
            }
            break;
        }
    }

    /// Wraps the content between the range's boundaries in `element`,
    /// splitting partially overlapping elements first so the result is
    /// well-formed. The range ends up spanning the wrapped content, inside
    /// the new element.
    pub fn wrap_range(&mut self, range: MarkupRange, element: ElementId) {
        self.balance_range(range);
        let start_gravity = self.gravity(range.start);
        let end_gravity = self.gravity(range.end);
        self.set_gravity(range.start, Gravity::Right);
        self.set_gravity(range.end, Gravity::Left);
        self.insert_element(element, range);
        self.set_gravity(range.start, start_gravity);
        self.set_gravity(range.end, end_gravity);
    }

    /// Splits the block enclosing `p` so that block content can be inserted
    /// at the pointer without landing mid-paragraph.
    ///
    /// If the pointer sits at the block's content edge it is moved just
    /// outside the block instead (a breakout); the body itself is never
    /// split.
    pub fn split_block_for_insertion(&mut self, p: PointerId) {
        let (container, _) = self.location_of(p);
        let body = self.body(container);
        let block = self.enclosing_element_matching(p, |e| e.tag().is_block());
        let Some(block) = block.filter(|b| *b != body) else {
            return;
        };
        let (_, begin, end) = self
            .element_units(block)
            .expect("enclosing block must be attached");
        let index = self.index_of(p);
        if index == begin + 1 {
            self.move_adjacent_to_element(p, block, Adjacency::BeforeBegin);
        } else if index == end {
            self.move_adjacent_to_element(p, block, Adjacency::AfterEnd);
        } else {
            self.split_element_at(block, p);
        }
    }

    /// Moves `p` out of any enclosing embedded (non-text) content, placing
    /// it before or after the outermost such element.
    pub fn break_out_of_embedded_content(&mut self, p: PointerId, place_after: bool) {
        while let Some(element) =
            self.enclosing_element_matching(p, |e| e.tag().is_embedded_content())
        {
            let adjacency = if place_after {
                Adjacency::AfterEnd
            } else {
                Adjacency::BeforeBegin
            };
            self.move_adjacent_to_element(p, element, adjacency);
        }
    }

    /// Shrinks a range inward to its content: the start moves right past
    /// begin units of elements that enclose the whole range, and the end
    /// moves left past their end units.
    ///
    /// This is the normalization a host's native text range performs when
    /// positioned from markup pointers — it makes a subsequent wrap nest
    /// inside an element that exactly encloses the range instead of
    /// splitting it.
    pub fn shrink_range_to_content(&mut self, range: MarkupRange) {
        loop {
            let (container, start) = self.location_of(range.start);
            let end = self.index_of(range.end);
            if start >= end {
                break;
            }
            let first = self.container(container).units[start];
            if let Unit::Begin(element) = first {
                let (_, _, element_end) = self
                    .element_units(element)
                    .expect("unit stream is well formed");
                if element_end >= end {
                    self.set_index(range.start, container, start + 1);
                    continue;
                }
            }
            let last = self.container(container).units[end - 1];
            if let Unit::End(element) = last {
                let (_, element_begin, _) = self
                    .element_units(element)
                    .expect("unit stream is well formed");
                if element_begin < start {
                    self.set_index(range.end, container, end - 1);
                    continue;
                }
            }
            break;
        }
    }

    pub(crate) fn is_balanced(&self, container: ContainerId, start: usize, end: usize) -> bool {
        let mut depth = 0_isize;
        for unit in &self.container(container).units[start..end] {
            match unit {
                Unit::Begin(_) => depth += 1,
                Unit::End(_) => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                Unit::Char(_) => {}
            }
        }
        depth == 0
    }

    // ---------------------------------------------------------------------
    // Builder conveniences for hosts (and tests) constructing content
    // without a parser.
    // ---------------------------------------------------------------------

    /// Appends a new child element at the end of `parent`'s content.
    pub fn append_element(&mut self, parent: ElementId, tag: Tag) -> ElementId {
        let p = self.create_pointer();
        self.move_adjacent_to_element(p, parent, Adjacency::BeforeEnd);
        let element = self.insert_empty_element(p, tag);
        self.release_pointer(p);
        element
    }

    /// Appends text at the end of `parent`'s content.
    pub fn append_text(&mut self, parent: ElementId, text: &str) {
        let p = self.create_pointer();
        self.move_adjacent_to_element(p, parent, Adjacency::BeforeEnd);
        self.insert_text(p, text);
        self.release_pointer(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_paragraph() -> (Document, ElementId) {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let p = doc.append_element(body, Tag::P);
        doc.append_text(p, "hello world");
        (doc, p)
    }

    #[test]
    fn insert_and_serialize() {
        let (doc, _) = doc_with_paragraph();
        assert_eq!(doc.container_markup(doc.primary_container()), "<p>hello world</p>");
    }

    #[test]
    fn pointer_gravity_across_insertion() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        doc.append_text(body, "ab");

        // Both pointers sit between 'a' and 'b'.
        let left = doc.create_pointer();
        let right = doc.create_pointer();
        doc.set_index(left, doc.primary_container(), 2);
        doc.set_index(right, doc.primary_container(), 2);
        doc.set_gravity(right, Gravity::Right);

        let at = doc.create_pointer();
        doc.set_index(at, doc.primary_container(), 2);
        doc.insert_text(at, "xy");

        assert_eq!(doc.index_of(left), 2);
        assert_eq!(doc.index_of(right), 4);
    }

    #[test]
    fn cling_pointer_unpositions_on_removal() {
        let (mut doc, p) = doc_with_paragraph();
        let inside = doc.create_pointer();
        doc.move_adjacent_to_element(inside, p, Adjacency::AfterBegin);
        let clinger = doc.create_pointer();
        doc.move_adjacent_to_element(clinger, p, Adjacency::AfterBegin);
        doc.set_cling(clinger, true);
        // Place both strictly inside the text run.
        let (c, i) = doc.location_of(inside);
        doc.set_index(inside, c, i + 3);
        doc.set_index(clinger, c, i + 3);

        let range = doc.create_range();
        doc.move_range_to_element(range, p, false);
        doc.remove_content(range);

        assert!(doc.is_positioned(inside));
        assert!(!doc.is_positioned(clinger));
    }

    #[test]
    fn remove_element_keeps_content() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let b = doc.append_element(body, Tag::B);
        doc.append_text(b, "bold");
        doc.remove_element(b);
        assert_eq!(doc.container_markup(doc.primary_container()), "bold");
    }

    #[test]
    fn split_element_clones_attributes() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let span = doc.append_element(body, Tag::Span);
        doc.element_mut(span).set_attribute("class", "x");
        doc.append_text(span, "ab");

        let p = doc.create_pointer();
        doc.move_adjacent_to_element(p, span, Adjacency::AfterBegin);
        let (c, i) = doc.location_of(p);
        doc.set_index(p, c, i + 1);
        let second = doc.split_element_at(span, p);

        assert_eq!(doc.element(second).attribute("class"), Some("x"));
        assert_eq!(
            doc.container_markup(doc.primary_container()),
            r#"<span class="x">a</span><span class="x">b</span>"#
        );
    }

    #[test]
    fn wrap_range_splits_partial_overlap() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let i = doc.append_element(body, Tag::I);
        doc.append_text(i, "ab");
        doc.append_text(body, "cd");
        // Wrap from inside the italic run to the end of "cd".
        let range = doc.create_range();
        doc.move_adjacent_to_element(range.start, i, Adjacency::AfterBegin);
        let (c, s) = doc.location_of(range.start);
        doc.set_index(range.start, c, s + 1);
        doc.move_adjacent_to_element(range.end, body, Adjacency::BeforeEnd);

        let b = doc.create_element(Tag::B);
        doc.wrap_range(range, b);
        assert_eq!(
            doc.container_markup(doc.primary_container()),
            "<i>a</i><b><i>b</i>cd</b>"
        );
    }

    #[test]
    fn split_block_for_insertion_breaks_out_at_edges() {
        let (mut doc, p) = doc_with_paragraph();
        let at_start = doc.create_pointer();
        doc.move_adjacent_to_element(at_start, p, Adjacency::AfterBegin);
        doc.split_block_for_insertion(at_start);
        let (_, begin, _) = doc.element_units(p).expect("paragraph still attached");
        assert_eq!(doc.index_of(at_start), begin);
    }

    #[test]
    fn split_block_for_insertion_splits_mid_content() {
        let (mut doc, p) = doc_with_paragraph();
        let mid = doc.create_pointer();
        doc.move_adjacent_to_element(mid, p, Adjacency::AfterBegin);
        let (c, i) = doc.location_of(mid);
        doc.set_index(mid, c, i + 5);
        doc.split_block_for_insertion(mid);
        assert_eq!(
            doc.container_markup(doc.primary_container()),
            "<p>hello</p><p> world</p>"
        );
    }

    #[test]
    fn shrink_range_resolves_boundary_crossings_inward() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let b = doc.append_element(body, Tag::B);
        doc.append_text(b, "x");

        // Start outside the element, end inside it at content end: the
        // element encloses everything up to the range end, so the start
        // moves inside.
        let range = doc.create_range();
        doc.move_adjacent_to_element(range.start, b, Adjacency::BeforeBegin);
        doc.move_adjacent_to_element(range.end, b, Adjacency::BeforeEnd);
        doc.shrink_range_to_content(range);
        assert_eq!(doc.range_text(range), "x");
        let (_, begin, _) = doc.element_units(b).expect("attached");
        assert_eq!(doc.index_of(range.start), begin + 1);

        // The symmetric case: start inside at content start, end outside.
        let range = doc.create_range();
        doc.move_adjacent_to_element(range.start, b, Adjacency::AfterBegin);
        doc.move_adjacent_to_element(range.end, b, Adjacency::AfterEnd);
        doc.shrink_range_to_content(range);
        let (_, _, end) = doc.element_units(b).expect("attached");
        assert_eq!(doc.index_of(range.end), end);
        assert_eq!(doc.range_text(range), "x");
    }

    #[test]
    fn shrink_range_leaves_partially_covered_wrappers_alone() {
        let mut doc = Document::new();
        let body = doc.body(doc.primary_container());
        let b = doc.append_element(body, Tag::B);
        doc.append_text(b, "ab");
        doc.append_text(body, "cd");

        // Range covers <b>ab</b> plus the trailing text: the bold element
        // does not enclose the whole range, so nothing moves.
        let range = doc.body_content_range(doc.primary_container());
        let before = (doc.index_of(range.start), doc.index_of(range.end));
        doc.shrink_range_to_content(range);
        assert_eq!(
            (doc.index_of(range.start), doc.index_of(range.end)),
            before
        );
    }

    #[test]
    fn copy_range_is_a_deep_copy_across_containers() {
        let mut doc = Document::new();
        let staged = doc.create_container();
        let staged_body = doc.body(staged);
        let b = doc.append_element(staged_body, Tag::B);
        doc.append_text(b, "hi");

        let source = doc.body_content_range(staged);
        let target = doc.create_pointer();
        let body = doc.body(doc.primary_container());
        doc.move_adjacent_to_element(target, body, Adjacency::AfterBegin);
        doc.copy_range(source, target);

        assert_eq!(doc.container_markup(doc.primary_container()), "<b>hi</b>");
        // Mutating the copy leaves the staged source alone.
        let copied = doc.elements_matching(doc.primary_container(), |e| *e.tag() == Tag::B)[0];
        doc.element_mut(copied).set_attribute("class", "copy");
        assert_eq!(doc.element(b).attribute("class"), None);
    }
}
