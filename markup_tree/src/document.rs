// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;

use crate::computed::ComputedTextStyle;
use crate::element::{Element, ElementId};
use crate::pointer::{Adjacency, Gravity, MarkupRange, PointerId, PointerRecord};
use crate::tag::Tag;

/// A handle to a markup container within a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(pub(crate) u32);

/// One markup unit of a container's flattened stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Unit {
    Begin(ElementId),
    End(ElementId),
    Char(char),
}

pub(crate) struct Container {
    pub(crate) units: Vec<Unit>,
    pub(crate) body: ElementId,
}

/// The root context for editable markup: an element arena, registered
/// pointers, and one or more markup containers sharing both.
///
/// A container is a flattened markup stream (begin unit, end unit, or one
/// character of text). The primary container is the editable body; further
/// containers hold staged content such as a paste source. Content can be
/// copied between containers of the same document (this is the
/// "cross-document copy" capability — each container is an independently
/// rooted tree), but pointers never compare across containers.
pub struct Document {
    pub(crate) containers: Vec<Container>,
    pub(crate) elements: Vec<Element>,
    pub(crate) pointers: Vec<PointerRecord>,
    pub(crate) default_style: ComputedTextStyle,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Document")
            .field("containers", &self.containers.len())
            .field("elements", &self.elements.len())
            .field("pointers", &self.pointers.len())
            .field("default_style", &self.default_style)
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document with a primary (editable) container and the
    /// built-in default text style.
    pub fn new() -> Self {
        Self::with_default_style(ComputedTextStyle::default())
    }

    /// Creates a document whose ambient text style at the root is `style`.
    ///
    /// This is the style every cascade query bottoms out at; it stands in
    /// for the host page's surrounding styling.
    pub fn with_default_style(style: ComputedTextStyle) -> Self {
        let mut doc = Self {
            containers: Vec::new(),
            elements: Vec::new(),
            pointers: Vec::new(),
            default_style: style,
        };
        doc.create_container();
        doc
    }

    /// The ambient text style cascade queries bottom out at.
    pub fn default_style(&self) -> &ComputedTextStyle {
        &self.default_style
    }

    /// The primary (editable) container.
    pub fn primary_container(&self) -> ContainerId {
        ContainerId(0)
    }

    /// Creates a new, empty container (a separately rooted tree used for
    /// staged content).
    pub fn create_container(&mut self) -> ContainerId {
        let body = self.create_element(Tag::Body);
        let id = ContainerId(u32::try_from(self.containers.len()).expect("container count overflow"));
        self.containers.push(Container {
            units: vec![Unit::Begin(body), Unit::End(body)],
            body,
        });
        id
    }

    /// Returns the body element of `container`.
    pub fn body(&self, container: ContainerId) -> ElementId {
        self.container(container).body
    }

    pub(crate) fn container(&self, id: ContainerId) -> &Container {
        &self.containers[id.0 as usize]
    }

    // ---------------------------------------------------------------------
    // Elements
    // ---------------------------------------------------------------------

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: Tag) -> ElementId {
        let id = ElementId(u32::try_from(self.elements.len()).expect("element count overflow"));
        self.elements.push(Element::new(tag));
        id
    }

    /// Returns the element record for `id`.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0 as usize]
    }

    /// Returns the element record for `id`, mutably.
    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0 as usize]
    }

    /// Finds the container and begin/end unit indices of an attached
    /// element.
    pub(crate) fn element_units(&self, id: ElementId) -> Option<(ContainerId, usize, usize)> {
        for (ci, container) in self.containers.iter().enumerate() {
            let mut begin = None;
            for (i, unit) in container.units.iter().enumerate() {
                match unit {
                    Unit::Begin(e) if *e == id => begin = Some(i),
                    Unit::End(e) if *e == id => {
                        let begin = begin?;
                        return Some((ContainerId(u32::try_from(ci).expect("container index overflow")), begin, i));
                    }
                    _ => {}
                }
            }
        }
        None
    }

    /// Returns the parent element of an attached element, or `None` for a
    /// body or detached element.
    pub fn parent_element(&self, id: ElementId) -> Option<ElementId> {
        let (container, begin, _) = self.element_units(id)?;
        self.enclosing_at(container, begin).last().copied()
    }

    /// Returns every attached element of `container` (in document order)
    /// for which `predicate` holds.
    pub fn elements_matching(
        &self,
        container: ContainerId,
        predicate: impl Fn(&Element) -> bool,
    ) -> Vec<ElementId> {
        self.container(container)
            .units
            .iter()
            .filter_map(|unit| match unit {
                Unit::Begin(e) if predicate(self.element(*e)) => Some(*e),
                _ => None,
            })
            .collect()
    }

    // ---------------------------------------------------------------------
    // Pointers
    // ---------------------------------------------------------------------

    /// Creates an unpositioned pointer with [`Gravity::Left`] and cling off.
    pub fn create_pointer(&mut self) -> PointerId {
        let id = PointerId(u32::try_from(self.pointers.len()).expect("pointer count overflow"));
        self.pointers.push(PointerRecord::new());
        id
    }

    /// Returns `true` if the pointer is positioned in some container.
    pub fn is_positioned(&self, p: PointerId) -> bool {
        self.record(p).position.is_some()
    }

    /// Returns the container a positioned pointer lives in.
    pub fn pointer_container(&self, p: PointerId) -> Option<ContainerId> {
        self.record(p).position.map(|(c, _)| ContainerId(c))
    }

    /// Returns the pointer's gravity.
    pub fn gravity(&self, p: PointerId) -> Gravity {
        self.record(p).gravity
    }

    /// Sets the pointer's gravity.
    pub fn set_gravity(&mut self, p: PointerId, gravity: Gravity) {
        self.record_mut(p).gravity = gravity;
    }

    /// Returns the pointer's cling flag.
    pub fn cling(&self, p: PointerId) -> bool {
        self.record(p).cling
    }

    /// Sets the pointer's cling flag.
    pub fn set_cling(&mut self, p: PointerId, cling: bool) {
        self.record_mut(p).cling = cling;
    }

    /// Moves `p` to the position of `other`.
    ///
    /// # Panics
    ///
    /// If `other` is unpositioned.
    pub fn move_pointer_to_pointer(&mut self, p: PointerId, other: PointerId) {
        let position = self.record(other).position.expect("source pointer must be positioned");
        self.record_mut(p).position = Some(position);
    }

    /// Positions `p` adjacent to an attached element.
    ///
    /// # Panics
    ///
    /// If `element` is not attached to any container.
    pub fn move_adjacent_to_element(
        &mut self,
        p: PointerId,
        element: ElementId,
        adjacency: Adjacency,
    ) {
        let (container, begin, end) = self
            .element_units(element)
            .expect("element must be attached to a container");
        let index = match adjacency {
            Adjacency::BeforeBegin => begin,
            Adjacency::AfterBegin => begin + 1,
            Adjacency::BeforeEnd => end,
            Adjacency::AfterEnd => end + 1,
        };
        self.record_mut(p).position = Some((container.0, index));
    }

    /// Compares two positioned pointers of the same container.
    ///
    /// # Panics
    ///
    /// If either pointer is unpositioned, or the pointers live in different
    /// containers (positions of different trees are never comparable).
    pub fn compare_pointers(&self, a: PointerId, b: PointerId) -> Ordering {
        let (ca, ia) = self.record(a).position.expect("left pointer must be positioned");
        let (cb, ib) = self.record(b).position.expect("right pointer must be positioned");
        assert_eq!(ca, cb, "pointers of different containers are not comparable");
        ia.cmp(&ib)
    }

    /// Moves a positioned pointer right by `count` units (a begin unit, an
    /// end unit, or one character of text each), clamped to the container
    /// end.
    pub fn move_pointer_right(&mut self, p: PointerId, count: usize) {
        let (container, index) = self.location_of(p);
        let len = self.container(container).units.len();
        self.set_index(p, container, (index + count).min(len));
    }

    /// Releases a pointer so later splices no longer track it.
    ///
    /// The handle must not be used afterwards.
    pub fn release_pointer(&mut self, p: PointerId) {
        let record = self.record_mut(p);
        record.position = None;
    }

    pub(crate) fn record(&self, p: PointerId) -> &PointerRecord {
        &self.pointers[p.0 as usize]
    }

    pub(crate) fn record_mut(&mut self, p: PointerId) -> &mut PointerRecord {
        &mut self.pointers[p.0 as usize]
    }

    pub(crate) fn index_of(&self, p: PointerId) -> usize {
        self.record(p)
            .position
            .expect("pointer must be positioned")
            .1
    }

    pub(crate) fn location_of(&self, p: PointerId) -> (ContainerId, usize) {
        let (c, i) = self.record(p).position.expect("pointer must be positioned");
        (ContainerId(c), i)
    }

    pub(crate) fn set_index(&mut self, p: PointerId, container: ContainerId, index: usize) {
        self.record_mut(p).position = Some((container.0, index));
    }

    // ---------------------------------------------------------------------
    // Ranges
    // ---------------------------------------------------------------------

    /// Creates a range of two fresh, unpositioned pointers.
    pub fn create_range(&mut self) -> MarkupRange {
        let start = self.create_pointer();
        let end = self.create_pointer();
        MarkupRange { start, end }
    }

    /// Creates a collapsed range positioned at `p`.
    pub fn create_range_at(&mut self, p: PointerId) -> MarkupRange {
        let range = self.create_range();
        self.move_pointer_to_pointer(range.start, p);
        self.move_pointer_to_pointer(range.end, p);
        range
    }

    /// Creates a new range at the same positions as `range`, copying each
    /// boundary's gravity and cling.
    pub fn clone_range(&mut self, range: MarkupRange) -> MarkupRange {
        let clone = self.create_range();
        for (from, to) in [(range.start, clone.start), (range.end, clone.end)] {
            let position = self.record(from).position;
            let gravity = self.gravity(from);
            let cling = self.cling(from);
            let record = self.record_mut(to);
            record.position = position;
            record.gravity = gravity;
            record.cling = cling;
        }
        clone
    }

    /// Releases both of a range's pointers.
    pub fn release_range(&mut self, range: MarkupRange) {
        self.release_pointer(range.start);
        self.release_pointer(range.end);
    }

    /// Returns `true` if both boundaries are positioned, in the same
    /// container.
    pub fn range_is_positioned(&self, range: MarkupRange) -> bool {
        match (
            self.record(range.start).position,
            self.record(range.end).position,
        ) {
            (Some((ca, _)), Some((cb, _))) => ca == cb,
            _ => false,
        }
    }

    /// Collapses the range to one of its boundaries.
    pub fn collapse_range(&mut self, range: MarkupRange, to_start: bool) {
        if to_start {
            self.move_pointer_to_pointer(range.end, range.start);
        } else {
            self.move_pointer_to_pointer(range.start, range.end);
        }
    }

    /// Positions the range around an attached element: outside its begin and
    /// end units when `outside` is `true`, or around its content otherwise.
    pub fn move_range_to_element(&mut self, range: MarkupRange, element: ElementId, outside: bool) {
        if outside {
            self.move_adjacent_to_element(range.start, element, Adjacency::BeforeBegin);
            self.move_adjacent_to_element(range.end, element, Adjacency::AfterEnd);
        } else {
            self.move_adjacent_to_element(range.start, element, Adjacency::AfterBegin);
            self.move_adjacent_to_element(range.end, element, Adjacency::BeforeEnd);
        }
    }

    /// Returns a range spanning the content of `container`'s body.
    ///
    /// The returned range has start gravity [`Gravity::Left`] and end gravity
    /// [`Gravity::Right`], so it keeps spanning content inserted at either
    /// edge.
    pub fn body_content_range(&mut self, container: ContainerId) -> MarkupRange {
        let body = self.body(container);
        let range = self.create_range();
        self.move_range_to_element(range, body, false);
        self.set_gravity(range.start, Gravity::Left);
        self.set_gravity(range.end, Gravity::Right);
        range
    }

    /// Returns `true` if no units lie between the range's boundaries.
    pub fn range_is_empty(&self, range: MarkupRange) -> bool {
        self.index_of(range.start) == self.index_of(range.end)
    }

    /// Extracts the text content between the range's boundaries.
    pub fn range_text(&self, range: MarkupRange) -> String {
        let (container, start) = self.location_of(range.start);
        let end = self.index_of(range.end);
        self.container(container).units[start..end]
            .iter()
            .filter_map(|unit| match unit {
                Unit::Char(ch) => Some(*ch),
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if any element whose begin unit lies inside the range
    /// satisfies `predicate`.
    pub fn range_contains_element_matching(
        &self,
        range: MarkupRange,
        predicate: impl Fn(&Element) -> bool,
    ) -> bool {
        let (container, start) = self.location_of(range.start);
        let end = self.index_of(range.end);
        self.container(container).units[start..end]
            .iter()
            .any(|unit| matches!(unit, Unit::Begin(e) if predicate(self.element(*e))))
    }

    /// Returns the elements whose begin unit lies inside the range and which
    /// satisfy `predicate`, in document order.
    pub fn elements_in_range(
        &self,
        range: MarkupRange,
        predicate: impl Fn(&Element) -> bool,
    ) -> Vec<ElementId> {
        let (container, start) = self.location_of(range.start);
        let end = self.index_of(range.end);
        self.container(container).units[start..end]
            .iter()
            .filter_map(|unit| match unit {
                Unit::Begin(e) if predicate(self.element(*e)) => Some(*e),
                _ => None,
            })
            .collect()
    }

    // ---------------------------------------------------------------------
    // Enclosing scopes
    // ---------------------------------------------------------------------

    /// Returns the elements enclosing a pointer, outermost first.
    pub fn enclosing_elements(&self, p: PointerId) -> Vec<ElementId> {
        let (container, index) = self.location_of(p);
        self.enclosing_at(container, index)
    }

    /// Returns the innermost element enclosing `p` that satisfies
    /// `predicate`.
    pub fn enclosing_element_matching(
        &self,
        p: PointerId,
        predicate: impl Fn(&Element) -> bool,
    ) -> Option<ElementId> {
        self.enclosing_elements(p)
            .into_iter()
            .rev()
            .find(|e| predicate(self.element(*e)))
    }

    pub(crate) fn enclosing_at(&self, container: ContainerId, index: usize) -> Vec<ElementId> {
        let mut stack = Vec::new();
        for unit in &self.container(container).units[..index] {
            match unit {
                Unit::Begin(e) => stack.push(*e),
                Unit::End(_) => {
                    stack.pop();
                }
                Unit::Char(_) => {}
            }
        }
        stack
    }

    // ---------------------------------------------------------------------
    // The splice primitive
    // ---------------------------------------------------------------------

    /// Replaces `start..end` of a container's unit stream and adjusts every
    /// registered pointer.
    ///
    /// Pointer adjustment: pointers before the region are unaffected and
    /// pointers after shift by the length delta. A pointer at the region
    /// boundary follows its gravity for a pure insertion and otherwise stays
    /// put relative to the surviving content. A pointer strictly inside the
    /// removed region is unpositioned if it clings (it belonged to the
    /// removed content) and collapses to the gravity-appropriate edge of the
    /// replacement otherwise.
    pub(crate) fn splice(
        &mut self,
        container: ContainerId,
        start: usize,
        end: usize,
        replacement: &[Unit],
    ) {
        debug_assert!(start <= end, "splice range inverted");
        let new_len = replacement.len();
        {
            let units = &mut self.containers[container.0 as usize].units;
            debug_assert!(end <= units.len(), "splice range out of bounds");
            units.splice(start..end, replacement.iter().copied());
        }

        let removed = end - start;
        for record in &mut self.pointers {
            let Some((c, index)) = record.position else {
                continue;
            };
            if c != container.0 {
                continue;
            }
            let adjusted = if index < start {
                index
            } else if index > end {
                index - removed + new_len
            } else if removed == 0 {
                // Pure insertion at the pointer's position: gravity decides.
                match record.gravity {
                    Gravity::Left => start,
                    Gravity::Right => start + new_len,
                }
            } else if index == start {
                start
            } else if index == end {
                start + new_len
            } else {
                // Strictly inside the removed region.
                if record.cling {
                    record.position = None;
                    continue;
                }
                match record.gravity {
                    Gravity::Left => start,
                    Gravity::Right => start + new_len,
                }
            };
            record.position = Some((c, adjusted));
        }
    }
}
