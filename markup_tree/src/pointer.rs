// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned pointers and ranges.
//!
//! A pointer is a location *between* two markup units of a container,
//! registered with the owning [`Document`](crate::Document). Every mutation
//! of a container's unit stream adjusts every registered pointer, so a
//! pointer stays meaningful across edits. Two policies control how a pointer
//! rides out a mutation at its exact location:
//!
//! - **Gravity** decides which side of an insertion the pointer binds to: a
//!   [`Gravity::Left`] pointer stays before content inserted at its
//!   position, a [`Gravity::Right`] pointer moves after it.
//! - **Cling** decides what happens when the content around the pointer is
//!   removed: a clinging pointer is unpositioned along with its content,
//!   a non-clinging pointer collapses to the removal site.
//!
//! Pointers of different containers never compare; comparing them is a
//! caller programming error and panics.

/// The side of an insertion a pointer binds to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gravity {
    /// Bind to the content on the left: stay before an insertion.
    #[default]
    Left,
    /// Bind to the content on the right: move after an insertion.
    Right,
}

/// A handle to a pointer registered with a [`Document`](crate::Document).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub(crate) u32);

/// A position adjacent to an element, for pointer placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Adjacency {
    /// Just before the element's begin unit (outside).
    BeforeBegin,
    /// Just after the element's begin unit (at content start).
    AfterBegin,
    /// Just before the element's end unit (at content end).
    BeforeEnd,
    /// Just after the element's end unit (outside).
    AfterEnd,
}

/// An ordered pair of pointers in the same container.
///
/// The ordering invariant (`start` ≤ `end`) is the caller's to maintain;
/// operations that consume ranges check it where it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkupRange {
    /// The left boundary.
    pub start: PointerId,
    /// The right boundary.
    pub end: PointerId,
}

pub(crate) struct PointerRecord {
    /// `None` while the pointer is unpositioned.
    pub(crate) position: Option<(u32, usize)>,
    pub(crate) gravity: Gravity,
    pub(crate) cling: bool,
}

impl PointerRecord {
    pub(crate) fn new() -> Self {
        Self {
            position: None,
            gravity: Gravity::Left,
            cling: false,
        }
    }
}
