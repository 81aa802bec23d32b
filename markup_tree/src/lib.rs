// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An editable markup tree with positioned pointers and cascaded styles.
//!
//! This crate is the document model an interactive editing layer works
//! against:
//!
//! - [`Document`]: one element arena plus one or more markup *containers*,
//!   each a flattened stream of begin/end/text units. Containers are
//!   independently rooted trees; content copies across them, pointers never
//!   compare across them.
//! - [`PointerId`] / [`MarkupRange`]: registered positions with
//!   [`Gravity`] and cling policies, auto-adjusted by every mutation.
//! - [`Token`] walking, the [`computed`](ComputedTextStyle) /
//!   [cascaded](Document::cascaded_css) style queries, and the native
//!   [`Command`] set, which together are the surface the transfer engine in
//!   the `decant` crate is built on.
//!
//! There is no parser here: markup parsing and tokenizing belong to the
//! host. Documents are constructed through the builder API
//! ([`Document::append_element`], [`Document::append_text`], the pointer
//! and range operations) and serialized with [`Document::container_markup`]
//! for diagnostics.
//!
//! ## Example
//!
//! ```
//! use markup_tree::{Document, Tag};
//!
//! let mut doc = Document::new();
//! let body = doc.body(doc.primary_container());
//! let p = doc.append_element(body, Tag::P);
//! doc.append_text(p, "hello");
//! assert_eq!(doc.container_markup(doc.primary_container()), "<p>hello</p>");
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

pub mod css;

mod commands;
mod computed;
mod document;
mod element;
mod mutate;
mod pointer;
mod serialize;
mod tag;
mod walk;

pub use commands::{Command, CommandValue};
pub use computed::{ComputedTextStyle, LINK_COLOR};
pub use document::{ContainerId, Document};
pub use element::{Element, ElementId};
pub use pointer::{Adjacency, Gravity, MarkupRange, PointerId};
pub use tag::Tag;
pub use walk::Token;
