// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Format-preserving rich content transfer between editable markup
//! documents.
//!
//! When rich text moves between two documents (paste, drag-drop,
//! cross-document copy), the destination's inherited styling is usually
//! different from the source's. A naive copy either loses the source's
//! rendered appearance or bloats the destination with redundant inline
//! styling on every element. This crate computes, per visual style
//! dimension, the *minimal* set of destination sub-ranges that need
//! explicit correction, and applies only those corrections:
//!
//! 1. the source content is normalized (visually meaningless elements
//!    dropped, unsupported tags replaced) so the trees can be walked in
//!    lockstep;
//! 2. the destination range is cleared and the source markup is copied in
//!    verbatim;
//! 3. both ranges are walked as parallel token streams — structural
//!    properties reconcile per element, and the twelve text-style
//!    dimensions are diffed per text run into [`FixupSegment`]s;
//! 4. the closed segments are applied left to right, each through its
//!    dimension's native command or minimal wrapper element.
//!
//! The sole entry point is [`FormatPreservingTransfer`] (or the
//! [`transfer_formatting`] convenience). The engine is synchronous,
//! single-threaded and not reentrant; callers own the undo-transaction
//! boundary around it.
//!
//! ## Example
//!
//! ```
//! use decant::transfer_formatting;
//! use markup_tree::{Document, Tag};
//!
//! let mut doc = Document::new();
//!
//! // Stage bold source content in its own container.
//! let staged = doc.create_container();
//! let b = doc.append_element(doc.body(staged), Tag::B);
//! doc.append_text(b, "Hello");
//! let source = doc.body_content_range(staged);
//!
//! // The destination is the (empty) editable body.
//! let destination = doc.body_content_range(doc.primary_container());
//!
//! let result = transfer_formatting(&mut doc, source, destination).unwrap();
//! assert_eq!(doc.range_text(result), "Hello");
//! // The copy carried the bold wrapper, so no corrections were needed.
//! assert_eq!(
//!     doc.container_markup(doc.primary_container()),
//!     "<b>Hello</b>"
//! );
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

mod error;
mod fixup;
mod structural;
mod text_style;
mod transfer;

pub use error::{RangeRole, TransferError, TransferErrorKind};
pub use fixup::{FixupSegment, FixupSegments};
pub use text_style::{StyleDimension, TextStyle, TextStyleVector};
pub use transfer::{
    transfer_formatting, FormatPreservingTransfer, NO_DEFAULT_DECORATORS_ATTRIBUTE,
};
