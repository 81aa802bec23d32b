// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token-stream walking of a range.

use crate::document::{Document, Unit};
use crate::element::ElementId;
use crate::pointer::{MarkupRange, PointerId};

/// One step of a range walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// The walk entered an element's scope.
    Enter(ElementId),
    /// The walk left an element's scope.
    Exit(ElementId),
    /// The walk crossed a maximal run of text.
    Text(String),
}

impl Token {
    /// Returns `true` if `self` and `other` are structurally parallel: the
    /// same kind of token and, for elements, the same tag name.
    pub fn is_congruent_with(&self, other: &Self, doc: &Document) -> bool {
        match (self, other) {
            (Self::Enter(a), Self::Enter(b)) | (Self::Exit(a), Self::Exit(b)) => {
                doc.element(*a).tag().name() == doc.element(*b).tag().name()
            }
            (Self::Text(_), Self::Text(_)) => true,
            _ => false,
        }
    }
}

impl Document {
    /// Advances a walk cursor one token to the right, stopping at `limit`.
    ///
    /// The cursor is a collapsed-or-small range: its start is moved to its
    /// end, then its end is moved right across one begin unit, one end
    /// unit, or one maximal text run, and the crossed token is returned.
    /// After a `Some` return the cursor spans exactly the crossed token, so
    /// callers can sample styles or clone sub-ranges from it. Returns `None`
    /// once the cursor has reached `limit`.
    pub fn next_token(&mut self, cursor: MarkupRange, limit: PointerId) -> Option<Token> {
        self.move_pointer_to_pointer(cursor.start, cursor.end);
        let (container, index) = self.location_of(cursor.end);
        let limit_index = self.index_of(limit);
        if index >= limit_index {
            return None;
        }

        let unit = self.container(container).units[index];
        let token = match unit {
            Unit::Begin(e) => {
                self.set_index(cursor.end, container, index + 1);
                Token::Enter(e)
            }
            Unit::End(e) => {
                self.set_index(cursor.end, container, index + 1);
                Token::Exit(e)
            }
            Unit::Char(_) => {
                let (text, next) = {
                    let units = &self.container(container).units;
                    let mut text = String::new();
                    let mut next = index;
                    while next < limit_index {
                        match units[next] {
                            Unit::Char(ch) => {
                                text.push(ch);
                                next += 1;
                            }
                            _ => break,
                        }
                    }
                    (text, next)
                };
                self.set_index(cursor.end, container, next);
                Token::Text(text)
            }
        };
        Some(token)
    }
}
