// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed CSS vocabulary: properties, values and inline declaration sets.
//!
//! There is deliberately no string parser here — markup parsing and
//! tokenizing belong to the host. Styles are built and queried through the
//! typed API.

mod declaration;
mod property;
mod value;

pub use declaration::{CssDeclaration, InlineStyle};
pub use property::CssProperty;
pub use value::{CssValue, Length, LengthUnit, Rgba};
