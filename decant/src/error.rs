// Copyright 2026 the Decant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which of the two transfer ranges an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeRole {
    /// The range content is transferred from.
    Source,
    /// The range content is transferred into.
    Destination,
}

/// Rich error type for transfer precondition violations.
///
/// These are caller programming errors — a transfer constructed from valid
/// ranges does not fail, it degrades (formatting fidelity is best-effort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferError {
    /// The non-exhaustive category describing this error.
    kind: TransferErrorKind,

    /// Which range violated the precondition.
    role: RangeRole,
}

impl TransferError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> TransferErrorKind {
        self.kind
    }

    /// The range the precondition was violated on.
    pub fn role(&self) -> RangeRole {
        self.role
    }

    pub(crate) fn unpositioned(role: RangeRole) -> Self {
        Self {
            kind: TransferErrorKind::UnpositionedRange,
            role,
        }
    }

    pub(crate) fn inverted(role: RangeRole) -> Self {
        Self {
            kind: TransferErrorKind::InvertedRange,
            role,
        }
    }
}

impl core::fmt::Display for TransferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let role = match self.role {
            RangeRole::Source => "source",
            RangeRole::Destination => "destination",
        };
        match self.kind {
            TransferErrorKind::UnpositionedRange => {
                write!(f, "{role} range is not positioned in a single container")
            }
            TransferErrorKind::InvertedRange => {
                write!(f, "{role} range start is after its end")
            }
        }
    }
}

impl core::error::Error for TransferError {}

/// The non-exhaustive category of a [`TransferError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransferErrorKind {
    /// A boundary pointer was unpositioned, or the range's boundaries were
    /// in different containers.
    UnpositionedRange,

    /// The range had start > end.
    InvertedRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_range() {
        let err = TransferError::inverted(RangeRole::Destination);
        assert_eq!(err.kind(), TransferErrorKind::InvertedRange);
        assert!(err.to_string().contains("destination"));
    }
}
