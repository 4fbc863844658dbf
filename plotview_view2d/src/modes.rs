// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How fitted content should be positioned inside the viewport.
///
/// This mode is consulted by [`crate::ViewTransform::fit_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Center the fitted rectangle within the viewport.
    #[default]
    Center,
    /// Align the minimum corner of the fitted rectangle with the top-left
    /// corner of the margin-inset viewport.
    AlignMin,
}

/// Result of [`crate::ViewTransform::fit_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitOutcome {
    /// The rectangle was fitted into the viewport.
    Fitted,
    /// The rectangle or viewport was absent or degenerate; the transform was
    /// reset to scale `1.0` and origin `(0, 0)`.
    Reset,
}
