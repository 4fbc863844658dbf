// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview View 2D: the model ↔ viewport transform of a plot preview.
//!
//! [`ViewTransform`] is a uniform scale plus a translation:
//!
//! ```text
//! pixel = model * scale + origin
//! ```
//!
//! where `origin` is the viewport (device pixel) position of the model-space
//! origin. It provides:
//! - Forward and inverse point conversion.
//! - Zooming about a pivot point that stays fixed on screen.
//! - Panning in viewport space.
//! - Fitting a model-space rectangle into a viewport, with a safe reset for
//!   empty or degenerate rectangles.
//!
//! The transform never becomes singular: scales that are zero, negative or
//! not finite are rejected, and accepted scales are clamped into a
//! configurable range.
//!
//! It does **not** own any document or rendering backend.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use plotview_view2d::{FitOutcome, ViewTransform};
//!
//! let mut view = ViewTransform::new();
//! let outcome = view.fit_rect(
//!     Some(Rect::new(0.0, 0.0, 200.0, 100.0)),
//!     Size::new(800.0, 600.0),
//!     0.05,
//! );
//! assert_eq!(outcome, FitOutcome::Fitted);
//!
//! // Zoom in 2x around the cursor; the model point under it stays put.
//! let cursor = Point::new(400.0, 300.0);
//! let before = view.viewport_to_model(cursor);
//! view.zoom_about(2.0, cursor);
//! let after = view.viewport_to_model(cursor);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod transform;

pub use modes::{FitMode, FitOutcome};
pub use transform::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ViewTransform, ViewTransformDebugInfo};
