// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview Engine: view and render-mode control for layered plotter documents.
//!
//! An [`Engine`] borrows a [`PlotDocument`] (layers of polylines in CSS pixel
//! model units) and owns everything needed to preview it:
//!
//! - a [`ViewTransform`] driven by [`Engine::zoom`], [`Engine::pan`] and
//!   [`Engine::fit_to_viewport`],
//! - a [`Style`]: [`ViewMode`], [`DisplayFlags`], pen width and opacity,
//!   ruler [`UnitType`] and pixel factor,
//! - per-layer [`LayerVisibility`].
//!
//! [`Engine::render`] is a pure function of that state. It draws through any
//! [`plotview_imaging::ImagingBackend`], so the same engine feeds a CPU
//! rasterizer or a recording backend in tests.
//!
//! Invalid input never fails: it is clamped or ignored and logged at `debug`
//! level through the [`log`] facade.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use plotview_engine::{Document, Engine, Layer, ViewMode};
//!
//! let doc = Document::new().with_layer(
//!     Layer::new(1).with_stroke([Point::new(0.0, 0.0), Point::new(100.0, 50.0)]),
//! );
//!
//! let mut engine = Engine::new();
//! engine.set_document(Some(&doc));
//! engine.resize(800.0, 600.0);
//! engine.fit_to_viewport();
//! engine.set_view_mode(ViewMode::OutlineColorful);
//!
//! // Zoom in around the cursor; the model point under it stays put.
//! let under_cursor = engine.viewport_to_model(400.0, 300.0);
//! engine.zoom(2.0, 400.0, 300.0);
//! let after = engine.viewport_to_model(400.0, 300.0);
//! assert!((under_cursor - after).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod document;
mod engine;
mod render;
mod style;
mod visibility;

pub use document::{Document, Layer, LayerId, PathKind, PathRef, PlotDocument};
pub use engine::{Engine, FIT_MARGIN};
pub use style::{
    BACKGROUND_COLOR, DEBUG_COLOR, DEFAULT_PEN_OPACITY, DEFAULT_PEN_WIDTH, DisplayFlags,
    LABEL_SIZE_PX, LAYER_PALETTE, OUTLINE_COLOR, OUTLINE_WIDTH_PX, PEN_UP_COLOR, PEN_UP_DASH_PX,
    PEN_UP_WIDTH_PX, POINT_SIZE_PX, RULER_BACKGROUND_COLOR, RULER_INK_COLOR, RULER_THICKNESS_PX,
    Style, ViewMode, palette_color,
};
pub use visibility::LayerVisibility;

pub use plotview_units::{DEFAULT_SCALE_SPEC, TARGET_TICK_SPACING_PX, TickSpacing, UnitType};
pub use plotview_view2d::{FitOutcome, ViewTransform};
