// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview Imaging: backend-agnostic imaging IR and backend traits.
//!
//! This crate defines the small, plain‑old‑data imaging vocabulary the
//! Plotview engine speaks when it draws a document preview, and the traits a
//! backend implements to consume it. It sits between the engine (which knows
//! about layers, view modes and rulers) and concrete renderers such as the
//! `vello_cpu` rasterizer or the recording reference backend.
//!
//! # Core concepts
//!
//! - **Resources**: opaque handles ([`PathId`], [`PaintId`]) whose lifetimes
//!   are managed via [`ResourceBackend`].
//! - **Imaging operations**: [`StateOp`] (mutate state) and [`DrawOp`]
//!   (produce pixels), combined into [`ImagingOp`] for logging.
//! - **Backends**: [`ImagingBackend`] accepts imaging ops; the
//!   [`ImagingBackendExt`] helpers scope layers around a closure.
//! - **Labels**: [`DrawOp::Text`] carries a [`TextRun`]; [`text_run_path`]
//!   turns it into stroke geometry using a built-in single-stroke font, so
//!   every backend can draw ruler labels without font files.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::{Brush, Color};
//! use plotview_imaging::{DrawOp, ImagingBackend, PaintDesc, PathDesc, ResourceBackend, StateOp};
//!
//! fn draw_diagonal(backend: &mut dyn ImagingBackend) {
//!     let paint = backend.create_paint(PaintDesc {
//!         brush: Brush::Solid(Color::BLACK),
//!     });
//!     let path = backend.create_path(PathDesc::polyline(
//!         [Point::new(0.0, 0.0), Point::new(100.0, 100.0)],
//!         false,
//!     ));
//!     backend.state(StateOp::SetPaint(paint));
//!     backend.draw(DrawOp::StrokePath(path));
//!     backend.destroy_path(path);
//!     backend.destroy_paint(paint);
//! }
//! # let _ = draw_diagonal;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod text;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
pub use peniko::BlendMode;

pub use text::{GLYPH_ADVANCE, GLYPH_HEIGHT, TextRun, has_glyph, text_run_path, text_width};

/// Identifier for a path resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Identifier for a paint resource.
///
/// Paints may be shared by many draw operations.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// Affine transform type used by the imaging IR.
pub type Affine = kurbo::Affine;

/// Stroke style used by `StateOp::SetStroke`.
///
/// This is a re-export of [`kurbo::Stroke`], which captures width, joins,
/// caps and dashes.
pub type StrokeStyle = kurbo::Stroke;

/// Parameters for a pushed compositing layer.
///
/// Draw operations inside a layer use normal (`SrcOver`) compositing within
/// that layer; `blend` and `opacity` control how the finished layer is
/// composited into its parent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerOp {
    /// Optional blend mode used when compositing this layer into its parent.
    pub blend: Option<BlendMode>,
    /// Optional opacity (0–1) applied when compositing this layer into its parent.
    pub opacity: Option<f32>,
}

impl LayerOp {
    /// A layer that composites its contents with the given opacity.
    #[inline]
    pub fn opacity(opacity: f32) -> Self {
        Self {
            blend: None,
            opacity: Some(opacity),
        }
    }

    /// Returns true if this layer has no effect at all.
    ///
    /// Backends may use this to elide pushing/popping the layer.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.blend.is_none() && self.opacity.is_none()
    }
}

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform matrix.
    SetTransform(Affine),
    /// Push a new layer onto the layer stack.
    ///
    /// Layers must be well-nested: every `PushLayer` must eventually be
    /// matched by a [`StateOp::PopLayer`].
    PushLayer(LayerOp),
    /// Pop the most recently pushed layer.
    PopLayer,
    /// Set the current paint resource.
    SetPaint(PaintId),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke the given path with the current stroke and paint.
    StrokePath(PathId),
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect {
        /// Minimum X coordinate.
        x0: f32,
        /// Minimum Y coordinate.
        y0: f32,
        /// Maximum X coordinate.
        x1: f32,
        /// Maximum Y coordinate.
        y1: f32,
    },
    /// Stroke an axis-aligned rectangle with the current stroke and paint.
    StrokeRect {
        /// Minimum X coordinate.
        x0: f32,
        /// Minimum Y coordinate.
        y0: f32,
        /// Maximum X coordinate.
        x1: f32,
        /// Maximum Y coordinate.
        y1: f32,
    },
    /// Draw a line of label text with the current paint.
    ///
    /// Backends render the outline returned by [`text_run_path`].
    Text(TextRun),
}

/// Description of a path resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Command buffer describing the path geometry.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// Builds an open or closed polyline through `points`.
    ///
    /// An empty iterator yields an empty path.
    pub fn polyline(points: impl IntoIterator<Item = Point>, close: bool) -> Self {
        let mut commands = Vec::new();
        for (i, p) in points.into_iter().enumerate() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "device-space coordinates fit comfortably in f32"
            )]
            let (x, y) = (p.x as f32, p.y as f32);
            commands.push(if i == 0 {
                PathCmd::MoveTo { x, y }
            } else {
                PathCmd::LineTo { x, y }
            });
        }
        if close && !commands.is_empty() {
            commands.push(PathCmd::Close);
        }
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Builds a path made of independent straight segments.
    pub fn segments(segments: impl IntoIterator<Item = (Point, Point)>) -> Self {
        let mut commands = Vec::new();
        for (a, b) in segments {
            commands.extend(Self::polyline([a, b], false).commands);
        }
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Returns true if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Converts the command buffer into a [`kurbo::BezPath`].
    pub fn to_bez_path(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                PathCmd::MoveTo { x, y } => path.move_to((f64::from(x), f64::from(y))),
                PathCmd::LineTo { x, y } => path.line_to((f64::from(x), f64::from(y))),
                PathCmd::Close => path.close_path(),
            }
        }
        path
    }
}

/// Simple path command enumeration.
///
/// Plot documents are polylines, so only straight segments are expressed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f32,
        /// Y coordinate of the new point.
        y: f32,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f32,
        /// Y coordinate of the line end.
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

/// Description of a paint resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// Brush used when rendering.
    ///
    /// This is a [`peniko::Brush`], so backends can directly map it onto
    /// their native paint representation.
    pub brush: Brush,
}

/// Resource lifetime interface.
///
/// Implementations must ensure that IDs remain valid and refer to the same
/// logical resource until the corresponding `destroy_*` function is called.
/// Destroying an unknown or already destroyed ID is a no-op.
pub trait ResourceBackend {
    /// Create a path resource.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Destroy a previously created path.
    fn destroy_path(&mut self, id: PathId);

    /// Create a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Destroy a previously created paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// Unified imaging operation, used for logging op streams.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Minimal imaging backend trait.
///
/// The engine draws through `&mut dyn ImagingBackend`, so this trait stays
/// object safe; closure-based helpers live in [`ImagingBackendExt`].
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Push a new layer onto the layer stack.
    ///
    /// This is equivalent to `self.state(StateOp::PushLayer(op))`.
    #[inline]
    fn layer_push(&mut self, op: LayerOp) {
        self.state(StateOp::PushLayer(op));
    }

    /// Pop the most recently pushed layer.
    ///
    /// This is equivalent to `self.state(StateOp::PopLayer)`.
    #[inline]
    fn layer_pop(&mut self) {
        self.state(StateOp::PopLayer);
    }
}

/// Convenience helpers for `ImagingBackend` callers.
pub trait ImagingBackendExt: ImagingBackend {
    /// Run `f` inside a pushed layer, popping it afterwards.
    ///
    /// Note: if `f` panics, the layer will not be popped.
    #[inline]
    fn with_layer<R>(&mut self, op: LayerOp, f: impl FnOnce(&mut Self) -> R) -> R {
        self.layer_push(op);
        let out = f(self);
        self.layer_pop();
        out
    }

    /// Run `f` inside an opacity layer.
    #[inline]
    fn with_opacity_layer<R>(&mut self, opacity: f32, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_layer(LayerOp::opacity(opacity), f)
    }
}

impl<B: ImagingBackend + ?Sized> ImagingBackendExt for B {}
