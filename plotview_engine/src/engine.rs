// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size, Vec2};
use plotview_imaging::ImagingBackend;
use plotview_units::{DEFAULT_SCALE_SPEC, TickSpacing, UnitType, resolve_tick_spacing};
use plotview_view2d::{FitOutcome, ViewTransform};

use crate::document::{LayerId, PlotDocument};
use crate::style::{DisplayFlags, Style, ViewMode};
use crate::visibility::LayerVisibility;

/// Fraction of the viewport kept free on each side by [`Engine::fit_to_viewport`].
pub const FIT_MARGIN: f64 = 0.05;

/// View and render-mode controller for one plot document.
///
/// The engine borrows its document, owns the view transform, style and layer
/// visibility, and turns all of it into imaging ops on [`Engine::render`].
/// Every operation is safe on a fresh engine without a document.
pub struct Engine<'doc> {
    document: Option<&'doc dyn PlotDocument>,
    pub(crate) view: ViewTransform,
    pub(crate) viewport: Size,
    pub(crate) style: Style,
    pub(crate) visibility: LayerVisibility,
    scale_spec: Vec<f64>,
}

impl fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("has_document", &self.document.is_some())
            .field("view", &self.view)
            .field("viewport", &self.viewport)
            .field("style", &self.style)
            .field("visibility", &self.visibility)
            .field("scale_spec", &self.scale_spec)
            .finish()
    }
}

impl Default for Engine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'doc> Engine<'doc> {
    /// Creates an engine with no document, identity view and default style.
    pub fn new() -> Self {
        Self {
            document: None,
            view: ViewTransform::new(),
            viewport: Size::ZERO,
            style: Style::default(),
            visibility: LayerVisibility::new(),
            scale_spec: DEFAULT_SCALE_SPEC.to_vec(),
        }
    }

    /// The attached document, if any.
    pub fn document(&self) -> Option<&'doc dyn PlotDocument> {
        self.document
    }

    /// Attaches or detaches a document.
    ///
    /// View, style and visibility state are kept.
    pub fn set_document(&mut self, document: Option<&'doc dyn PlotDocument>) {
        self.document = document;
    }

    /// Model-units-to-pixels multiplier.
    pub fn scale(&self) -> f64 {
        self.view.scale()
    }

    /// Sets the scale. Zero, negative and non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !(scale.is_finite() && scale > 0.0) {
            log::debug!("ignoring invalid scale {scale}");
        }
        self.view.set_scale(scale);
    }

    /// Pixel position of the model origin.
    pub fn origin(&self) -> Point {
        self.view.origin()
    }

    /// Sets the pixel position of the model origin. Non-finite points are ignored.
    pub fn set_origin(&mut self, origin: Point) {
        if !origin.is_finite() {
            log::debug!("ignoring non-finite origin {origin:?}");
        }
        self.view.set_origin(origin);
    }

    /// The view transform.
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Viewport size in device pixels.
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size in device pixels.
    ///
    /// Negative and non-finite dimensions become zero.
    pub fn resize(&mut self, width: f64, height: f64) {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        self.viewport = Size::new(sanitize(width), sanitize(height));
    }

    /// Style state.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Active view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.style.view_mode()
    }

    /// Sets the view mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.style.set_view_mode(mode);
    }

    /// Display flags.
    pub fn flags(&self) -> DisplayFlags {
        self.style.flags()
    }

    /// Whether pen-up travel is drawn.
    pub fn show_pen_up(&self) -> bool {
        self.flags().contains(DisplayFlags::SHOW_PEN_UP)
    }

    /// Shows or hides pen-up travel.
    pub fn set_show_pen_up(&mut self, show: bool) {
        self.style.set_flag(DisplayFlags::SHOW_PEN_UP, show);
    }

    /// Whether vertex markers are drawn.
    pub fn show_points(&self) -> bool {
        self.flags().contains(DisplayFlags::SHOW_POINTS)
    }

    /// Shows or hides vertex markers.
    pub fn set_show_points(&mut self, show: bool) {
        self.style.set_flag(DisplayFlags::SHOW_POINTS, show);
    }

    /// Whether rulers are drawn.
    pub fn show_rulers(&self) -> bool {
        self.flags().contains(DisplayFlags::SHOW_RULERS)
    }

    /// Shows or hides the rulers.
    pub fn set_show_rulers(&mut self, show: bool) {
        self.style.set_flag(DisplayFlags::SHOW_RULERS, show);
    }

    /// Whether the debug overlay is drawn.
    pub fn debug(&self) -> bool {
        self.flags().contains(DisplayFlags::DEBUG)
    }

    /// Shows or hides the debug overlay.
    pub fn set_debug(&mut self, debug: bool) {
        self.style.set_flag(DisplayFlags::DEBUG, debug);
    }

    /// Pen width in model units.
    pub fn pen_width(&self) -> f64 {
        self.style.pen_width()
    }

    /// Sets the pen width. Non-positive and non-finite widths are ignored.
    pub fn set_pen_width(&mut self, width: f64) {
        if !self.style.set_pen_width(width) {
            log::debug!("ignoring invalid pen width {width}");
        }
    }

    /// Pen opacity in `[0, 1]`.
    pub fn pen_opacity(&self) -> f64 {
        self.style.pen_opacity()
    }

    /// Sets the pen opacity, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_pen_opacity(&mut self, opacity: f64) {
        if !self.style.set_pen_opacity(opacity) {
            log::debug!("ignoring NaN pen opacity");
        }
    }

    /// Unit system of the rulers.
    pub fn unit_type(&self) -> UnitType {
        self.style.unit_type()
    }

    /// Sets the unit system of the rulers.
    pub fn set_unit_type(&mut self, unit: UnitType) {
        self.style.set_unit_type(unit);
    }

    /// Device pixels per logical pixel.
    pub fn pixel_factor(&self) -> f64 {
        self.style.pixel_factor()
    }

    /// Sets the pixel factor. Non-positive and non-finite values are ignored.
    pub fn set_pixel_factor(&mut self, factor: f64) {
        if !self.style.set_pixel_factor(factor) {
            log::debug!("ignoring invalid pixel factor {factor}");
        }
    }

    /// Candidate ruler tick intervals, ascending.
    pub fn scale_spec(&self) -> &[f64] {
        &self.scale_spec
    }

    /// Replaces the candidate ruler tick intervals.
    ///
    /// Non-positive and non-finite entries are dropped, the rest sorted and
    /// deduplicated. An empty result restores [`DEFAULT_SCALE_SPEC`].
    pub fn set_scale_spec(&mut self, spec: &[f64]) {
        let mut clean: Vec<f64> = spec
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .collect();
        clean.sort_by(f64::total_cmp);
        clean.dedup();
        if clean.is_empty() {
            log::debug!("empty scale spec, using the default");
            clean = DEFAULT_SCALE_SPEC.to_vec();
        }
        self.scale_spec = clean;
    }

    /// Ruler tick spacing for the current scale, unit and pixel factor.
    pub fn tick_spacing(&self) -> TickSpacing {
        resolve_tick_spacing(
            &self.scale_spec,
            self.unit_type(),
            self.scale(),
            self.pixel_factor(),
        )
    }

    /// Zooms by `factor` keeping the model point under pixel `(x, y)` fixed.
    ///
    /// Non-positive and non-finite factors are ignored.
    pub fn zoom(&mut self, factor: f64, x: f64, y: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            log::debug!("ignoring invalid zoom factor {factor}");
            return;
        }
        self.view.zoom_about(factor, Point::new(x, y));
    }

    /// Moves the view by `(dx, dy)` device pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.view.pan(Vec2::new(dx, dy));
    }

    /// Maps a viewport pixel to model coordinates.
    pub fn viewport_to_model(&self, x: f64, y: f64) -> Point {
        self.view.viewport_to_model(Point::new(x, y))
    }

    /// Maps model coordinates to a viewport pixel.
    pub fn model_to_viewport(&self, x: f64, y: f64) -> Point {
        self.view.model_to_viewport(Point::new(x, y))
    }

    /// Flips the visibility of layer `id`; unknown ids are remembered.
    pub fn toggle_layer_visibility(&mut self, id: LayerId) {
        self.visibility.toggle(id);
    }

    /// Returns whether layer `id` is visible. Layers are visible by default.
    pub fn layer_visible(&self, id: LayerId) -> bool {
        self.visibility.is_visible(id)
    }

    /// Per-layer visibility.
    pub fn visibility(&self) -> &LayerVisibility {
        &self.visibility
    }

    /// Mutable per-layer visibility.
    pub fn visibility_mut(&mut self) -> &mut LayerVisibility {
        &mut self.visibility
    }

    /// Fits the document bounds into the viewport with a [`FIT_MARGIN`] inset.
    ///
    /// Bounds cover every layer regardless of visibility. Without a
    /// document, with empty or zero-area bounds, or with an empty viewport,
    /// the view resets to scale `1.0` and origin `(0, 0)`.
    pub fn fit_to_viewport(&mut self) -> FitOutcome {
        let bounds = self.document.and_then(|doc| doc.bounds());
        let outcome = self.view.fit_rect(bounds, self.viewport, FIT_MARGIN);
        if outcome == FitOutcome::Reset {
            log::debug!(
                "fit fell back to the identity view (bounds {bounds:?}, viewport {:?})",
                self.viewport
            );
        }
        outcome
    }

    /// Draws the current view of the document into `backend`.
    ///
    /// Output depends only on engine state: rendering twice without changes
    /// emits the same ops. Every resource created here is destroyed before
    /// returning.
    pub fn render(&self, backend: &mut dyn ImagingBackend) {
        crate::render::render(self, backend);
    }
}
