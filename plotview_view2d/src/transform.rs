// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::{FitMode, FitOutcome};

/// Smallest scale accepted by a new [`ViewTransform`].
pub const DEFAULT_MIN_SCALE: f64 = 1e-6;

/// Largest scale accepted by a new [`ViewTransform`].
pub const DEFAULT_MAX_SCALE: f64 = 1e6;

/// Uniform scale + translation mapping model space onto a viewport.
///
/// The mapping is `pixel = model * scale + origin`. `scale` is always finite
/// and strictly positive, so the inverse mapping is always defined.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    origin: Point,
    min_scale: f64,
    max_scale: f64,
    fit_mode: FitMode,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Creates the identity view transform.
    ///
    /// - Scale is `1.0`.
    /// - Origin is `(0, 0)`: the model origin maps to the viewport's top-left corner.
    /// - Scale is clamped to `[DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            origin: Point::ZERO,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            fit_mode: FitMode::default(),
        }
    }

    /// Returns the current model-units-to-pixels multiplier.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamping it into the configured scale range.
    ///
    /// Zero, negative and non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !is_valid_scale(scale) {
            return;
        }
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }

    /// Returns the viewport position of the model origin.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Sets the viewport position of the model origin.
    ///
    /// Non-finite points are ignored.
    pub fn set_origin(&mut self, origin: Point) {
        if origin.is_finite() {
            self.origin = origin;
        }
    }

    /// Returns the `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The provided range is normalized so that `min <= max`; limits that are
    /// not finite and positive are ignored. The current scale is clamped into
    /// the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        if !is_valid_scale(min_scale) || !is_valid_scale(max_scale) {
            return;
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.scale = self.scale.clamp(min_scale, max_scale);
    }

    /// Sets how [`ViewTransform::fit_rect`] positions the fitted rectangle.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Resets to scale `1.0` and origin `(0, 0)`.
    ///
    /// Scale limits and fit mode are kept.
    pub fn reset(&mut self) {
        self.scale = 1.0_f64.clamp(self.min_scale, self.max_scale);
        self.origin = Point::ZERO;
    }

    /// Pans the view by a delta in viewport space.
    ///
    /// Non-finite deltas, and deltas that would push the origin out of the
    /// finite range, are ignored.
    pub fn pan(&mut self, delta: Vec2) {
        let origin = self.origin + delta;
        if origin.is_finite() {
            self.origin = origin;
        }
    }

    /// Zooms by `factor` around a pivot point in viewport coordinates.
    ///
    /// The model point under `pivot` before the call stays under `pivot`
    /// afterwards. Non-positive or non-finite factors are ignored, as is a
    /// zoom whose origin would leave the finite range; the resulting scale
    /// is clamped into the scale range.
    pub fn zoom_about(&mut self, factor: f64, pivot: Point) {
        if !is_valid_scale(factor) || !pivot.is_finite() {
            return;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }

        let model_at_pivot = self.viewport_to_model(pivot);
        let origin = pivot - model_at_pivot.to_vec2() * new_scale;
        if !origin.is_finite() {
            return;
        }
        self.scale = new_scale;
        self.origin = origin;
    }

    /// Fits a model-space rectangle into a viewport of the given size,
    /// preserving aspect ratio.
    ///
    /// `margin` is the fraction of the viewport kept free on each side
    /// (clamped to `[0, 0.45]`). The same scale is used on both axes: the
    /// smaller of the two per-axis fitting scales.
    ///
    /// When `bounds` is `None`, has zero width or height, or the viewport is
    /// empty, the transform is reset to scale `1.0` and origin `(0, 0)`
    /// instead.
    pub fn fit_rect(&mut self, bounds: Option<Rect>, viewport: Size, margin: f64) -> FitOutcome {
        let margin = if margin.is_finite() {
            margin.clamp(0.0, 0.45)
        } else {
            0.0
        };
        let rect = match bounds.map(|b| b.abs()) {
            Some(r) if r.is_finite() && r.width() > 0.0 && r.height() > 0.0 => r,
            _ => {
                self.reset();
                return FitOutcome::Reset;
            }
        };
        if !viewport.is_finite() || viewport.width <= 0.0 || viewport.height <= 0.0 {
            self.reset();
            return FitOutcome::Reset;
        }

        let usable = 1.0 - 2.0 * margin;
        let sx = viewport.width * usable / rect.width();
        let sy = viewport.height * usable / rect.height();
        let scale = sx.min(sy).clamp(self.min_scale, self.max_scale);

        // Choose the origin so that either the content is centered or its
        // minimum corner sits at the margin inset.
        let origin = match self.fit_mode {
            FitMode::Center => {
                let view_center = Point::new(viewport.width * 0.5, viewport.height * 0.5);
                view_center - rect.center().to_vec2() * scale
            }
            FitMode::AlignMin => {
                let inset = Point::new(viewport.width * margin, viewport.height * margin);
                inset - rect.origin().to_vec2() * scale
            }
        };
        self.scale = scale;
        self.origin = origin;
        FitOutcome::Fitted
    }

    /// Converts a model-space point into viewport coordinates.
    #[must_use]
    pub fn model_to_viewport(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.origin.x,
            pt.y * self.scale + self.origin.y,
        )
    }

    /// Converts a viewport point into model-space coordinates.
    #[must_use]
    pub fn viewport_to_model(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.origin.x) / self.scale,
            (pt.y - self.origin.y) / self.scale,
        )
    }

    /// Converts a model-space rectangle into viewport coordinates.
    #[must_use]
    pub fn model_rect_to_viewport(&self, rect: Rect) -> Rect {
        // A positive uniform scale keeps the corners ordered.
        Rect::from_points(
            self.model_to_viewport(rect.origin()),
            self.model_to_viewport(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a viewport rectangle into model-space coordinates.
    #[must_use]
    pub fn viewport_rect_to_model(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.viewport_to_model(rect.origin()),
            self.viewport_to_model(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the model-space rectangle visible through a viewport of `size`.
    #[must_use]
    pub fn visible_model_rect(&self, size: Size) -> Rect {
        self.viewport_rect_to_model(Rect::from_origin_size(Point::ZERO, size))
    }

    /// Returns the model → viewport mapping as an affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::scale(self.scale)
    }

    /// Returns the viewport → model mapping as an affine transform.
    #[must_use]
    pub fn inverse_affine(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.origin.to_vec2())
    }

    /// Snapshot of the current transform state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            scale: self.scale,
            origin: self.origin,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            fit_mode: self.fit_mode,
        }
    }
}

fn is_valid_scale(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Debug snapshot of a [`ViewTransform`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransformDebugInfo {
    /// Current model-units-to-pixels multiplier.
    pub scale: f64,
    /// Current viewport position of the model origin.
    pub origin: Point,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Fit mode used by [`ViewTransform::fit_rect`].
    pub fit_mode: FitMode,
}
