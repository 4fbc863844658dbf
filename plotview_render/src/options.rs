// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;
use plotview_engine::{
    DEFAULT_PEN_OPACITY, DEFAULT_PEN_WIDTH, Engine, LayerId, UnitType, ViewMode,
};

/// Everything [`render_image`](crate::render_image) needs besides the document.
///
/// When both `scale` and `origin` are `None` the document is fit to the
/// image; otherwise the missing one keeps its default (`1.0` or `(0, 0)`).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// How paths are styled.
    pub view_mode: ViewMode,
    /// Draw pen-up travel.
    pub show_pen_up: bool,
    /// Draw vertex markers.
    pub show_points: bool,
    /// Draw the top and left rulers.
    pub show_rulers: bool,
    /// Draw bounds and transform diagnostics.
    pub debug: bool,
    /// Pen width in model units.
    pub pen_width: f64,
    /// Pen opacity in `[0, 1]`.
    pub pen_opacity: f64,
    /// Unit system of the rulers.
    pub unit_type: UnitType,
    /// Device pixels per logical pixel.
    pub pixel_factor: f64,
    /// Fixed model-to-pixel scale.
    pub scale: Option<f64>,
    /// Fixed pixel position of the model origin.
    pub origin: Option<Point>,
    /// Layers to leave out.
    pub hidden_layers: Vec<LayerId>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            show_pen_up: false,
            show_points: false,
            show_rulers: true,
            debug: false,
            pen_width: DEFAULT_PEN_WIDTH,
            pen_opacity: DEFAULT_PEN_OPACITY,
            unit_type: UnitType::default(),
            pixel_factor: 1.0,
            scale: None,
            origin: None,
            hidden_layers: Vec::new(),
        }
    }
}

impl RenderOptions {
    /// Applies the options to `engine`.
    ///
    /// Values go through the engine setters, so invalid ones are ignored or
    /// clamped the same way. The document and viewport must already be set
    /// for fitting to take effect.
    pub fn apply(&self, engine: &mut Engine<'_>) {
        engine.set_view_mode(self.view_mode);
        engine.set_show_pen_up(self.show_pen_up);
        engine.set_show_points(self.show_points);
        engine.set_show_rulers(self.show_rulers);
        engine.set_debug(self.debug);
        engine.set_pen_width(self.pen_width);
        engine.set_pen_opacity(self.pen_opacity);
        engine.set_unit_type(self.unit_type);
        engine.set_pixel_factor(self.pixel_factor);

        let visibility = engine.visibility_mut();
        visibility.show_all();
        for &id in &self.hidden_layers {
            visibility.set_visible(id, false);
        }

        if self.scale.is_none() && self.origin.is_none() {
            engine.fit_to_viewport();
        } else {
            engine.set_scale(self.scale.unwrap_or(1.0));
            engine.set_origin(self.origin.unwrap_or(Point::ZERO));
        }
    }
}
