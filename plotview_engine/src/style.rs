// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render styling: view modes, display flags, colors and sizes.

use peniko::Color;
use plotview_units::UnitType;

use crate::document::LayerId;

/// Default pen width, in model units.
pub const DEFAULT_PEN_WIDTH: f64 = 1.1;

/// Default pen opacity.
pub const DEFAULT_PEN_OPACITY: f64 = 0.8;

/// Stroke width of the outline modes, in device pixels at pixel factor 1.
pub const OUTLINE_WIDTH_PX: f64 = 1.0;

/// Stroke width of pen-up travel, in device pixels at pixel factor 1.
pub const PEN_UP_WIDTH_PX: f64 = 0.5;

/// Dash and gap length of pen-up travel, in device pixels at pixel factor 1.
pub const PEN_UP_DASH_PX: f64 = 4.0;

/// Side of the square vertex markers, in device pixels at pixel factor 1.
pub const POINT_SIZE_PX: f64 = 3.0;

/// Thickness of the ruler bands, in device pixels at pixel factor 1.
pub const RULER_THICKNESS_PX: f64 = 24.0;

/// Cap height of ruler and debug labels, in device pixels at pixel factor 1.
pub const LABEL_SIZE_PX: f64 = 6.0;

/// Canvas background.
pub const BACKGROUND_COLOR: Color = Color::WHITE;

/// Stroke color of [`ViewMode::Outline`].
pub const OUTLINE_COLOR: Color = Color::BLACK;

/// Half-transparent black used for pen-up travel.
pub const PEN_UP_COLOR: Color = Color::from_rgba8(0, 0, 0, 128);

/// Ruler band fill.
pub const RULER_BACKGROUND_COLOR: Color = Color::from_rgba8(235, 235, 235, 255);

/// Ruler ticks, borders and labels.
pub const RULER_INK_COLOR: Color = Color::from_rgba8(80, 80, 80, 255);

/// Debug overlay color.
pub const DEBUG_COLOR: Color = Color::from_rgba8(255, 0, 128, 255);

/// Layer colors used when a layer has none of its own, indexed by layer id.
///
/// Blue, green, red, cyan, lime, magenta, yellow, black.
pub const LAYER_PALETTE: [Color; 8] = [
    Color::from_rgba8(0, 0, 255, 255),
    Color::from_rgba8(0, 128, 0, 255),
    Color::from_rgba8(255, 0, 0, 255),
    Color::from_rgba8(0, 191, 191, 255),
    Color::from_rgba8(0, 255, 0, 255),
    Color::from_rgba8(191, 0, 191, 255),
    Color::from_rgba8(191, 191, 0, 255),
    Color::from_rgba8(0, 0, 0, 255),
];

/// Palette color of a layer without an explicit color.
pub fn palette_color(id: LayerId) -> Color {
    LAYER_PALETTE[id as usize % LAYER_PALETTE.len()]
}

/// How document paths are styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Thin black wireframe.
    Outline,
    /// Thin wireframe in layer colors.
    OutlineColorful,
    /// Simulated pen strokes: layer colors, pen width and pen opacity.
    #[default]
    Preview,
}

impl ViewMode {
    /// Every view mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Outline, Self::OutlineColorful, Self::Preview];
}

bitflags::bitflags! {
    /// Boolean display options.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DisplayFlags: u8 {
        /// Draw a marker at every stroke vertex.
        const SHOW_POINTS = 0b0000_0001;
        /// Draw pen-up travel.
        const SHOW_PEN_UP = 0b0000_0010;
        /// Draw the top and left rulers.
        const SHOW_RULERS = 0b0000_0100;
        /// Draw bounds and transform diagnostics.
        const DEBUG       = 0b0000_1000;
    }
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self::SHOW_RULERS
    }
}

/// Styling state of an engine.
///
/// Setters sanitize their input so no NaN or negative size reaches a stroke;
/// they return `false` when a value was rejected outright.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    view_mode: ViewMode,
    flags: DisplayFlags,
    pen_width: f64,
    pen_opacity: f64,
    unit_type: UnitType,
    pixel_factor: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            flags: DisplayFlags::default(),
            pen_width: DEFAULT_PEN_WIDTH,
            pen_opacity: DEFAULT_PEN_OPACITY,
            unit_type: UnitType::default(),
            pixel_factor: 1.0,
        }
    }
}

impl Style {
    /// Active view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Sets the view mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Display flags.
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Turns the given flags on or off.
    pub fn set_flag(&mut self, flag: DisplayFlags, on: bool) {
        self.flags.set(flag, on);
    }

    /// Pen width in model units.
    pub fn pen_width(&self) -> f64 {
        self.pen_width
    }

    /// Sets the pen width. Non-positive and non-finite widths are rejected.
    pub fn set_pen_width(&mut self, width: f64) -> bool {
        if width.is_finite() && width > 0.0 {
            self.pen_width = width;
            true
        } else {
            false
        }
    }

    /// Pen opacity in `[0, 1]`.
    pub fn pen_opacity(&self) -> f64 {
        self.pen_opacity
    }

    /// Sets the pen opacity, clamped to `[0, 1]`. NaN is rejected.
    pub fn set_pen_opacity(&mut self, opacity: f64) -> bool {
        if opacity.is_nan() {
            return false;
        }
        self.pen_opacity = opacity.clamp(0.0, 1.0);
        true
    }

    /// Unit system of the rulers.
    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    /// Sets the unit system of the rulers.
    pub fn set_unit_type(&mut self, unit: UnitType) {
        self.unit_type = unit;
    }

    /// Device pixels per logical pixel.
    pub fn pixel_factor(&self) -> f64 {
        self.pixel_factor
    }

    /// Sets the pixel factor. Non-positive and non-finite values are rejected.
    pub fn set_pixel_factor(&mut self, factor: f64) -> bool {
        if factor.is_finite() && factor > 0.0 {
            self.pixel_factor = factor;
            true
        } else {
            false
        }
    }
}
