// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Model units (CSS pixels) per inch.
pub const PX_PER_INCH: f64 = 96.0;

/// Model units (CSS pixels) per millimetre.
pub const PX_PER_MM: f64 = PX_PER_INCH / 25.4;

/// Unit system used to label rulers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnitType {
    /// Plain model units (CSS pixels).
    Pixels,
    /// Millimetres.
    #[default]
    Metric,
    /// Inches.
    Imperial,
}

impl UnitType {
    /// All unit systems, in declaration order.
    pub const ALL: [Self; 3] = [Self::Pixels, Self::Metric, Self::Imperial];

    /// Returns how many model units one unit of this system spans.
    #[must_use]
    pub const fn to_model(self) -> f64 {
        match self {
            Self::Pixels => 1.0,
            Self::Metric => PX_PER_MM,
            Self::Imperial => PX_PER_INCH,
        }
    }

    /// Short suffix used on ruler labels.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Metric => "mm",
            Self::Imperial => "in",
        }
    }
}
