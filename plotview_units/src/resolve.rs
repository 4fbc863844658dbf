// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::unit::UnitType;

/// Default ruler scale specification: a 1‑2‑5 ladder of tick intervals.
///
/// Intervals are expressed in the active [`UnitType`] and sorted ascending.
pub const DEFAULT_SCALE_SPEC: &[f64] = &[
    0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0,
    2000.0, 5000.0, 10000.0, 20000.0, 50000.0, 100000.0,
];

/// Upper bound on the on-screen distance between two major ticks, in device
/// pixels at a pixel factor of `1.0`.
pub const TARGET_TICK_SPACING_PX: f64 = 100.0;

/// Ruler tick interval chosen for a zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSpacing {
    /// Interval between major ticks, in `unit`.
    pub interval: f64,
    /// On-screen length of `interval`, in device pixels.
    pub pixels: f64,
    /// Unit system the interval is expressed in.
    pub unit: UnitType,
}

/// Picks the ruler tick interval for the given zoom level.
///
/// Returns the largest interval of `spec` whose on-screen length
/// (`interval * unit.to_model() * scale`) does not exceed
/// [`TARGET_TICK_SPACING_PX`] scaled by `pixel_factor`. When no interval is
/// short enough, the smallest one is returned.
///
/// Degenerate inputs never fail: an empty `spec` (or one without any positive
/// finite entry) falls back to [`DEFAULT_SCALE_SPEC`], and a non-positive or
/// non-finite `scale`/`pixel_factor` is treated as `1.0`.
#[must_use]
pub fn resolve_tick_spacing(
    spec: &[f64],
    unit: UnitType,
    scale: f64,
    pixel_factor: f64,
) -> TickSpacing {
    let scale = positive_or_one(scale);
    let pixel_factor = positive_or_one(pixel_factor);
    let spec = if spec.iter().copied().any(is_valid_interval) {
        spec
    } else {
        DEFAULT_SCALE_SPEC
    };

    let target = TARGET_TICK_SPACING_PX * pixel_factor;
    let px_per_unit = unit.to_model() * scale;

    let mut largest_fitting: Option<f64> = None;
    let mut smallest = f64::INFINITY;
    for interval in spec.iter().copied().filter(|i| is_valid_interval(*i)) {
        smallest = smallest.min(interval);
        if interval * px_per_unit <= target && largest_fitting.is_none_or(|best| interval > best)
        {
            largest_fitting = Some(interval);
        }
    }

    let interval = largest_fitting.unwrap_or(smallest);
    TickSpacing {
        interval,
        pixels: interval * px_per_unit,
        unit,
    }
}

fn is_valid_interval(interval: f64) -> bool {
    interval.is_finite() && interval > 0.0
}

fn positive_or_one(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}
