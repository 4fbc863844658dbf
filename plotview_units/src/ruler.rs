// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::resolve::TickSpacing;

/// Maximum number of major ticks produced for a single ruler.
pub const MAX_TICKS: usize = 1000;

/// Major ticks closer than this many device pixels leave the ruler blank.
pub const MIN_MAJOR_SPACING_PX: f64 = 8.0;

/// Minor ticks closer than this many device pixels are omitted.
pub const MIN_MINOR_SPACING_PX: f64 = 4.0;

/// A labeled major tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Position along the ruler axis, in device pixels.
    pub position: f64,
    /// Value at the tick, in the unit of the [`TickSpacing`].
    pub value: f64,
}

/// Tick positions along one ruler axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RulerTicks {
    /// Major ticks, ascending by position.
    pub major: Vec<Tick>,
    /// Minor tick positions in device pixels, ascending.
    pub minor: Vec<f64>,
}

/// Lays out ruler ticks inside the pixel `span` of one axis.
///
/// `origin_px` is the device position of the model origin along the axis
/// (the matching component of the view transform origin). Values grow in the
/// direction of increasing pixel coordinates.
///
/// When one interval is shorter than [`MIN_MAJOR_SPACING_PX`] no ticks are
/// produced at all; this happens when the zoom level is beyond the range of
/// the scale specification.
#[must_use]
pub fn layout_ruler(span: Range<f64>, origin_px: f64, spacing: &TickSpacing) -> RulerTicks {
    let mut ticks = RulerTicks::default();
    let step_px = spacing.pixels;
    if !(step_px.is_finite() && step_px >= MIN_MAJOR_SPACING_PX && spacing.interval > 0.0)
        || !origin_px.is_finite()
        || span.end <= span.start
    {
        return ticks;
    }

    let first = libm::ceil((span.start - origin_px) / step_px);
    let last = libm::floor((span.end - origin_px) / step_px);
    if !(first.is_finite() && last.is_finite()) {
        return ticks;
    }

    let mut k = first;
    while k <= last && ticks.major.len() < MAX_TICKS {
        ticks.major.push(Tick {
            position: origin_px + k * step_px,
            value: k * spacing.interval,
        });
        k += 1.0;
    }

    let subdivisions = minor_subdivisions(spacing.interval);
    let minor_px = step_px / f64::from(subdivisions);
    if minor_px < MIN_MINOR_SPACING_PX {
        return ticks;
    }
    // Minor ticks also fill the partial intervals before the first and after
    // the last major tick.
    let mut k = first - 1.0;
    let mut emitted = 0;
    while k <= last && emitted < MAX_TICKS {
        let base = origin_px + k * step_px;
        for m in 1..subdivisions {
            let position = base + f64::from(m) * minor_px;
            if position >= span.start && position <= span.end {
                ticks.minor.push(position);
            }
        }
        emitted += 1;
        k += 1.0;
    }
    ticks
}

/// Number of minor subdivisions between two major ticks.
///
/// Intervals with a mantissa of 2 are split in four, all others in five, so
/// minor ticks land on round values.
#[must_use]
pub fn minor_subdivisions(interval: f64) -> u32 {
    if !(interval.is_finite() && interval > 0.0) {
        return 5;
    }
    let mut mantissa = interval;
    while mantissa >= 10.0 {
        mantissa /= 10.0;
    }
    while mantissa < 1.0 {
        mantissa *= 10.0;
    }
    if (mantissa - 2.0).abs() < 1e-6 { 4 } else { 5 }
}

/// Formats a tick value with as many decimals as `interval` requires.
///
/// Multiples of the interval accumulate float noise (`3 * 0.1`); the label
/// is rounded to the precision of the interval so rulers read `0.3`.
#[must_use]
pub fn format_tick_label(value: f64, interval: f64) -> String {
    let mut decimals = 0_usize;
    if interval.is_finite() && interval > 0.0 {
        let mut scaled = interval;
        while decimals < 6 && (scaled - libm::round(scaled)).abs() > 1e-9 * scaled.max(1.0) {
            scaled *= 10.0;
            decimals += 1;
        }
    }
    // Avoid printing "-0".
    let value = if value.abs() < interval.abs() * 1e-9 {
        0.0
    } else {
        value
    };
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitType;

    fn spacing(interval: f64, pixels: f64) -> TickSpacing {
        TickSpacing {
            interval,
            pixels,
            unit: UnitType::Pixels,
        }
    }

    #[test]
    fn major_ticks_cover_span() {
        let ticks = layout_ruler(0.0..250.0, 20.0, &spacing(10.0, 100.0));
        let positions: Vec<f64> = ticks.major.iter().map(|t| t.position).collect();
        let values: Vec<f64> = ticks.major.iter().map(|t| t.value).collect();
        assert_eq!(positions, [20.0, 120.0, 220.0], "ticks every 100 px from the origin");
        assert_eq!(values, [0.0, 10.0, 20.0], "values step by the interval");
    }

    #[test]
    fn negative_values_left_of_origin() {
        let ticks = layout_ruler(0.0..100.0, 150.0, &spacing(1.0, 50.0));
        let values: Vec<f64> = ticks.major.iter().map(|t| t.value).collect();
        assert_eq!(values, [-3.0, -2.0, -1.0], "model values left of the origin are negative");
    }

    #[test]
    fn minor_ticks_skip_majors_and_respect_density() {
        let ticks = layout_ruler(0.0..100.0, 0.0, &spacing(1.0, 50.0));
        assert_eq!(ticks.minor.len(), 8, "two intervals with four inner minor ticks each");
        assert!(
            ticks.minor.iter().all(|p| (p % 50.0).abs() > 1e-9),
            "minor ticks never coincide with majors"
        );

        let dense = layout_ruler(0.0..100.0, 0.0, &spacing(1.0, 10.0));
        assert!(dense.minor.is_empty(), "2 px minor spacing is too dense");
    }

    #[test]
    fn degenerate_spacing_yields_no_ticks() {
        assert_eq!(
            layout_ruler(0.0..100.0, 0.0, &spacing(1.0, 0.0)),
            RulerTicks::default(),
            "zero pixel spacing"
        );
        assert_eq!(
            layout_ruler(0.0..100.0, f64::NAN, &spacing(1.0, 10.0)),
            RulerTicks::default(),
            "non-finite origin"
        );
        assert_eq!(
            layout_ruler(100.0..0.0, 0.0, &spacing(1.0, 10.0)),
            RulerTicks::default(),
            "empty span"
        );
    }

    #[test]
    fn tick_count_is_capped() {
        let ticks = layout_ruler(0.0..1.0e9, 0.0, &spacing(1.0, 10.0));
        assert_eq!(ticks.major.len(), MAX_TICKS, "runaway tick counts are capped");
    }

    #[test]
    fn crowded_majors_leave_the_ruler_blank() {
        let crowded = layout_ruler(0.0..2000.0, 0.0, &spacing(100_000.0, 0.1));
        assert_eq!(crowded, RulerTicks::default(), "0.1 px per interval");

        let edge = layout_ruler(0.0..80.0, 0.0, &spacing(1.0, MIN_MAJOR_SPACING_PX));
        assert_eq!(edge.major.len(), 11, "exactly the minimum spacing is kept");
        assert!(edge.minor.is_empty(), "minors are still too dense");
    }

    #[test]
    fn extreme_zoom_out_gives_no_ticks() {
        let spacing = crate::resolve_tick_spacing(&[], UnitType::Pixels, 1e-6, 1.0);
        let ticks = layout_ruler(24.0..2000.0, 1000.0, &spacing);
        assert!(ticks.major.is_empty() && ticks.minor.is_empty(), "{spacing:?}");
    }

    #[test]
    fn subdivisions_follow_mantissa() {
        assert_eq!(minor_subdivisions(1.0), 5, "1 splits in fifths");
        assert_eq!(minor_subdivisions(0.2), 4, "2 splits in quarters");
        assert_eq!(minor_subdivisions(5000.0), 5, "5 splits in fifths");
        assert_eq!(minor_subdivisions(f64::NAN), 5, "garbage falls back to fifths");
    }

    #[test]
    fn labels_drop_float_noise() {
        assert_eq!(format_tick_label(3.0 * 0.1, 0.1), "0.3", "one decimal for 0.1");
        assert_eq!(format_tick_label(200.0, 100.0), "200", "integers print bare");
        assert_eq!(format_tick_label(0.05, 0.05), "0.05", "two decimals for 0.05");
        assert_eq!(format_tick_label(-0.0, 1.0), "0", "no negative zero");
    }
}
