// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview Units: unit systems and ruler scales for plot previews.
//!
//! Plot documents are expressed in CSS pixels (96 per inch), the convention
//! used by pen-plotter toolchains. This crate maps that model space onto the
//! unit systems a user wants to read rulers in and picks "nice" ruler tick
//! intervals for the current zoom level:
//!
//! - [`UnitType`] names the unit systems and their conversion factors.
//! - [`resolve_tick_spacing`] chooses a tick interval from a scale
//!   specification such as [`DEFAULT_SCALE_SPEC`].
//! - [`layout_ruler`] and [`format_tick_label`] turn that interval into tick
//!   positions and labels along one ruler axis.
//!
//! ## Example
//!
//! ```rust
//! use plotview_units::{DEFAULT_SCALE_SPEC, UnitType, layout_ruler, resolve_tick_spacing};
//!
//! // 2 device pixels per model unit, rulers in millimetres.
//! let spacing = resolve_tick_spacing(DEFAULT_SCALE_SPEC, UnitType::Metric, 2.0, 1.0);
//! assert!(spacing.pixels <= 100.0);
//!
//! // Ticks along a 0..800 pixel ruler whose model origin sits at x = 40.
//! let ticks = layout_ruler(0.0..800.0, 40.0, &spacing);
//! assert!(!ticks.major.is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod resolve;
mod ruler;
mod unit;

pub use resolve::{DEFAULT_SCALE_SPEC, TARGET_TICK_SPACING_PX, TickSpacing, resolve_tick_spacing};
pub use ruler::{
    MAX_TICKS, MIN_MAJOR_SPACING_PX, MIN_MINOR_SPACING_PX, RulerTicks, Tick, format_tick_label,
    layout_ruler, minor_subdivisions,
};
pub use unit::{PX_PER_INCH, PX_PER_MM, UnitType};
