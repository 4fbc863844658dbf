// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-stroke label font.
//!
//! Glyphs live on a 4 × 6 unit grid: `y = 0` is the cap line, `y = 2` the
//! x-height, `y = 6` the baseline and `y = 8` the descender. Each glyph is a
//! list of polylines meant to be stroked, like a plotter font.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{PathCmd, PathDesc};

/// Cap height of the glyph grid, in glyph units.
pub const GLYPH_HEIGHT: f32 = 6.0;

/// Horizontal pen advance per character, in glyph units.
pub const GLYPH_ADVANCE: f32 = 6.0;

/// Width of the glyph box inside the advance, in glyph units.
const GLYPH_WIDTH: f32 = 4.0;

/// A line of label text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// Characters to draw. Uppercase ASCII is drawn as lowercase; characters
    /// without a glyph only advance the pen.
    pub text: Box<str>,
    /// Left edge of the first character.
    pub x: f32,
    /// Baseline position.
    pub y: f32,
    /// Cap height in device pixels.
    pub size: f32,
}

impl TextRun {
    /// Creates a text run with its baseline starting at `(x, y)`.
    pub fn new(text: impl Into<Box<str>>, x: f32, y: f32, size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
        }
    }

    /// Device-pixel width of the run, see [`text_width`].
    pub fn width(&self) -> f32 {
        text_width(&self.text, self.size)
    }
}

type Stroke = &'static [(u8, u8)];

fn glyph(c: char) -> Option<&'static [Stroke]> {
    let strokes: &'static [Stroke] = match c.to_ascii_lowercase() {
        '0' => &[&[(0, 0), (4, 0), (4, 6), (0, 6), (0, 0)]],
        '1' => &[&[(1, 1), (2, 0), (2, 6)]],
        '2' => &[&[(0, 0), (4, 0), (4, 3), (0, 3), (0, 6), (4, 6)]],
        '3' => &[&[(0, 0), (4, 0), (4, 6), (0, 6)], &[(0, 3), (4, 3)]],
        '4' => &[&[(0, 0), (0, 3), (4, 3)], &[(4, 0), (4, 6)]],
        '5' => &[&[(4, 0), (0, 0), (0, 3), (4, 3), (4, 6), (0, 6)]],
        '6' => &[&[(4, 0), (0, 0), (0, 6), (4, 6), (4, 3), (0, 3)]],
        '7' => &[&[(0, 0), (4, 0), (4, 6)]],
        '8' => &[&[(0, 0), (4, 0), (4, 6), (0, 6), (0, 0)], &[(0, 3), (4, 3)]],
        '9' => &[&[(4, 3), (0, 3), (0, 0), (4, 0), (4, 6), (0, 6)]],
        '.' => &[&[(2, 5), (2, 6)]],
        ',' => &[&[(2, 5), (1, 7)]],
        '-' => &[&[(1, 3), (3, 3)]],
        '+' => &[&[(1, 3), (3, 3)], &[(2, 2), (2, 4)]],
        ':' => &[&[(2, 2), (2, 3)], &[(2, 5), (2, 6)]],
        '=' => &[&[(0, 2), (4, 2)], &[(0, 4), (4, 4)]],
        '(' => &[&[(3, 0), (2, 1), (2, 5), (3, 6)]],
        ')' => &[&[(1, 0), (2, 1), (2, 5), (1, 6)]],
        'a' => &[&[(0, 2), (4, 2), (4, 6), (0, 6), (0, 4), (4, 4)]],
        'b' => &[&[(0, 0), (0, 6), (4, 6), (4, 2), (0, 2)]],
        'c' => &[&[(4, 2), (0, 2), (0, 6), (4, 6)]],
        'd' => &[&[(4, 0), (4, 6), (0, 6), (0, 2), (4, 2)]],
        'e' => &[&[(0, 4), (4, 4), (4, 2), (0, 2), (0, 6), (4, 6)]],
        'f' => &[&[(4, 0), (2, 0), (2, 6)], &[(1, 2), (3, 2)]],
        'g' => &[&[(4, 6), (0, 6), (0, 2), (4, 2), (4, 8), (0, 8)]],
        'h' => &[&[(0, 0), (0, 6)], &[(0, 2), (4, 2), (4, 6)]],
        'i' => &[&[(2, 2), (2, 6)], &[(2, 0), (2, 1)]],
        'l' => &[&[(2, 0), (2, 6)]],
        'm' => &[&[(0, 6), (0, 2), (4, 2), (4, 6)], &[(2, 2), (2, 6)]],
        'n' => &[&[(0, 6), (0, 2), (4, 2), (4, 6)]],
        'o' => &[&[(0, 2), (4, 2), (4, 6), (0, 6), (0, 2)]],
        'p' => &[&[(0, 8), (0, 2), (4, 2), (4, 6), (0, 6)]],
        'r' => &[&[(0, 6), (0, 2), (4, 2)]],
        's' => &[&[(4, 2), (0, 2), (0, 4), (4, 4), (4, 6), (0, 6)]],
        't' => &[&[(2, 0), (2, 6), (4, 6)], &[(0, 2), (4, 2)]],
        'u' => &[&[(0, 2), (0, 6), (4, 6), (4, 2)]],
        'x' => &[&[(0, 2), (4, 6)], &[(4, 2), (0, 6)]],
        'y' => &[&[(0, 2), (0, 6), (4, 6)], &[(4, 2), (4, 8), (0, 8)]],
        'z' => &[&[(0, 2), (4, 2), (0, 6), (4, 6)]],
        _ => return None,
    };
    Some(strokes)
}

/// Returns true if `c` has a visible glyph in the label font.
pub fn has_glyph(c: char) -> bool {
    glyph(c).is_some()
}

/// Device-pixel width of `text` drawn with cap height `size`.
///
/// Measured from the left edge of the first glyph box to the right edge of
/// the last one, so trailing letter spacing is not included.
pub fn text_width(text: &str, size: f32) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    let unit = size / GLYPH_HEIGHT;
    #[allow(
        clippy::cast_precision_loss,
        reason = "label lengths are tiny compared to f32 precision"
    )]
    let advances = (count - 1) as f32;
    (advances * GLYPH_ADVANCE + GLYPH_WIDTH) * unit
}

/// Builds the stroke outline of a text run.
///
/// The result is meant to be stroked (not filled) with a width proportional
/// to `run.size`.
pub fn text_run_path(run: &TextRun) -> PathDesc {
    let unit = run.size / GLYPH_HEIGHT;
    let mut commands = Vec::new();
    let mut pen_x = run.x;
    for c in run.text.chars() {
        for stroke in glyph(c).unwrap_or(&[]) {
            for (i, &(gx, gy)) in stroke.iter().enumerate() {
                let x = pen_x + f32::from(gx) * unit;
                let y = run.y + (f32::from(gy) - GLYPH_HEIGHT) * unit;
                commands.push(if i == 0 {
                    PathCmd::MoveTo { x, y }
                } else {
                    PathCmd::LineTo { x, y }
                });
            }
        }
        pen_x += GLYPH_ADVANCE * unit;
    }
    PathDesc {
        commands: commands.into_boxed_slice(),
    }
}
