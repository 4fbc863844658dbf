// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello CPU–backed implementation of the Plotview imaging backend.
//!
//! This crate implements [`ImagingBackend`] on top of the sparse-strips
//! [`vello_cpu::RenderContext`], so plot previews can be rasterized without a
//! GPU. Solid paints, dashed strokes, opacity layers and label text (via the
//! built-in single-stroke font of `plotview_imaging`) are supported. Gradient
//! and image brushes are ignored and leave the previous paint in effect.
//!
//! The backend only issues commands; callers own the render context and are
//! responsible for `flush` and `render_to_pixmap`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Cap, Join};
use peniko::Brush;
use plotview_imaging::{
    DrawOp, ImagingBackend, LayerOp, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, StateOp, StrokeStyle, TextRun, text_run_path,
};
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath, Cap as CpuCap, Join as CpuJoin, Rect, Stroke,
};
use vello_cpu::RenderContext;

/// Label strokes are this fraction of the cap height, with a floor of one pixel.
const TEXT_STROKE_RATIO: f64 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum StackEntry {
    Noop,
    Pushed,
}

/// CPU-backed implementation of the imaging backend using `vello_cpu`.
pub struct VelloCpuImagingBackend<'ctx> {
    /// Underlying Vello CPU render context to draw into.
    pub ctx: &'ctx mut RenderContext,
    paths: Vec<Option<BezPath>>,
    paints: Vec<Option<PaintDesc>>,

    stack: Vec<StackEntry>,
    current_paint: Option<PaintId>,
    current_stroke: Stroke,
}

impl fmt::Debug for VelloCpuImagingBackend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelloCpuImagingBackend")
            .field("live_paths", &self.paths.iter().flatten().count())
            .field("live_paints", &self.paints.iter().flatten().count())
            .field("layer_depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl<'ctx> VelloCpuImagingBackend<'ctx> {
    /// Create a new backend that renders into the given CPU render context.
    pub fn new(ctx: &'ctx mut RenderContext) -> Self {
        Self {
            ctx,
            paths: Vec::new(),
            paints: Vec::new(),
            stack: Vec::new(),
            current_paint: None,
            current_stroke: Stroke::new(1.0),
        }
    }

    /// Number of layers currently pushed and not yet popped.
    pub fn layer_depth(&self) -> usize {
        self.stack.len()
    }

    fn affine_to_cpu(xf: Affine) -> CpuAffine {
        CpuAffine::new(xf.as_coeffs())
    }

    fn stroke_to_cpu(style: &StrokeStyle) -> Stroke {
        let mut stroke = Stroke::new(style.width);
        stroke.miter_limit = style.miter_limit;
        stroke.join = match style.join {
            Join::Bevel => CpuJoin::Bevel,
            Join::Miter => CpuJoin::Miter,
            Join::Round => CpuJoin::Round,
        };
        stroke.start_cap = cap_to_cpu(style.start_cap);
        stroke.end_cap = cap_to_cpu(style.end_cap);
        if style.dash_pattern.is_empty() {
            stroke
        } else {
            stroke.with_dashes(style.dash_offset, style.dash_pattern.iter().copied())
        }
    }

    fn apply_current_paint(&mut self) {
        let Some(id) = self.current_paint else {
            return;
        };
        let idx = id.0 as usize;
        if let Some(Some(PaintDesc {
            brush: Brush::Solid(color),
        })) = self.paints.get(idx)
        {
            self.ctx.set_paint(*color);
        }
    }

    fn draw_text(&mut self, run: &TextRun) {
        let outline = text_run_path(run).to_bez_path();
        if outline.elements().is_empty() {
            return;
        }
        let width = (f64::from(run.size) * TEXT_STROKE_RATIO).max(1.0);
        let mut pen = Stroke::new(width);
        pen.join = CpuJoin::Round;
        pen.start_cap = CpuCap::Round;
        pen.end_cap = CpuCap::Round;

        self.ctx.set_stroke(pen);
        self.ctx.stroke_path(&outline);
        self.ctx.set_stroke(self.current_stroke.clone());
    }
}

fn cap_to_cpu(cap: Cap) -> CpuCap {
    match cap {
        Cap::Butt => CpuCap::Butt,
        Cap::Round => CpuCap::Round,
        Cap::Square => CpuCap::Square,
    }
}

fn rect_to_cpu(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
    Rect::new(f64::from(x0), f64::from(y0), f64::from(x1), f64::from(y1))
}

/// Stores `value` in the first free slot, growing the table when none is free.
fn alloc_slot<T>(slots: &mut Vec<Option<T>>, value: T) -> u32 {
    let idx = match slots.iter().position(Option::is_none) {
        Some(idx) => {
            slots[idx] = Some(value);
            idx
        }
        None => {
            slots.push(Some(value));
            slots.len() - 1
        }
    };
    u32::try_from(idx).expect("VelloCpuImagingBackend: too many resources for u32 ids")
}

impl ResourceBackend for VelloCpuImagingBackend<'_> {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        PathId(alloc_slot(&mut self.paths, desc.to_bez_path()))
    }

    fn destroy_path(&mut self, id: PathId) {
        if let Some(slot) = self.paths.get_mut(id.0 as usize) {
            *slot = None;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        PaintId(alloc_slot(&mut self.paints, desc))
    }

    fn destroy_paint(&mut self, id: PaintId) {
        if let Some(slot) = self.paints.get_mut(id.0 as usize) {
            *slot = None;
        }
    }
}

impl ImagingBackend for VelloCpuImagingBackend<'_> {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetTransform(xf) => {
                self.ctx.set_transform(Self::affine_to_cpu(xf));
            }
            StateOp::PushLayer(layer) => {
                if layer.is_noop() {
                    self.stack.push(StackEntry::Noop);
                } else {
                    let LayerOp { blend, opacity } = layer;
                    self.ctx.push_layer(None, blend, opacity, None, None);
                    self.stack.push(StackEntry::Pushed);
                }
            }
            StateOp::PopLayer => match self.stack.pop() {
                Some(StackEntry::Noop) => {}
                Some(StackEntry::Pushed) => self.ctx.pop_layer(),
                None => panic!("PopLayer with empty stack"),
            },
            StateOp::SetPaint(id) => {
                self.current_paint = Some(id);
                self.apply_current_paint();
            }
            StateOp::SetStroke(style) => {
                self.current_stroke = Self::stroke_to_cpu(&style);
                self.ctx.set_stroke(self.current_stroke.clone());
            }
        }
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::StrokePath(id) => {
                if let Some(Some(path)) = self.paths.get(id.0 as usize) {
                    self.ctx.stroke_path(path);
                }
            }
            DrawOp::FillRect { x0, y0, x1, y1 } => {
                self.ctx.fill_rect(&rect_to_cpu(x0, y0, x1, y1));
            }
            DrawOp::StrokeRect { x0, y0, x1, y1 } => {
                self.ctx.stroke_rect(&rect_to_cpu(x0, y0, x1, y1));
            }
            DrawOp::Text(run) => self.draw_text(&run),
        }
    }
}
