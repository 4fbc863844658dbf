// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview Imaging Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`] for **IR recording and state
//! tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended for tests and debugging that want to assert on emitted
//!   ops, the imaging state at the time each op is applied, and which
//!   resources are still alive.
//!
//! Freed resource slots are reused lowest-first, so two identical op streams
//! issued against a backend whose resources were all released produce the
//! same ids.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use peniko::{Brush, Color};
use plotview_imaging::{
    Affine, DrawOp, ImagingBackend, ImagingOp, LayerOp, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, StateOp, StrokeStyle,
};

/// Snapshot of the current imaging state inside the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Number of active layers on the layer stack.
    pub layer_stack_depth: u32,
    /// The most recently pushed layer op, if any.
    pub layer_top: Option<LayerOp>,
    /// Current paint, if set.
    pub paint: Option<PaintId>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            layer_stack_depth: 0,
            layer_top: None,
            paint: None,
            stroke: None,
        }
    }
}

/// Event recorded by the reference backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Simple reference implementation of the imaging backend.
///
/// This backend:
/// - Stores resource descriptors in slot vectors keyed by their IDs,
/// - Tracks current imaging state,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RefBackend {
    paths: Vec<Option<PathDesc>>,
    paints: Vec<Option<PaintDesc>>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: StateSnapshot,
    layer_stack: Vec<LayerOp>,
}

impl RefBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Iterates over recorded draw operations with their state snapshots.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Clears all recorded events and ops but keeps resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    /// Current imaging state.
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Descriptor of a live path.
    pub fn path(&self, id: PathId) -> Option<&PathDesc> {
        self.paths.get(id.0 as usize)?.as_ref()
    }

    /// Descriptor of a live paint.
    pub fn paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize)?.as_ref()
    }

    /// Color of a live solid paint.
    pub fn solid_color(&self, id: PaintId) -> Option<Color> {
        match self.paint(id)?.brush {
            Brush::Solid(color) => Some(color),
            _ => None,
        }
    }

    /// Number of paths created and not yet destroyed.
    pub fn live_paths(&self) -> usize {
        self.paths.iter().flatten().count()
    }

    /// Number of paints created and not yet destroyed.
    pub fn live_paints(&self) -> usize {
        self.paints.iter().flatten().count()
    }

    fn sync_layer_state(&mut self) {
        self.state.layer_stack_depth = u32::try_from(self.layer_stack.len())
            .expect("RefBackend: too many layer stack entries for u32");
        self.state.layer_top = self.layer_stack.last().cloned();
    }
}

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
    u32::try_from(idx).expect("RefBackend: too many resources for u32 ids")
}

impl ResourceBackend for RefBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        PathId(alloc_slot(&mut self.paths, desc))
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

impl ImagingBackend for RefBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::PushLayer(layer) => {
                self.layer_stack.push(layer.clone());
                self.sync_layer_state();
            }
            StateOp::PopLayer => {
                self.layer_stack.pop();
                self.sync_layer_state();
            }
            StateOp::SetPaint(id) => self.state.paint = Some(*id),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}
