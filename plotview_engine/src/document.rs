// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only document model consumed by the engine.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

/// Stable layer identifier.
pub type LayerId = u32;

/// What a document path represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Pen-down drawing.
    Stroke,
    /// Pen-up travel between strokes.
    PenUp,
}

/// A borrowed document path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathRef<'a> {
    /// Whether the pen is down along this path.
    pub kind: PathKind,
    /// Polyline vertices in model space.
    pub points: &'a [Point],
}

/// A layered vector document, as seen by the engine.
///
/// The engine never mutates a document; it only reads layer ids, colors and
/// geometry. Implementations may hold any internal representation.
pub trait PlotDocument {
    /// Layer ids in document order.
    fn layer_ids(&self) -> Vec<LayerId>;

    /// Explicit color of a layer; `None` lets the engine pick a palette color.
    fn layer_color(&self, id: LayerId) -> Option<Color>;

    /// Calls `visitor` for every path of layer `id`, in drawing order.
    ///
    /// Unknown layers visit nothing.
    fn visit_paths(&self, id: LayerId, visitor: &mut dyn FnMut(PathRef<'_>));

    /// Bounds of every point of layer `id`, or `None` if it has no points.
    fn layer_bounds(&self, id: LayerId) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        self.visit_paths(id, &mut |path| {
            for &p in path.points {
                bounds = Some(match bounds {
                    Some(b) => b.union_pt(p),
                    None => Rect::from_points(p, p),
                });
            }
        });
        bounds
    }

    /// Bounds of every point of every layer, or `None` if there are no points.
    ///
    /// Visibility plays no part here.
    fn bounds(&self) -> Option<Rect> {
        self.layer_ids()
            .into_iter()
            .filter_map(|id| self.layer_bounds(id))
            .reduce(|a, b| a.union(b))
    }
}

/// One layer of an in-memory [`Document`].
///
/// A layer stores pen-down strokes only. Pen-up travel is derived from them:
/// one straight move from the end of each stroke to the start of the next.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    id: LayerId,
    color: Option<Color>,
    strokes: Vec<Vec<Point>>,
}

impl Layer {
    /// Creates an empty layer.
    pub fn new(id: LayerId) -> Self {
        Self {
            id,
            color: None,
            strokes: Vec::new(),
        }
    }

    /// Sets the layer color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Appends a stroke and returns the layer, for building documents inline.
    #[must_use]
    pub fn with_stroke(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.add_stroke(points);
        self
    }

    /// Appends a stroke.
    pub fn add_stroke(&mut self, points: impl IntoIterator<Item = Point>) {
        self.strokes.push(points.into_iter().collect());
    }

    /// Layer id.
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Explicit layer color, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets or clears the layer color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Pen-down strokes in drawing order.
    pub fn strokes(&self) -> &[Vec<Point>] {
        &self.strokes
    }

    /// Pen-up moves between consecutive non-empty strokes.
    pub fn pen_up_moves(&self) -> impl Iterator<Item = [Point; 2]> + '_ {
        let mut ends = self
            .strokes
            .iter()
            .filter_map(|s| Some((*s.first()?, *s.last()?)));
        let mut previous_end = ends.next().map(|(_, end)| end);
        core::iter::from_fn(move || {
            let (start, end) = ends.next()?;
            let from = previous_end.replace(end)?;
            Some([from, start])
        })
    }

    /// Returns true if the layer has no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// Simple in-memory [`PlotDocument`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    layers: Vec<Layer>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer and returns the document.
    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.add_layer(layer);
        self
    }

    /// Adds a layer.
    ///
    /// If a layer with the same id exists, the new strokes are appended to it
    /// and an explicit color replaces the old one.
    pub fn add_layer(&mut self, layer: Layer) {
        match self.layer_mut(layer.id) {
            Some(existing) => {
                if layer.color.is_some() {
                    existing.color = layer.color;
                }
                existing.strokes.extend(layer.strokes);
            }
            None => self.layers.push(layer),
        }
    }

    /// Layer with the given id.
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Mutable layer with the given id.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Layers in document order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns true if the document has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl PlotDocument for Document {
    fn layer_ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(|l| l.id).collect()
    }

    fn layer_color(&self, id: LayerId) -> Option<Color> {
        self.layer(id)?.color
    }

    fn visit_paths(&self, id: LayerId, visitor: &mut dyn FnMut(PathRef<'_>)) {
        let Some(layer) = self.layer(id) else {
            return;
        };
        for stroke in &layer.strokes {
            visitor(PathRef {
                kind: PathKind::Stroke,
                points: stroke,
            });
        }
        for travel in layer.pen_up_moves() {
            visitor(PathRef {
                kind: PathKind::PenUp,
                points: &travel,
            });
        }
    }
}
