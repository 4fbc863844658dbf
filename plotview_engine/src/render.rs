// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns engine state into imaging ops.
//!
//! Geometry is mapped to device pixels here and drawn under the identity
//! transform, so stroke widths and marker sizes are in device pixels.

use alloc::format;
use alloc::vec::Vec;

use kurbo::{Cap, Join, Point, Rect, Stroke};
use peniko::{Brush, Color};
use plotview_imaging::{
    Affine, DrawOp, ImagingBackend, LayerOp, PaintDesc, PaintId, PathDesc, StateOp, TextRun,
    text_width,
};
use plotview_units::{format_tick_label, layout_ruler};

use crate::document::{LayerId, PathKind, PlotDocument};
use crate::engine::Engine;
use crate::style::{
    BACKGROUND_COLOR, DEBUG_COLOR, DisplayFlags, LABEL_SIZE_PX, OUTLINE_COLOR, OUTLINE_WIDTH_PX,
    PEN_UP_COLOR, PEN_UP_DASH_PX, PEN_UP_WIDTH_PX, POINT_SIZE_PX, RULER_BACKGROUND_COLOR,
    RULER_INK_COLOR, RULER_THICKNESS_PX, ViewMode, palette_color,
};

/// Minor ticks start this far into the ruler band, as a fraction of its thickness.
const MINOR_TICK_START: f64 = 0.7;

/// Gap between labels and the ruler or viewport edge, in device pixels at pixel factor 1.
const LABEL_PADDING_PX: f64 = 2.0;

#[allow(
    clippy::cast_possible_truncation,
    reason = "device-space coordinates fit comfortably in f32"
)]
fn f32_of(v: f64) -> f32 {
    v as f32
}

/// Per-render bookkeeping around a backend.
///
/// Paints are created once per color and destroyed in [`Frame::finish`];
/// paths live only for the draw that uses them.
struct Frame<'a> {
    backend: &'a mut dyn ImagingBackend,
    paints: Vec<(Color, PaintId)>,
    current: Option<PaintId>,
    paths_drawn: usize,
}

impl<'a> Frame<'a> {
    fn new(backend: &'a mut dyn ImagingBackend) -> Self {
        Self {
            backend,
            paints: Vec::new(),
            current: None,
            paths_drawn: 0,
        }
    }

    fn set_color(&mut self, color: Color) {
        let id = match self.paints.iter().find(|(c, _)| *c == color) {
            Some(&(_, id)) => id,
            None => {
                let id = self.backend.create_paint(PaintDesc {
                    brush: Brush::Solid(color),
                });
                self.paints.push((color, id));
                id
            }
        };
        if self.current != Some(id) {
            self.backend.state(StateOp::SetPaint(id));
            self.current = Some(id);
        }
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.backend.state(StateOp::SetStroke(stroke));
    }

    fn stroke_path(&mut self, desc: PathDesc) {
        if desc.is_empty() {
            return;
        }
        let path = self.backend.create_path(desc);
        self.backend.draw(DrawOp::StrokePath(path));
        self.backend.destroy_path(path);
        self.paths_drawn += 1;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.backend.draw(DrawOp::FillRect {
            x0: f32_of(rect.x0),
            y0: f32_of(rect.y0),
            x1: f32_of(rect.x1),
            y1: f32_of(rect.y1),
        });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.backend.draw(DrawOp::StrokeRect {
            x0: f32_of(rect.x0),
            y0: f32_of(rect.y0),
            x1: f32_of(rect.x1),
            y1: f32_of(rect.y1),
        });
    }

    fn text(&mut self, text: &str, x: f64, baseline: f64, size: f64) {
        self.backend.draw(DrawOp::Text(TextRun::new(
            text,
            f32_of(x),
            f32_of(baseline),
            f32_of(size),
        )));
    }

    fn finish(self) -> usize {
        for (_, id) in self.paints {
            self.backend.destroy_paint(id);
        }
        self.paths_drawn
    }
}

pub(crate) fn render(engine: &Engine<'_>, backend: &mut dyn ImagingBackend) {
    let mut frame = Frame::new(backend);
    let flags = engine.style.flags();

    frame.backend.state(StateOp::SetTransform(Affine::IDENTITY));
    frame.set_color(BACKGROUND_COLOR);
    frame.fill_rect(engine.viewport.to_rect());

    let mut layers_drawn = 0;
    if let Some(doc) = engine.document() {
        for id in doc.layer_ids() {
            if engine.visibility.is_visible(id) {
                draw_layer(engine, doc, id, &mut frame);
                layers_drawn += 1;
            }
        }
        if flags.contains(DisplayFlags::DEBUG) {
            draw_bounds(engine, doc, &mut frame);
        }
    }
    if flags.contains(DisplayFlags::DEBUG) {
        draw_debug_text(engine, &mut frame);
    }
    if flags.contains(DisplayFlags::SHOW_RULERS) {
        draw_rulers(engine, &mut frame);
    }

    let paths = frame.finish();
    log::trace!("rendered {layers_drawn} layers, {paths} paths");
}

fn draw_layer(engine: &Engine<'_>, doc: &dyn PlotDocument, id: LayerId, frame: &mut Frame<'_>) {
    let style = &engine.style;
    let view = &engine.view;
    let pf = style.pixel_factor();
    let layer_color = doc.layer_color(id).unwrap_or_else(|| palette_color(id));
    let thin = Stroke::new(OUTLINE_WIDTH_PX * pf);
    let (color, stroke) = match style.view_mode() {
        ViewMode::Outline => (OUTLINE_COLOR, thin),
        ViewMode::OutlineColorful => (layer_color, thin),
        ViewMode::Preview => (
            layer_color,
            Stroke::new(style.pen_width() * view.scale())
                .with_caps(Cap::Round)
                .with_join(Join::Round),
        ),
    };
    let preview = style.view_mode() == ViewMode::Preview;
    let show_points = style.flags().contains(DisplayFlags::SHOW_POINTS);
    let marker = POINT_SIZE_PX * pf;

    if preview {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "opacity is clamped to [0, 1]"
        )]
        let opacity = style.pen_opacity() as f32;
        frame.backend.layer_push(LayerOp::opacity(opacity));
    }
    frame.set_color(color);
    frame.set_stroke(stroke);
    doc.visit_paths(id, &mut |path| {
        if path.kind != PathKind::Stroke {
            return;
        }
        if path.points.len() >= 2 {
            let pixels = path.points.iter().map(|&p| view.model_to_viewport(p));
            frame.stroke_path(PathDesc::polyline(pixels, false));
        }
        if show_points {
            for &p in path.points {
                let center = view.model_to_viewport(p);
                frame.fill_rect(Rect::from_center_size(center, (marker, marker)));
            }
        }
    });
    if preview {
        frame.backend.layer_pop();
    }

    if style.flags().contains(DisplayFlags::SHOW_PEN_UP) {
        frame.set_color(PEN_UP_COLOR);
        let dash = PEN_UP_DASH_PX * pf;
        frame.set_stroke(Stroke::new(PEN_UP_WIDTH_PX * pf).with_dashes(0.0, [dash, dash]));
        doc.visit_paths(id, &mut |path| {
            if path.kind == PathKind::PenUp && path.points.len() >= 2 {
                let pixels = path.points.iter().map(|&p| view.model_to_viewport(p));
                frame.stroke_path(PathDesc::polyline(pixels, false));
            }
        });
    }
}

fn draw_bounds(engine: &Engine<'_>, doc: &dyn PlotDocument, frame: &mut Frame<'_>) {
    let view = &engine.view;
    frame.set_color(DEBUG_COLOR);
    frame.set_stroke(Stroke::new(engine.style.pixel_factor()));
    if let Some(bounds) = doc.bounds() {
        frame.stroke_rect(view.model_rect_to_viewport(bounds));
    }
    for id in doc.layer_ids() {
        if !engine.visibility.is_visible(id) {
            continue;
        }
        if let Some(bounds) = doc.layer_bounds(id) {
            frame.stroke_rect(view.model_rect_to_viewport(bounds));
        }
    }
}

fn draw_debug_text(engine: &Engine<'_>, frame: &mut Frame<'_>) {
    let pf = engine.style.pixel_factor();
    let origin = engine.origin();
    let text = format!(
        "scale {:.3} origin ({:.1}, {:.1})",
        engine.scale(),
        origin.x,
        origin.y
    );
    let mut x = LABEL_PADDING_PX * 2.0 * pf;
    if engine.show_rulers() {
        x += RULER_THICKNESS_PX * pf;
    }
    let baseline = engine.viewport.height - LABEL_PADDING_PX * 2.0 * pf;
    frame.set_color(DEBUG_COLOR);
    frame.text(&text, x, baseline, LABEL_SIZE_PX * pf);
}

fn draw_rulers(engine: &Engine<'_>, frame: &mut Frame<'_>) {
    let pf = engine.style.pixel_factor();
    let t = RULER_THICKNESS_PX * pf;
    let size = LABEL_SIZE_PX * pf;
    let pad = LABEL_PADDING_PX * pf;
    let (w, h) = (engine.viewport.width, engine.viewport.height);

    frame.set_color(RULER_BACKGROUND_COLOR);
    frame.fill_rect(Rect::new(0.0, 0.0, w, t));
    frame.fill_rect(Rect::new(0.0, 0.0, t, h));

    let spacing = engine.tick_spacing();
    let origin = engine.origin();
    let top = layout_ruler(t..w, origin.x, &spacing);
    let left = layout_ruler(t..h, origin.y, &spacing);

    let mut segments = Vec::with_capacity(
        top.major.len() + top.minor.len() + left.major.len() + left.minor.len() + 2,
    );
    segments.push((Point::new(t, t), Point::new(w, t)));
    segments.push((Point::new(t, t), Point::new(t, h)));
    segments.extend(top.major.iter().map(|tick| {
        (Point::new(tick.position, 0.0), Point::new(tick.position, t))
    }));
    segments.extend(
        top.minor
            .iter()
            .map(|&x| (Point::new(x, t * MINOR_TICK_START), Point::new(x, t))),
    );
    segments.extend(left.major.iter().map(|tick| {
        (Point::new(0.0, tick.position), Point::new(t, tick.position))
    }));
    segments.extend(
        left.minor
            .iter()
            .map(|&y| (Point::new(t * MINOR_TICK_START, y), Point::new(t, y))),
    );

    frame.set_color(RULER_INK_COLOR);
    frame.set_stroke(Stroke::new(pf));
    frame.stroke_path(PathDesc::segments(segments));

    for tick in &top.major {
        let label = format_tick_label(tick.value, spacing.interval);
        frame.text(&label, tick.position + pad, pad + size, size);
    }
    // Left labels are right-aligned in the band and shrunk when too wide.
    let room = t - 2.0 * pad;
    for tick in &left.major {
        let label = format_tick_label(tick.value, spacing.interval);
        let width = f64::from(text_width(&label, f32_of(size)));
        let fitted = if width > room { size * room / width } else { size };
        let width = width * fitted / size;
        frame.text(&label, t - pad - width, tick.position - pad, fitted);
    }

    let suffix = spacing.unit.suffix();
    let suffix_width = f64::from(text_width(suffix, f32_of(size)));
    frame.text(suffix, (t - suffix_width) / 2.0, (t + size) / 2.0, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, Layer};
    use alloc::vec;
    use plotview_imaging::{ImagingOp, PathCmd, PathId, ResourceBackend};
    use plotview_imaging_ref::RefBackend;

    /// A draw with its resources resolved while they were still alive.
    #[derive(Clone, Debug)]
    struct Drawn {
        op: DrawOp,
        color: Option<Color>,
        stroke: Option<Stroke>,
        path: Option<PathDesc>,
        layer_depth: u32,
    }

    /// Wraps [`RefBackend`] and resolves paints and paths at draw time, since
    /// the engine destroys them before `render` returns.
    #[derive(Default)]
    struct Recorder {
        inner: RefBackend,
        drawn: Vec<Drawn>,
    }

    impl Recorder {
        fn strokes(&self) -> impl Iterator<Item = &Drawn> {
            self.drawn
                .iter()
                .filter(|d| matches!(d.op, DrawOp::StrokePath(_)))
        }

        fn texts(&self) -> Vec<&str> {
            self.drawn
                .iter()
                .filter_map(|d| match &d.op {
                    DrawOp::Text(run) => Some(&*run.text),
                    _ => None,
                })
                .collect()
        }
    }

    impl ResourceBackend for Recorder {
        fn create_path(&mut self, desc: PathDesc) -> PathId {
            self.inner.create_path(desc)
        }

        fn destroy_path(&mut self, id: PathId) {
            self.inner.destroy_path(id);
        }

        fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
            self.inner.create_paint(desc)
        }

        fn destroy_paint(&mut self, id: PaintId) {
            self.inner.destroy_paint(id);
        }
    }

    impl ImagingBackend for Recorder {
        fn state(&mut self, op: StateOp) {
            self.inner.state(op);
        }

        fn draw(&mut self, op: DrawOp) {
            let state = self.inner.current_state();
            let path = match op {
                DrawOp::StrokePath(id) => self.inner.path(id).cloned(),
                _ => None,
            };
            self.drawn.push(Drawn {
                color: state.paint.and_then(|p| self.inner.solid_color(p)),
                stroke: state.stroke.clone(),
                layer_depth: state.layer_stack_depth,
                path,
                op: op.clone(),
            });
            self.inner.draw(op);
        }
    }

    fn two_stroke_doc() -> Document {
        Document::new().with_layer(
            Layer::new(1)
                .with_stroke([Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
                .with_stroke([Point::new(10.0, 10.0), Point::new(0.0, 10.0)])
                .with_stroke([Point::new(0.0, 20.0), Point::new(10.0, 20.0)]),
        )
    }

    fn engine_for(doc: &Document) -> Engine<'_> {
        let mut engine = Engine::new();
        engine.set_document(Some(doc));
        engine.resize(200.0, 100.0);
        engine.set_show_rulers(false);
        engine
    }

    fn record(engine: &Engine<'_>) -> Recorder {
        let mut recorder = Recorder::default();
        engine.render(&mut recorder);
        recorder
    }

    #[test]
    fn background_comes_first() {
        let engine = Engine::new();
        let recorder = record(&engine);
        let first = recorder.drawn.first().expect("background fill");
        assert!(matches!(first.op, DrawOp::FillRect { .. }));
        assert_eq!(first.color, Some(BACKGROUND_COLOR));
        assert_eq!(
            recorder.inner.current_state().transform,
            Affine::IDENTITY,
            "everything is drawn in device pixels"
        );
    }

    #[test]
    fn render_is_idempotent_and_leaves_no_resources() {
        let doc = two_stroke_doc();
        let mut engine = engine_for(&doc);
        engine.set_show_rulers(true);
        engine.set_show_points(true);
        engine.set_show_pen_up(true);
        engine.set_debug(true);
        engine.fit_to_viewport();

        let mut backend = RefBackend::default();
        engine.render(&mut backend);
        let first = backend.ops().to_vec();
        assert_eq!(backend.live_paths(), 0, "paths destroyed");
        assert_eq!(backend.live_paints(), 0, "paints destroyed");

        backend.clear_events();
        engine.render(&mut backend);
        assert_eq!(backend.ops(), first.as_slice(), "same state, same ops");
        assert_eq!(backend.current_state().layer_stack_depth, 0, "layers balanced");
    }

    #[test]
    fn pen_up_travel_only_when_enabled() {
        let doc = two_stroke_doc();
        let mut engine = engine_for(&doc);
        assert_eq!(record(&engine).strokes().count(), 3, "strokes only");

        engine.set_show_pen_up(true);
        let recorder = record(&engine);
        assert_eq!(recorder.strokes().count(), 5, "3 strokes and 2 travel moves");

        let travel: Vec<&Drawn> = recorder
            .strokes()
            .filter(|d| d.color == Some(PEN_UP_COLOR))
            .collect();
        assert_eq!(travel.len(), 2);
        let stroke = travel[0].stroke.as_ref().expect("stroke set");
        assert!(!stroke.dash_pattern.is_empty(), "travel is dashed");
        assert_eq!(stroke.width, PEN_UP_WIDTH_PX);
        assert_eq!(travel[0].layer_depth, 0, "travel is not faded by the pen layer");
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let doc = two_stroke_doc()
            .with_layer(Layer::new(2).with_stroke([Point::new(0.0, 0.0), Point::new(5.0, 5.0)]));
        let mut engine = engine_for(&doc);
        engine.toggle_layer_visibility(1);

        let recorder = record(&engine);
        let strokes: Vec<&Drawn> = recorder.strokes().collect();
        assert_eq!(strokes.len(), 1, "only layer 2 is drawn");
        assert_eq!(strokes[0].color, Some(palette_color(2)));
    }

    #[test]
    fn view_modes_pick_color_and_width() {
        let layer_color = Color::from_rgba8(10, 20, 30, 255);
        let doc = Document::new().with_layer(
            Layer::new(1)
                .with_color(layer_color)
                .with_stroke([Point::new(0.0, 0.0), Point::new(10.0, 0.0)]),
        );
        let mut engine = engine_for(&doc);
        engine.set_scale(4.0);
        engine.set_pen_width(0.5);

        let styles = ViewMode::ALL.map(|mode| {
            engine.set_view_mode(mode);
            let drawn = record(&engine).strokes().next().cloned().expect("one stroke");
            (drawn.color, drawn.stroke.expect("stroke set"))
        });
        assert_eq!(styles[0].0, Some(OUTLINE_COLOR));
        assert_eq!(styles[0].1.width, OUTLINE_WIDTH_PX);
        assert_eq!(styles[1].0, Some(layer_color));
        assert_eq!(styles[1].1.width, OUTLINE_WIDTH_PX);
        assert_eq!(styles[2].0, Some(layer_color));
        assert_eq!(styles[2].1.width, 2.0, "pen width times scale");
        assert_eq!(styles[2].1.start_cap, Cap::Round);
    }

    #[test]
    fn preview_wraps_each_layer_in_an_opacity_layer() {
        let doc = two_stroke_doc()
            .with_layer(Layer::new(2).with_stroke([Point::new(0.0, 0.0), Point::new(5.0, 5.0)]));
        let mut engine = engine_for(&doc);
        engine.set_pen_opacity(0.5);

        let mut backend = RefBackend::default();
        engine.render(&mut backend);
        let pushes: Vec<LayerOp> = backend
            .ops()
            .iter()
            .filter_map(|op| match op {
                ImagingOp::State(StateOp::PushLayer(layer)) => Some(layer.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(pushes, vec![LayerOp::opacity(0.5); 2]);
        for (op, state) in backend.draws() {
            if matches!(op, DrawOp::StrokePath(_)) {
                assert_eq!(state.layer_stack_depth, 1, "strokes drawn inside the layer");
            }
        }

        engine.set_view_mode(ViewMode::Outline);
        let mut backend = RefBackend::default();
        engine.render(&mut backend);
        assert!(
            !backend
                .ops()
                .iter()
                .any(|op| matches!(op, ImagingOp::State(StateOp::PushLayer(_)))),
            "outline modes composite directly"
        );
    }

    #[test]
    fn points_are_marked_in_pixel_space() {
        let doc = Document::new().with_layer(
            Layer::new(1)
                .with_stroke([Point::new(1.0, 1.0), Point::new(3.0, 1.0)])
                .with_stroke([Point::new(5.0, 5.0)]),
        );
        let mut engine = engine_for(&doc);
        engine.set_scale(10.0);
        engine.set_origin(Point::new(5.0, 5.0));
        engine.set_show_points(true);

        let recorder = record(&engine);
        let markers: Vec<(f32, f32)> = recorder
            .drawn
            .iter()
            .skip(1)
            .filter_map(|d| match d.op {
                DrawOp::FillRect { x0, y0, x1, y1 } => Some(((x0 + x1) / 2.0, (y0 + y1) / 2.0)),
                _ => None,
            })
            .collect();
        assert_eq!(
            markers,
            vec![(15.0, 15.0), (35.0, 15.0), (55.0, 55.0)],
            "one marker per vertex, including single-point strokes"
        );
        assert_eq!(recorder.strokes().count(), 1, "single-point stroke is not stroked");
    }

    #[test]
    fn stroke_geometry_is_transformed() {
        let doc = Document::new()
            .with_layer(Layer::new(1).with_stroke([Point::new(0.0, 0.0), Point::new(10.0, 5.0)]));
        let mut engine = engine_for(&doc);
        engine.set_scale(2.0);
        engine.set_origin(Point::new(20.0, 30.0));

        let recorder = record(&engine);
        let drawn = recorder.strokes().next().expect("one stroke");
        let path = drawn.path.as_ref().expect("path alive while drawn");
        assert_eq!(
            &*path.commands,
            &[
                PathCmd::MoveTo { x: 20.0, y: 30.0 },
                PathCmd::LineTo { x: 40.0, y: 40.0 },
            ]
        );
    }

    #[test]
    fn rulers_draw_bands_ticks_and_unit() {
        let mut engine = Engine::new();
        engine.resize(400.0, 300.0);
        engine.set_unit_type(plotview_units::UnitType::Imperial);

        let recorder = record(&engine);
        let texts = recorder.texts();
        assert_eq!(texts.last(), Some(&"in"), "unit suffix in the corner");
        assert!(texts.contains(&"1"), "one inch label");
        assert!(texts.contains(&"3"), "three inch label");
        assert!(!texts.contains(&"0"), "origin tick sits under the corner");
        let bands = recorder
            .drawn
            .iter()
            .filter(|d| d.color == Some(RULER_BACKGROUND_COLOR))
            .count();
        assert_eq!(bands, 2, "top and left bands");

        engine.set_show_rulers(false);
        assert_eq!(record(&engine).drawn.len(), 1, "background only");
    }

    fn text_runs(recorder: &Recorder) -> Vec<&TextRun> {
        recorder
            .drawn
            .iter()
            .filter_map(|d| match &d.op {
                DrawOp::Text(run) => Some(run),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn left_ruler_labels_stay_inside_the_band() {
        let mut engine = Engine::new();
        engine.resize(400.0, 300.0);
        engine.set_unit_type(plotview_units::UnitType::Pixels);
        engine.set_origin(Point::new(0.0, 2000.0));

        let recorder = record(&engine);
        let texts = recorder.texts();
        assert!(texts.contains(&"-1900"), "wide labels are drawn: {texts:?}");

        let t = f32_of(RULER_THICKNESS_PX);
        let left: Vec<&TextRun> = text_runs(&recorder)
            .into_iter()
            .filter(|run| run.x < t)
            .collect();
        assert!(left.len() > 1, "left labels and the unit suffix");
        for run in left {
            let right = run.x + text_width(&run.text, run.size);
            assert!(run.x >= 0.0, "{:?} starts left of the band", run.text);
            assert!(right <= t + 1e-3, "{:?} ends at {right}", run.text);
        }
    }

    #[test]
    fn short_left_labels_keep_their_size() {
        let mut engine = Engine::new();
        engine.resize(400.0, 300.0);
        engine.set_unit_type(plotview_units::UnitType::Pixels);
        engine.set_origin(Point::new(0.0, 0.0));

        let recorder = record(&engine);
        let label = text_runs(&recorder)
            .into_iter()
            .find(|run| &*run.text == "200" && run.x < f32_of(RULER_THICKNESS_PX))
            .expect("left label at 200 px");
        assert_eq!(label.size, f32_of(LABEL_SIZE_PX));
        let right = label.x + text_width(&label.text, label.size);
        assert!((right - f32_of(RULER_THICKNESS_PX - LABEL_PADDING_PX)).abs() < 1e-3);
    }

    #[test]
    fn extreme_zoom_out_leaves_rulers_blank() {
        let mut engine = Engine::new();
        engine.resize(2000.0, 2000.0);
        engine.set_unit_type(plotview_units::UnitType::Pixels);
        engine.set_scale(1e-6);
        engine.set_origin(Point::new(1000.0, 1000.0));

        let recorder = record(&engine);
        assert_eq!(recorder.texts(), ["px"], "only the unit suffix");
        let segments: usize = recorder
            .strokes()
            .filter_map(|d| d.path.as_ref())
            .map(|path| path.commands.len() / 2)
            .sum();
        assert_eq!(segments, 2, "only the two band borders");
    }

    #[test]
    fn pixel_factor_scales_device_sizes() {
        let doc = two_stroke_doc();
        let mut engine = engine_for(&doc);
        engine.set_view_mode(ViewMode::Outline);
        engine.set_pixel_factor(2.0);
        let recorder = record(&engine);
        let stroke = recorder
            .strokes()
            .next()
            .and_then(|d| d.stroke.clone())
            .expect("stroke set");
        assert_eq!(stroke.width, OUTLINE_WIDTH_PX * 2.0);
    }

    #[test]
    fn debug_overlay_does_not_change_geometry() {
        let doc = two_stroke_doc();
        let mut engine = engine_for(&doc);
        engine.fit_to_viewport();

        let plain = record(&engine);
        engine.set_debug(true);
        let debug = record(&engine);

        let paths = |r: &Recorder| -> Vec<PathDesc> {
            r.strokes().filter_map(|d| d.path.clone()).collect()
        };
        assert_eq!(paths(&plain), paths(&debug), "same stroke geometry");
        let rects: Vec<&Drawn> = debug
            .drawn
            .iter()
            .filter(|d| matches!(d.op, DrawOp::StrokeRect { .. }))
            .collect();
        assert_eq!(rects.len(), 2, "document bounds and one layer");
        assert_eq!(rects[0].color, Some(DEBUG_COLOR));
        assert!(debug.texts().iter().any(|t| t.starts_with("scale ")));
    }
}
