// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use plotview_engine::{Document, Engine, Layer, ViewMode};
use plotview_imaging_ref::RefBackend;
use plotview_render::ImageRenderer;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// `layers` layers of `strokes` random polylines with `points` vertices each,
/// inside a 1000 x 1000 page.
fn random_document(layers: u32, strokes: usize, points: usize, seed: u64) -> Document {
    let mut rng = Lcg(seed);
    let mut doc = Document::new();
    for id in 1..=layers {
        let mut layer = Layer::new(id);
        for _ in 0..strokes {
            let stroke: Vec<Point> = (0..points)
                .map(|_| Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0))
                .collect();
            layer.add_stroke(stroke);
        }
        doc.add_layer(layer);
    }
    doc
}

fn bench_engine_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_ops");
    for strokes in [100_usize, 1_000] {
        let doc = random_document(4, strokes, 8, 42);
        let mut engine = Engine::new();
        engine.set_document(Some(&doc));
        engine.resize(1024.0, 768.0);
        engine.fit_to_viewport();
        engine.set_show_pen_up(true);

        for mode in ViewMode::ALL {
            engine.set_view_mode(mode);
            group.bench_function(format!("{mode:?}/{strokes}"), |b| {
                b.iter(|| {
                    let mut backend = RefBackend::default();
                    engine.render(&mut backend);
                    black_box(backend.ops().len())
                });
            });
        }
    }
    group.finish();
}

fn bench_cpu_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_render");
    group.sample_size(20);
    let doc = random_document(4, 250, 8, 7);
    for (w, h) in [(256_u32, 256_u32), (1024, 768)] {
        let mut renderer = ImageRenderer::new(w, h).expect("valid size");
        let engine = renderer.engine_mut();
        engine.set_document(Some(&doc));
        engine.fit_to_viewport();

        group.bench_function(format!("preview/{w}x{h}"), |b| {
            b.iter(|| black_box(renderer.render()));
        });
    }
    group.finish();
}

fn bench_fit_and_zoom(c: &mut Criterion) {
    let doc = random_document(8, 1_000, 8, 3);
    let mut engine = Engine::new();
    engine.set_document(Some(&doc));
    engine.resize(1024.0, 768.0);

    c.bench_function("fit_to_viewport/8x1000", |b| {
        b.iter(|| black_box(engine.fit_to_viewport()));
    });
    c.bench_function("zoom_pan", |b| {
        b.iter(|| {
            engine.zoom(black_box(1.1), 500.0, 400.0);
            engine.pan(black_box(3.0), -2.0);
            engine.zoom(1.0 / 1.1, 500.0, 400.0);
        });
    });
}

criterion_group!(benches, bench_engine_ops, bench_cpu_render, bench_fit_and_zoom);
criterion_main!(benches);
