// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-level tests of the offscreen renderer.

use kurbo::Point;
use peniko::Color;
use plotview_engine::{Document, Layer, UnitType, ViewMode};
use plotview_render::{
    DEFAULT_IMAGE_SIZE, ImageRenderer, PixelBuffer, RenderError, RenderOptions, render_image,
};

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn diagonal(color: Color) -> Document {
    Document::new().with_layer(
        Layer::new(1)
            .with_color(color)
            .with_stroke([Point::new(10.0, 10.0), Point::new(90.0, 90.0)]),
    )
}

fn ink(buffer: &PixelBuffer) -> usize {
    buffer.pixels().filter(|px| *px != WHITE).count()
}

fn close(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 1)
}

fn no_rulers() -> RenderOptions {
    RenderOptions {
        show_rulers: false,
        ..RenderOptions::default()
    }
}

#[test]
fn fresh_renderer_draws_background_and_rulers() {
    let renderer = ImageRenderer::new(64, 48).expect("valid size");
    let image = renderer.render();
    assert_eq!((image.width, image.height), (64, 48));
    assert_eq!(image.data.len(), 64 * 48 * 4);
    assert_eq!(image.pixel(40, 40), Some(WHITE), "canvas is white");
    let band = image.pixel(40, 5).expect("inside the image");
    assert!(close(band, [235, 235, 235, 255]), "top ruler band, got {band:?}");
}

#[test]
fn render_is_idempotent() {
    let doc = diagonal(Color::from_rgba8(255, 0, 0, 255))
        .with_layer(Layer::new(2).with_stroke([Point::new(0.0, 90.0), Point::new(90.0, 0.0)]));
    let mut renderer = ImageRenderer::new(96, 96).expect("valid size");
    let engine = renderer.engine_mut();
    engine.set_document(Some(&doc));
    engine.fit_to_viewport();
    engine.set_show_points(true);
    engine.set_show_pen_up(true);
    engine.set_debug(true);

    let first = renderer.render();
    let second = renderer.render();
    assert_eq!(first, second, "unchanged state renders identical pixels");
}

#[test]
fn view_modes_render_differently() {
    let doc = diagonal(Color::from_rgba8(255, 0, 0, 255));
    let images = ViewMode::ALL.map(|view_mode| {
        let options = RenderOptions {
            view_mode,
            ..no_rulers()
        };
        render_image(&doc, (64, 64), &options).expect("valid size")
    });
    assert_ne!(images[0], images[1], "outline vs colorful");
    assert_ne!(images[1], images[2], "colorful vs preview");
    assert_ne!(images[0], images[2], "outline vs preview");
}

#[test]
fn preview_width_follows_pen_width() {
    let doc = diagonal(Color::BLACK);
    let thin = RenderOptions {
        pen_width: 1.0,
        ..no_rulers()
    };
    let thick = RenderOptions {
        pen_width: 10.0,
        ..no_rulers()
    };
    let thin = render_image(&doc, (64, 64), &thin).expect("valid size");
    let thick = render_image(&doc, (64, 64), &thick).expect("valid size");
    assert!(ink(&thick) > ink(&thin) * 2, "wider pen covers more pixels");
}

#[test]
fn preview_opacity_is_applied_once_per_layer() {
    // Two overlapping strokes in one layer must not darken each other.
    let doc = Document::new().with_layer(
        Layer::new(1)
            .with_color(Color::BLACK)
            .with_stroke([Point::new(0.0, 32.0), Point::new(64.0, 32.0)])
            .with_stroke([Point::new(64.0, 32.0), Point::new(0.0, 32.0)]),
    );
    let options = RenderOptions {
        pen_width: 10.0,
        pen_opacity: 0.5,
        scale: Some(1.0),
        ..no_rulers()
    };
    let image = render_image(&doc, (64, 64), &options).expect("valid size");
    let [r, g, b, a] = image.pixel(32, 32).expect("inside the image");
    assert!((120..=136).contains(&r), "half-transparent black over white, got {r}");
    assert_eq!((r, g, b, a), (r, r, r, 255));
}

#[test]
fn hidden_layers_leave_only_the_background() {
    let doc = diagonal(Color::BLACK);
    let mut with_doc = ImageRenderer::new(80, 60).expect("valid size");
    let engine = with_doc.engine_mut();
    engine.set_document(Some(&doc));
    engine.fit_to_viewport();
    let (scale, origin) = (engine.scale(), engine.origin());
    engine.toggle_layer_visibility(1);

    let mut without_doc = ImageRenderer::new(80, 60).expect("valid size");
    let engine = without_doc.engine_mut();
    engine.set_scale(scale);
    engine.set_origin(origin);

    assert_eq!(with_doc.render(), without_doc.render());
}

#[test]
fn points_and_pen_up_add_ink() {
    let doc = Document::new().with_layer(
        Layer::new(1)
            .with_stroke([Point::new(10.0, 10.0), Point::new(20.0, 10.0)])
            .with_stroke([Point::new(80.0, 80.0), Point::new(90.0, 80.0)]),
    );
    let plain = render_image(&doc, (100, 100), &no_rulers()).expect("valid size");
    let points = RenderOptions {
        show_points: true,
        ..no_rulers()
    };
    let pen_up = RenderOptions {
        show_pen_up: true,
        ..no_rulers()
    };
    let points = render_image(&doc, (100, 100), &points).expect("valid size");
    let pen_up = render_image(&doc, (100, 100), &pen_up).expect("valid size");
    assert!(ink(&points) > ink(&plain), "vertex markers");
    assert!(ink(&pen_up) > ink(&plain), "travel between the strokes");
}

#[test]
fn ruler_unit_changes_the_rulers() {
    let doc = Document::new();
    let images = UnitType::ALL.map(|unit_type| {
        let options = RenderOptions {
            unit_type,
            ..RenderOptions::default()
        };
        render_image(&doc, (200, 200), &options).expect("valid size")
    });
    assert_ne!(images[0], images[1], "px vs mm");
    assert_ne!(images[1], images[2], "mm vs in");
    assert_ne!(images[0], images[2], "px vs in");
}

#[test]
fn invalid_sizes_are_rejected() {
    assert_eq!(
        ImageRenderer::new(0, 10).map(|_| ()),
        Err(RenderError::ZeroSize {
            width: 0,
            height: 10
        })
    );
    let doc = Document::new();
    assert_eq!(
        render_image(&doc, (70_000, 1), &RenderOptions::default()),
        Err(RenderError::TooLarge {
            width: 70_000,
            height: 1
        })
    );
    let (w, h) = DEFAULT_IMAGE_SIZE;
    assert!(ImageRenderer::new(w, h).is_ok(), "default size is valid");
}
