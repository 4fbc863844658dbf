// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use plotview_engine::{Engine, PlotDocument};
use plotview_imaging_vello_cpu::VelloCpuImagingBackend;
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

use crate::{PixelBuffer, RenderError, RenderOptions};

fn checked_size(width: u32, height: u32) -> Result<(u16, u16), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::ZeroSize { width, height });
    }
    match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RenderError::TooLarge { width, height }),
    }
}

/// An [`Engine`] bound to a fixed-size offscreen image.
///
/// The engine viewport tracks the image size; configure everything else
/// through [`ImageRenderer::engine_mut`].
#[derive(Debug)]
pub struct ImageRenderer<'doc> {
    engine: Engine<'doc>,
    width: u16,
    height: u16,
}

impl<'doc> ImageRenderer<'doc> {
    /// Creates a renderer for `width` by `height` images with a fresh engine.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let (width, height) = checked_size(width, height)?;
        let mut engine = Engine::new();
        engine.resize(f64::from(width), f64::from(height));
        Ok(Self {
            engine,
            width,
            height,
        })
    }

    /// The engine.
    pub fn engine(&self) -> &Engine<'doc> {
        &self.engine
    }

    /// The engine, for changing document, view and style.
    pub fn engine_mut(&mut self) -> &mut Engine<'doc> {
        &mut self.engine
    }

    /// Image size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    /// Changes the image size and the engine viewport with it.
    ///
    /// On error the renderer is left unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let (width, height) = checked_size(width, height)?;
        self.width = width;
        self.height = height;
        self.engine.resize(f64::from(width), f64::from(height));
        Ok(())
    }

    /// Renders the current engine state.
    ///
    /// Each call rasterizes into a new context, so unchanged state gives
    /// identical pixels.
    pub fn render(&self) -> PixelBuffer {
        let settings = RenderSettings {
            render_mode: RenderMode::OptimizeSpeed,
            ..RenderSettings::default()
        };
        let mut ctx = RenderContext::new_with(self.width, self.height, settings);
        let mut backend = VelloCpuImagingBackend::new(&mut ctx);
        self.engine.render(&mut backend);
        if backend.layer_depth() != 0 {
            log::debug!("{} layers left open after render", backend.layer_depth());
        }

        let mut pixmap = Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        let data: Vec<u8> = pixmap
            .take_unpremultiplied()
            .into_iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect();
        PixelBuffer {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
        }
    }
}

/// Renders `document` into a `width` by `height` image in one call.
pub fn render_image(
    document: &dyn PlotDocument,
    (width, height): (u32, u32),
    options: &RenderOptions,
) -> Result<PixelBuffer, RenderError> {
    let mut renderer = ImageRenderer::new(width, height)?;
    let engine = renderer.engine_mut();
    engine.set_document(Some(document));
    options.apply(engine);
    Ok(renderer.render())
}
