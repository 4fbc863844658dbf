// Copyright 2026 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview Render: offscreen previews of plotter documents.
//!
//! [`ImageRenderer`] pairs a [`plotview_engine::Engine`] with the `vello_cpu`
//! rasterizer and returns unpremultiplied RGBA8 [`PixelBuffer`]s. For a single
//! image, [`render_image`] applies a set of [`RenderOptions`] and renders in
//! one call.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use plotview_engine::{Document, Layer};
//! use plotview_render::{RenderOptions, render_image};
//!
//! let doc = Document::new().with_layer(
//!     Layer::new(1).with_stroke([Point::new(0.0, 0.0), Point::new(50.0, 25.0)]),
//! );
//! let image = render_image(&doc, (64, 32), &RenderOptions::default()).unwrap();
//! assert_eq!((image.width, image.height), (64, 32));
//! assert_eq!(image.data.len(), 64 * 32 * 4);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod buffer;
mod options;
mod renderer;

pub use buffer::PixelBuffer;
pub use options::RenderOptions;
pub use renderer::{ImageRenderer, render_image};

/// Output size used when the caller has no preference.
pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (512, 512);

/// Errors reported when configuring an offscreen render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// One of the dimensions is zero.
    #[error("image size {width}x{height} has a zero dimension")]
    ZeroSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// One of the dimensions exceeds the rasterizer limit of `u16::MAX`.
    #[error("image size {width}x{height} exceeds {max} pixels per side", max = u16::MAX)]
    TooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}
