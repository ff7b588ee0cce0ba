#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`rgb_to_hsv` / `hsv_to_rgb`**: pure conversion functions between 16-bit
//!   RGB channels and (hue, saturation, value) triples
//! - **`Hsv`**: an HSV pixel that reports itself as an opaque generic color
//! - **`Color`**: trait for anything exposing 16-bit RGBA channel weights
//! - **`ColorModel`**: trait canonicalizing a generic color into a model's
//!   native pixel type (`HsvModel`, `Rgba64Model`)
//! - **`Image` / `ImageMut`**: the generic image capability set — bounds,
//!   color model, per-pixel get/set
//! - **`HsvImage`**: a dense image container storing pixels natively in HSV;
//!   `Rgba64Image` is the plain-RGBA counterpart for interop
//! - **`copy_pixels`**: moves pixels between images of different color models
//!   through the generic contract
//!
//! Conversions use `f64` throughout, so every 16-bit RGB triple round-trips
//! through HSV exactly.

pub mod color;
pub mod convert;
pub mod image;
pub mod types;

pub use color::{Color, ColorModel, Hsv, HsvModel, Rgba64, Rgba64Model};
pub use convert::{CHANNEL_MAX, hsv_to_rgb, rgb_to_hsv};
pub use image::{HsvImage, Image, ImageMut, Raster, Rgba64Image, copy_pixels};
pub use types::{ImageError, Rect};

/// The zero HSV pixel (black). Fresh [`HsvImage`] buffers are filled with it.
pub const BLACK: Hsv = Hsv::new(0.0, 0.0, 0.0);
