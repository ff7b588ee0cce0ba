//! Shared test infrastructure for hsv-image integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hsv_image::{Rect, Rgba64, Rgba64Image};

/// Representative channel values spanning the full 16-bit domain, including
/// the 0/1 boundary and mid/high values.
pub const CHANNEL_SAMPLES: [u16; 14] = [
    0, 1, 2, 0x0F, 0xF0, 0xFF, 0x100, 0x0ABC, 0x1000, 0x7FFF, 0x8000, 0xCCCC, 0xFFFE, 0xFFFF,
];

/// Absolute-tolerance comparison for conversion components.
pub fn close(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Reference-color tolerance: 1% relative or 1e-6 absolute, whichever is
/// looser.
pub fn reference_close(actual: f64, expected: f64) -> bool {
    let tolerance = f64::max(expected.abs() * 0.01, 1e-6);
    (actual - expected).abs() <= tolerance
}

/// A 10x10 RGBA image over `rect` with deterministic per-pixel colors derived
/// from the coordinate offsets within the rectangle.
pub fn gradient_image(rect: Rect) -> Rgba64Image {
    let mut image = Rgba64Image::new(rect).unwrap();
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            let dx = (x - rect.x) as u16;
            let dy = (y - rect.y) as u16;
            image.set_pixel(
                x,
                y,
                Rgba64::opaque(dx * 2000, dy * 2000, (dx + dy) * 1000),
            );
        }
    }
    image
}
