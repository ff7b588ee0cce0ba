//! Pixel value types and the color-model abstraction.
//!
//! A [`Color`] is anything that can report itself as four 16-bit channel
//! weights; a [`ColorModel`] canonicalizes any such color into one model's
//! native pixel type. Both are the seams that let [`crate::image`] containers
//! exchange pixels without knowing each other's representation.

use crate::convert::{hsv_to_rgb, rgb_to_hsv};

/// Trait for generic color values.
///
/// Implementors report their red, green, blue and alpha channels as
/// non-negative weights scaled to the 16-bit range `0..=0xFFFF`.
pub trait Color: Copy {
    /// Returns the `(r, g, b, a)` channel weights.
    fn rgba(&self) -> (u16, u16, u16, u16);
}

/// Trait for color models.
///
/// A model is a stateless mapping from an arbitrary [`Color`] to the model's
/// own pixel representation. Canonicalization may lose information (HSV
/// discards alpha, for instance); it must never fail.
pub trait ColorModel {
    /// The model's native pixel type.
    type Pixel: Color;

    /// Canonicalizes `color` into this model's representation.
    fn convert<C: Color>(&self, color: &C) -> Self::Pixel;
}

/// A pixel in HSV space.
///
/// Hue is degrees in `[0, 360)`, saturation and value are fractions in
/// `[0, 1]`. No alpha is stored; as a generic [`Color`] an HSV pixel is
/// always fully opaque.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsv {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation fraction.
    pub saturation: f64,
    /// Value (brightness) fraction.
    pub value: f64,
}

impl Hsv {
    /// Creates an HSV pixel.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl Color for Hsv {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        let (r, g, b) = hsv_to_rgb(self.hue, self.saturation, self.value);
        (r, g, b, u16::MAX)
    }
}

/// The HSV color model: canonicalizes any color by converting its RGB
/// channels through [`rgb_to_hsv`]. Alpha is discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HsvModel;

impl ColorModel for HsvModel {
    type Pixel = Hsv;

    fn convert<C: Color>(&self, color: &C) -> Hsv {
        let (r, g, b, _) = color.rgba();
        let (hue, saturation, value) = rgb_to_hsv(r, g, b);
        Hsv::new(hue, saturation, value)
    }
}

/// A plain 16-bit RGBA pixel.
///
/// The interop partner for [`Hsv`]: generic routines use it to move pixels
/// in and out of HSV containers without further conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba64 {
    /// Creates an RGBA pixel.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque RGBA pixel.
    #[inline]
    pub const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, u16::MAX)
    }
}

impl Color for Rgba64 {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        (self.r, self.g, self.b, self.a)
    }
}

/// The plain RGBA color model: canonicalization keeps all four channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgba64Model;

impl ColorModel for Rgba64Model {
    type Pixel = Rgba64;

    fn convert<C: Color>(&self, color: &C) -> Rgba64 {
        let (r, g, b, a) = color.rgba();
        Rgba64::new(r, g, b, a)
    }
}
