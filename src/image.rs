//! Generic image capabilities and dense pixel containers.
//!
//! [`Image`] and [`ImageMut`] are the seams an external compositing routine
//! works through: bounds query, color-model query and per-pixel access.
//! [`Raster`] is the one dense row-major container behind both
//! [`HsvImage`] and [`Rgba64Image`]; the color model type parameter decides
//! the native pixel representation and how foreign colors are canonicalized
//! on write.

use crate::color::{Color, ColorModel, HsvModel, Rgba64Model};
use crate::types::{ImageError, Rect};

/// Trait for readable images with a finite rectangular bounds region.
pub trait Image {
    /// Native pixel type.
    type Pixel: Color;
    /// Color model canonicalizing foreign colors into [`Self::Pixel`].
    type Model: ColorModel<Pixel = Self::Pixel>;

    /// Returns the bounds rectangle.
    fn bounds(&self) -> Rect;

    /// Returns the image's color model.
    fn color_model(&self) -> Self::Model;

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics when `(x, y)` lies outside [`Image::bounds`].
    fn get(&self, x: i32, y: i32) -> Self::Pixel;
}

/// Trait for images that also support per-pixel writes.
pub trait ImageMut: Image {
    /// Stores `color` at `(x, y)`, canonicalized through the image's own
    /// color model.
    ///
    /// # Panics
    /// Panics when `(x, y)` lies outside [`Image::bounds`].
    fn set(&mut self, x: i32, y: i32, color: &impl Color);
}

/// A dense, row-major pixel grid for the color model `M`.
///
/// Owns its buffer exclusively; bounds are fixed at creation and the stride
/// equals the rectangle width. Pixel `(x, y)` lives at buffer index
/// `(y - bounds.y) * stride + (x - bounds.x)`.
#[derive(Clone)]
pub struct Raster<M: ColorModel> {
    pixels: Vec<M::Pixel>,
    stride: usize,
    rect: Rect,
}

impl<M: ColorModel> core::fmt::Debug for Raster<M>
where
    M::Pixel: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Raster")
            .field("rect", &self.rect)
            .field("stride", &self.stride)
            .field("pixels", &self.pixels)
            .finish()
    }
}

/// An image whose pixels are stored natively as [`crate::Hsv`] triples.
pub type HsvImage = Raster<HsvModel>;

/// An image of plain 16-bit RGBA pixels.
pub type Rgba64Image = Raster<Rgba64Model>;

impl<M> Raster<M>
where
    M: ColorModel + Default,
    M::Pixel: Default,
{
    /// Creates an image covering `rect`, zero-filled (black).
    ///
    /// Rejects rectangles with negative or unrepresentably large dimensions;
    /// zero-sized rectangles are valid and allocate nothing.
    pub fn new(rect: Rect) -> Result<Self, ImageError> {
        if rect.width < 0 || rect.height < 0 {
            return Err(ImageError::InvalidDimensions {
                width: rect.width,
                height: rect.height,
            });
        }
        let len = (rect.width as usize)
            .checked_mul(rect.height as usize)
            .ok_or(ImageError::InvalidDimensions {
                width: rect.width,
                height: rect.height,
            })?;
        Ok(Self {
            pixels: vec![M::Pixel::default(); len],
            stride: rect.width as usize,
            rect,
        })
    }
}

impl<M: ColorModel> Raster<M> {
    /// Returns the native pixel at `(x, y)` without conversion.
    ///
    /// # Panics
    /// Panics when `(x, y)` lies outside the bounds rectangle.
    pub fn pixel(&self, x: i32, y: i32) -> &M::Pixel {
        &self.pixels[self.index(x, y)]
    }

    /// Overwrites the native pixel at `(x, y)` without conversion.
    ///
    /// # Panics
    /// Panics when `(x, y)` lies outside the bounds rectangle.
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: M::Pixel) {
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }

    /// The full pixel buffer in row-major order.
    pub fn pixels(&self) -> &[M::Pixel] {
        &self.pixels
    }

    /// Buffer elements per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Maps a coordinate to its buffer index, faulting on out-of-bounds
    /// access. Never wraps or clamps; a bad coordinate is a caller bug.
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.rect.contains(x, y),
            "pixel ({x}, {y}) outside image bounds {:?}",
            self.rect
        );
        (y - self.rect.y) as usize * self.stride + (x - self.rect.x) as usize
    }
}

impl<M> Image for Raster<M>
where
    M: ColorModel + Default,
    M::Pixel: Default,
{
    type Pixel = M::Pixel;
    type Model = M;

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn color_model(&self) -> M {
        M::default()
    }

    fn get(&self, x: i32, y: i32) -> M::Pixel {
        self.pixels[self.index(x, y)]
    }
}

impl<M> ImageMut for Raster<M>
where
    M: ColorModel + Default,
    M::Pixel: Default,
{
    fn set(&mut self, x: i32, y: i32, color: &impl Color) {
        let pixel = self.color_model().convert(color);
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }
}

/// Copies pixels from `src` to `dst` through the generic color contract.
///
/// Every pixel in the intersection of the two bounds rectangles is read from
/// `src` and written through `dst`'s color model; coordinates outside the
/// overlap are untouched. The two images may use different color models.
pub fn copy_pixels<S: Image, D: ImageMut>(src: &S, dst: &mut D) {
    let Some(overlap) = src.bounds().intersect(dst.bounds()) else {
        return;
    };
    for y in overlap.y..overlap.y + overlap.height {
        for x in overlap.x..overlap.x + overlap.width {
            let pixel = src.get(x, y);
            dst.set(x, y, &pixel);
        }
    }
}
