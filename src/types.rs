//! Core geometry types and errors.

use thiserror::Error;

/// A rectangular bounds region: an origin plus width and height.
///
/// The origin need not be `(0, 0)`. Coordinates are integer pixel positions;
/// a pixel `(x, y)` belongs to the rectangle when `x` is in
/// `[origin x, origin x + width)` and `y` is in `[origin y, origin y + height)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Origin x coordinate.
    pub x: i32,
    /// Origin y coordinate.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its origin and size.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns whether the pixel coordinate lies within the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        (x as i64) >= (self.x as i64)
            && (x as i64) < (self.x as i64) + (self.width as i64)
            && (y as i64) >= (self.y as i64)
            && (y as i64) < (self.y as i64) + (self.height as i64)
    }

    /// Returns whether the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of pixels covered. Zero for empty rectangles.
    #[inline]
    pub const fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    /// Intersects two rectangles.
    ///
    /// Returns `None` when they share no pixels.
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (i64::from(self.x) + i64::from(self.width))
            .min(i64::from(other.x) + i64::from(other.width));
        let y1 = (i64::from(self.y) + i64::from(self.height))
            .min(i64::from(other.y) + i64::from(other.height));
        let width = x1 - i64::from(x0);
        let height = y1 - i64::from(y0);
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Rect::new(x0, y0, width as i32, height as i32))
    }
}

/// Image construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Bounds rectangle has a negative or unrepresentably large size.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_origin_and_exclusive_edges() {
        let rect = Rect::new(-2, 3, 4, 2);
        assert!(rect.contains(-2, 3));
        assert!(rect.contains(1, 4));
        assert!(!rect.contains(2, 4)); // one past the right edge
        assert!(!rect.contains(-3, 3));
        assert!(!rect.contains(0, 5));
    }

    #[test]
    fn area_of_empty_rect_is_zero() {
        assert_eq!(Rect::new(0, 0, 0, 10).area(), 0);
        assert_eq!(Rect::new(0, 0, -3, 10).area(), 0);
        assert_eq!(Rect::new(5, 5, 3, 4).area(), 12);
    }

    #[test]
    fn intersect_overlapping_rects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -5, 10, 10);
        assert_eq!(a.intersect(b), Some(Rect::new(5, 0, 5, 5)));
    }

    #[test]
    fn intersect_disjoint_rects_is_none() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(4, 0, 4, 4); // edges touch, no shared pixels
        assert_eq!(a.intersect(b), None);
    }
}
