//! Mapping from the 600×600 design canvas onto the actual buffer.
//!
//! Scene content is authored in design units. For a 600×600 buffer the
//! mapping is the identity; other sizes scale each axis independently, and
//! lengths (radii, offsets) by the smaller of the two factors.

use crate::geometry::{Point, Polygon};

/// Edge length of the square design canvas.
pub const DESIGN_SIZE: i32 = 600;

/// Scale factors for one buffer size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: i32,
    height: i32,
}

impl Layout {
    /// Layout for a `width`×`height` buffer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Buffer width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Buffer height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Map a design x coordinate.
    #[must_use]
    pub fn x(&self, v: i32) -> i32 {
        scale(v, self.width)
    }

    /// Map a design y coordinate.
    #[must_use]
    pub fn y(&self, v: i32) -> i32 {
        scale(v, self.height)
    }

    /// Map a design point.
    #[must_use]
    pub fn point(&self, x: i32, y: i32) -> Point {
        Point::new(self.x(x), self.y(y))
    }

    /// Map a design length.
    #[must_use]
    pub fn len(&self, v: i32) -> i32 {
        scale(v, self.width.min(self.height))
    }

    /// Map a fractional design length.
    #[must_use]
    pub fn len_f(&self, v: f64) -> f64 {
        v * f64::from(self.width.min(self.height)) / f64::from(DESIGN_SIZE)
    }

    /// Map a polygon given as parallel design coordinate slices.
    #[must_use]
    pub fn polygon(&self, xs: &[i32], ys: &[i32]) -> Polygon {
        Polygon::new(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| self.point(x, y))
                .collect(),
        )
    }

    /// Map a design rectangle.
    #[must_use]
    pub fn rect(&self, x: i32, y: i32, width: i32, height: i32) -> Polygon {
        self.polygon(
            &[x, x + width, x + width, x],
            &[y, y, y + height, y + height],
        )
    }
}

fn scale(v: i32, extent: i32) -> i32 {
    (i64::from(v) * i64::from(extent) / i64::from(DESIGN_SIZE)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_design_size() {
        let layout = Layout::new(600, 600);
        assert_eq!(layout.point(123, -45), Point::new(123, -45));
        assert_eq!(layout.len(22), 22);
        assert_eq!(layout.len_f(130.0), 130.0);
    }

    #[test]
    fn test_scales_each_axis() {
        let layout = Layout::new(300, 1200);
        assert_eq!(layout.point(100, 100), Point::new(50, 200));
        assert_eq!(layout.len(22), 11);
    }

    #[test]
    fn test_rect_corners() {
        let rect = Layout::new(1200, 1200).rect(10, 20, 5, 6);
        assert_eq!(rect.vertices[0], Point::new(20, 40));
        assert_eq!(rect.vertices[2], Point::new(30, 52));
    }
}
