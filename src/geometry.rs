//! Geometric value types for rasterization.
//!
//! All shapes live on the integer pixel grid; the rasterizer converts them to
//! pixel writes without any transform step.

/// A 2D point on the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        f64::from(self.x - other.x).hypot(f64::from(self.y - other.y))
    }

    /// Translate by an offset.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke radius; 0 draws a one-pixel Bresenham line.
    pub radius: i32,
}

impl Line {
    /// Create a new one-pixel line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            radius: 0,
        }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Set the stroke radius.
    #[must_use]
    pub const fn thick(mut self, radius: i32) -> Self {
        self.radius = radius;
        self
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A circle given by centre and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Centre point.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned ellipse given by centre and semi-axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ellipse {
    /// Centre point.
    pub center: Point,
    /// Horizontal semi-axis.
    pub rx: i32,
    /// Vertical semi-axis.
    pub ry: i32,
}

impl Ellipse {
    /// Create a new ellipse.
    #[must_use]
    pub const fn new(center: Point, rx: i32, ry: i32) -> Self {
        Self { center, rx, ry }
    }
}

/// A closed polygon. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    /// Vertices in drawing order.
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Axis-aligned rectangle with its top-left corner at `(x, y)`.
    #[must_use]
    pub fn rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(vec![
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

    /// Build a polygon from parallel coordinate slices.
    ///
    /// Extra coordinates in the longer slice are ignored.
    #[must_use]
    pub fn from_coords(xs: &[i32], ys: &[i32]) -> Self {
        Self::new(xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect())
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Translate every vertex by an offset.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.vertices.iter().map(|p| p.offset(dx, dy)).collect())
    }
}

/// A quadratic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadraticBezier {
    /// Start point.
    pub start: Point,
    /// Control point.
    pub control: Point,
    /// End point.
    pub end: Point,
}

impl QuadraticBezier {
    /// Create a new curve.
    #[must_use]
    pub const fn new(start: Point, control: Point, end: Point) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Sum of the two control-polygon segment lengths.
    #[must_use]
    pub fn control_length(&self) -> f64 {
        self.start.distance(self.control) + self.control.distance(self.end)
    }

    /// Evaluate the curve at parameter `t`.
    #[must_use]
    pub fn eval(&self, t: f64) -> (f64, f64) {
        let u = 1.0 - t;
        let (b0, b1, b2) = (u * u, 2.0 * u * t, t * t);
        let x = b0 * f64::from(self.start.x)
            + b1 * f64::from(self.control.x)
            + b2 * f64::from(self.end.x);
        let y = b0 * f64::from(self.start.y)
            + b1 * f64::from(self.control.y)
            + b2 * f64::from(self.end.y);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert_relative_eq!(p1.distance(p2), 5.0);
    }

    #[test]
    fn test_line_length() {
        let line = Line::from_coords(0, 0, 3, 4);
        assert_relative_eq!(line.length(), 5.0);
        assert_eq!(line.radius, 0);
        assert_eq!(line.thick(2).radius, 2);
    }

    #[test]
    fn test_polygon_rect() {
        let rect = Polygon::rect(10, 20, 5, 6);
        assert_eq!(rect.len(), 4);
        assert_eq!(rect.vertices[2], Point::new(15, 26));
    }

    #[test]
    fn test_polygon_from_coords_truncates() {
        let poly = Polygon::from_coords(&[0, 1, 2, 3], &[4, 5, 6]);
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.vertices[1], Point::new(1, 5));
    }

    #[test]
    fn test_polygon_offset() {
        let poly = Polygon::rect(0, 0, 2, 2).offset(3, -1);
        assert_eq!(poly.vertices[0], Point::new(3, -1));
    }

    #[test]
    fn test_bezier_eval_endpoints() {
        let curve = QuadraticBezier::new(Point::new(0, 0), Point::new(5, 10), Point::new(10, 0));
        assert_eq!(curve.eval(0.0), (0.0, 0.0));
        assert_eq!(curve.eval(1.0), (10.0, 0.0));
        let (x, y) = curve.eval(0.5);
        assert_relative_eq!(x, 5.0);
        assert_relative_eq!(y, 5.0);
    }

    #[test]
    fn test_bezier_control_length() {
        let curve = QuadraticBezier::new(Point::new(0, 0), Point::new(3, 4), Point::new(3, 0));
        assert_relative_eq!(curve.control_length(), 9.0);
    }
}
