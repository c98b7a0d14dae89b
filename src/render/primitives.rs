//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for the fixed primitive set. Each
//! algorithm is split into a point generator (pure, testable) and a drawing
//! function that feeds the points through [`blend`].

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, Ellipse, Line, Point, Polygon, QuadraticBezier};

use super::composite::blend;

/// Minimum number of samples for a quadratic curve.
pub const BEZIER_MIN_STEPS: usize = 12;

/// Control-polygon length (pixels) covered by one curve sample.
pub const BEZIER_PIXELS_PER_STEP: f64 = 6.0;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba);

    /// Draw only the outline of this primitive, if it has a distinct one.
    fn draw_outline(&self, fb: &mut Framebuffer, color: Rgba) {
        self.draw(fb, color);
    }
}

/// Round half up, so `-2.5` becomes `-2`.
#[inline]
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Iterator over the pixels of a Bresenham line, both endpoints included.
///
/// Stepping uses signed directions and a single error accumulator, so the
/// same pixels are produced regardless of which endpoint comes first for
/// axis-aligned and 45° lines.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LinePoints {
    /// Create the pixel sequence from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let current = Point::new(self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.x1 - self.x).abs().max((self.y1 - self.y).abs()) as usize + 1;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Draw a one-pixel line using Bresenham's algorithm.
///
/// Blends exactly one pixel per step, including both endpoints. A zero-length
/// line blends a single pixel.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    for p in LinePoints::new(x0, y0, x1, y1) {
        blend(fb, p.x, p.y, color);
    }
}

/// Draw a thick line by stamping a filled disc at every Bresenham step.
pub fn draw_thick_line(
    fb: &mut Framebuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: Rgba,
) {
    for p in LinePoints::new(x0, y0, x1, y1) {
        fill_circle(fb, p.x, p.y, radius, color);
    }
}

/// Blend a horizontal run of pixels from `x1` to `x2` inclusive.
///
/// Reversed ends are swapped; the run is clipped to the buffer.
pub fn draw_hspan(fb: &mut Framebuffer, x1: i32, x2: i32, y: i32, color: Rgba) {
    if y < 0 || y >= fb.height() as i32 {
        return;
    }
    let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    if x2 < 0 || x1 >= fb.width() as i32 {
        return;
    }

    let x_start = x1.max(0);
    let x_end = x2.min(fb.width() as i32 - 1);
    for x in x_start..=x_end {
        blend(fb, x, y, color);
    }
}

impl Drawable for Line {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        let (s, e) = (self.start, self.end);
        if self.radius > 0 {
            draw_thick_line(fb, s.x, s.y, e.x, e.y, self.radius, color);
        } else {
            draw_line(fb, s.x, s.y, e.x, e.y, color);
        }
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Points of one octant of a midpoint circle, from `(0, r)` towards the
/// diagonal.
///
/// Each point satisfies `|x² + y² - r²| <= r`. Returns an empty vector for a
/// negative radius and `[(0, 0)]` for radius zero.
#[must_use]
pub fn circle_octant_points(radius: i32) -> Vec<Point> {
    let mut points = Vec::new();
    if radius < 0 {
        return points;
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;
    while x <= y {
        points.push(Point::new(x, y));
        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
    points
}

/// Draw a filled circle using the midpoint algorithm.
///
/// Each generated octant point emits four horizontal spans covering the
/// mirrored octants. Spans are blended as generated, so with partial alpha
/// a few rows near the diagonal receive more than one blend.
pub fn fill_circle(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    for p in circle_octant_points(radius) {
        draw_hspan(fb, cx - p.x, cx + p.x, cy + p.y, color);
        draw_hspan(fb, cx - p.x, cx + p.x, cy - p.y, color);
        draw_hspan(fb, cx - p.y, cx + p.y, cy + p.x, color);
        draw_hspan(fb, cx - p.y, cx + p.y, cy - p.x, color);
    }
}

/// Draw a circle outline by plotting the eight octant reflections.
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    for p in circle_octant_points(radius) {
        let (x, y) = (p.x, p.y);
        blend(fb, cx + x, cy + y, color);
        blend(fb, cx - x, cy + y, color);
        blend(fb, cx + x, cy - y, color);
        blend(fb, cx - x, cy - y, color);
        blend(fb, cx + y, cy + x, color);
        blend(fb, cx - y, cy + x, color);
        blend(fb, cx + y, cy - x, color);
        blend(fb, cx - y, cy - x, color);
    }
}

impl Drawable for Circle {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        fill_circle(fb, self.center.x, self.center.y, self.radius, color);
    }

    fn draw_outline(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_circle(fb, self.center.x, self.center.y, self.radius, color);
    }
}

// ============================================================================
// Ellipse Drawing
// ============================================================================

/// Points of the first quadrant of a midpoint ellipse, from `(0, ry)` down to
/// the x axis.
///
/// Region 1 runs while the doubled running terms satisfy `px < py`
/// (`2·x·ry² < 2·y·rx²`, slope magnitude below one); region 2 runs until
/// `y` drops below zero. Accumulators are 64-bit so radii in the thousands
/// do not overflow.
///
/// For very flat ellipses (e.g. `rx = 8, ry = 1`) the last point can stop
/// short of `(rx, 0)`; this is inherent to the two-region decision rule.
#[must_use]
pub fn ellipse_quadrant_points(rx: i32, ry: i32) -> Vec<Point> {
    let mut points = Vec::new();
    if rx < 0 || ry < 0 {
        return points;
    }

    let rx2 = i64::from(rx) * i64::from(rx);
    let ry2 = i64::from(ry) * i64::from(ry);

    let mut x: i64 = 0;
    let mut y: i64 = i64::from(ry);
    let mut px: i64 = 0;
    let mut py: i64 = 2 * rx2 * y;

    // Region 1
    let mut p = (ry2 as f64 - (rx2 * y) as f64 + 0.25 * rx2 as f64 + 0.5).floor() as i64;
    while px < py {
        points.push(Point::new(x as i32, y as i32));
        x += 1;
        px += 2 * ry2;
        if p < 0 {
            p += ry2 + px;
        } else {
            y -= 1;
            py -= 2 * rx2;
            p += ry2 + px - py;
        }
    }

    // Region 2
    let xf = x as f64 + 0.5;
    let yf = (y - 1) as f64;
    p = (ry2 as f64 * xf * xf + rx2 as f64 * yf * yf - (rx2 * ry2) as f64 + 0.5).floor() as i64;
    while y >= 0 {
        points.push(Point::new(x as i32, y as i32));
        y -= 1;
        py -= 2 * rx2;
        if p > 0 {
            p += rx2 - py;
        } else {
            x += 1;
            px += 2 * ry2;
            p += rx2 - py + px;
        }
    }

    points
}

/// Draw an ellipse outline using the two-region midpoint algorithm.
pub fn draw_ellipse(fb: &mut Framebuffer, xc: i32, yc: i32, rx: i32, ry: i32, color: Rgba) {
    for p in ellipse_quadrant_points(rx, ry) {
        blend(fb, xc + p.x, yc + p.y, color);
        blend(fb, xc - p.x, yc + p.y, color);
        blend(fb, xc + p.x, yc - p.y, color);
        blend(fb, xc - p.x, yc - p.y, color);
    }
}

/// Half-width of a filled ellipse on row offset `yy`, or `None` if the row
/// lies outside the ellipse.
///
/// `floor(rx · sqrt(1 - yy²/ry²))`. A zero `ry` is treated as a flat
/// ellipse: only row 0 exists and it spans the full `rx`.
#[must_use]
pub fn ellipse_half_width(rx: i32, ry: i32, yy: i32) -> Option<i32> {
    if ry == 0 {
        return (yy == 0).then_some(rx);
    }
    let (fy, fry) = (f64::from(yy), f64::from(ry));
    let t = 1.0 - (fy * fy) / (fry * fry);
    if t < 0.0 {
        return None;
    }
    Some((f64::from(rx) * t.sqrt()).floor() as i32)
}

/// Draw a filled ellipse with one analytic span per row.
pub fn fill_ellipse(fb: &mut Framebuffer, xc: i32, yc: i32, rx: i32, ry: i32, color: Rgba) {
    if rx < 0 || ry < 0 {
        return;
    }
    for yy in -ry..=ry {
        if let Some(xx) = ellipse_half_width(rx, ry, yy) {
            draw_hspan(fb, xc - xx, xc + xx, yc + yy, color);
        }
    }
}

impl Drawable for Ellipse {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        fill_ellipse(fb, self.center.x, self.center.y, self.rx, self.ry, color);
    }

    fn draw_outline(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_ellipse(fb, self.center.x, self.center.y, self.rx, self.ry, color);
    }
}

// ============================================================================
// Polygon Fill
// ============================================================================

/// Sorted x positions where the polygon's edges cross the horizontal line
/// `y = scan_y`.
///
/// An edge `(i, i+1 mod n)` contributes when it straddles the line under the
/// half-open test `(y0 < y && y1 >= y) || (y1 < y && y0 >= y)`. Horizontal
/// edges never pass, so the interpolation never divides by zero.
#[must_use]
pub fn scanline_crossings(vertices: &[Point], scan_y: f64) -> Vec<f64> {
    let n = vertices.len();
    let mut crossings = Vec::with_capacity(n);

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let (x0, y0) = (f64::from(a.x), f64::from(a.y));
        let (x1, y1) = (f64::from(b.x), f64::from(b.y));

        if (y0 < scan_y && y1 >= scan_y) || (y1 < scan_y && y0 >= scan_y) {
            crossings.push(x0 + (scan_y - y0) * (x1 - x0) / (y1 - y0));
        }
    }

    crossings.sort_by(f64::total_cmp);
    crossings
}

/// Fill a polygon with the scanline algorithm under the even-odd rule.
///
/// Each pixel row is sampled at its centre. Sorted crossings are paired
/// (0-1, 2-3, ...) and every pair covers the pixels whose centres fall in
/// `[xa, xb)`, so a square from `(0,0)` to `(4,4)` covers exactly the 4×4
/// block at the origin. Self-intersecting polygons need no special casing.
/// Fewer than three vertices paint nothing.
pub fn fill_polygon(fb: &mut Framebuffer, vertices: &[Point], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let (mut ymin, mut ymax) = (i32::MAX, i32::MIN);
    for v in vertices {
        ymin = ymin.min(v.y);
        ymax = ymax.max(v.y);
    }
    let ymin = ymin.max(0);
    let ymax = ymax.min(fb.height() as i32 - 1);

    for y in ymin..=ymax {
        let crossings = scanline_crossings(vertices, f64::from(y) + 0.5);
        for pair in crossings.chunks_exact(2) {
            let x_start = (pair[0] - 0.5).ceil() as i32;
            let x_end = (pair[1] - 0.5).ceil() as i32 - 1;
            if x_start <= x_end {
                draw_hspan(fb, x_start, x_end, y, color);
            }
        }
    }
}

impl Drawable for Polygon {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        fill_polygon(fb, &self.vertices, color);
    }

    fn draw_outline(&self, fb: &mut Framebuffer, color: Rgba) {
        let n = self.vertices.len();
        for i in 0..n {
            let (a, b) = (self.vertices[i], self.vertices[(i + 1) % n]);
            draw_line(fb, a.x, a.y, b.x, b.y, color);
        }
    }
}

// ============================================================================
// Quadratic Bézier
// ============================================================================

/// Number of samples for a curve: `max(12, floor(control_length / 6))`.
#[must_use]
pub fn bezier_steps(curve: &QuadraticBezier) -> usize {
    ((curve.control_length() / BEZIER_PIXELS_PER_STEP) as usize).max(BEZIER_MIN_STEPS)
}

/// Sample a quadratic Bézier at uniform parameters, rounded to pixels.
///
/// The first element is `start` and the last is `end`; `steps + 1` points
/// in total.
#[must_use]
pub fn quadratic_bezier_points(start: Point, control: Point, end: Point) -> Vec<Point> {
    let curve = QuadraticBezier::new(start, control, end);
    let steps = bezier_steps(&curve);

    let mut points = Vec::with_capacity(steps + 1);
    points.push(start);
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let (x, y) = curve.eval(t);
        points.push(Point::new(round_half_up(x), round_half_up(y)));
    }
    points
}

/// Draw a quadratic Bézier as a polyline of Bresenham segments.
pub fn draw_quadratic_bezier(
    fb: &mut Framebuffer,
    start: Point,
    control: Point,
    end: Point,
    color: Rgba,
) {
    let points = quadratic_bezier_points(start, control, end);
    for seg in points.windows(2) {
        draw_line(fb, seg[0].x, seg[0].y, seg[1].x, seg[1].y, color);
    }
}

impl Drawable for QuadraticBezier {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        draw_quadratic_bezier(fb, self.start, self.control, self.end, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
