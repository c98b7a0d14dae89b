//! Rasterization and compositing.
//!
//! Every primitive writes pixels through [`composite::blend`], so all scene
//! content is alpha-composited with the same premultiplied "over" rule.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer line stepping, plus a disc-stamped thick line
//! - **Midpoint Circle**: filled and outlined circles from one octant
//! - **Midpoint Ellipse**: two-region outline, analytic per-row fill
//! - **Scanline Polygon Fill**: even-odd spans sampled at pixel centres
//! - **Quadratic Bézier**: uniform parameter sampling joined by line segments
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Porter, T., & Duff, T. (1984). "Compositing Digital Images." SIGGRAPH '84.
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

pub mod composite;
pub mod post;
mod primitives;

pub use composite::{blend, over};
pub use post::{film_grain, vignette, vignette_alpha, GrainRng, GRAIN_SEED};
pub use primitives::{
    bezier_steps, circle_octant_points, draw_circle, draw_ellipse, draw_hspan, draw_line,
    draw_quadratic_bezier, draw_thick_line, ellipse_half_width, ellipse_quadrant_points,
    fill_circle, fill_ellipse, fill_polygon, quadratic_bezier_points, scanline_crossings,
    Drawable, LinePoints, BEZIER_MIN_STEPS, BEZIER_PIXELS_PER_STEP,
};
