//! Easing curves over `t ∈ [0, 1]`.

use std::f64::consts::PI;

/// Quadratic ease-out: fast start, slow finish.
#[inline]
#[must_use]
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Sinusoidal ease-in-out.
#[inline]
#[must_use]
pub fn ease_in_out_sine(t: f64) -> f64 {
    0.5 * (1.0 - (PI * t).cos())
}
