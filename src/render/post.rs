//! Frame-wide post-processing passes.
//!
//! Both passes are order-dependent: they must run after all scene content of
//! the frame has been drawn.

use std::num::NonZeroU32;

use crate::color::{clamp_channel, Rgba};
use crate::framebuffer::Framebuffer;

use super::composite::blend;

/// Seed used by the scene engine for film grain.
pub const GRAIN_SEED: u64 = 1234;

/// Darkening alpha at the buffer corners.
pub const VIGNETTE_MAX_ALPHA: f64 = 180.0;

/// Falloff exponent of the vignette curve.
pub const VIGNETTE_EXPONENT: f64 = 2.2;

/// Largest absolute grain delta added to a channel.
pub const GRAIN_AMPLITUDE: i32 = 10;

/// Small deterministic pseudo-random generator for film grain.
///
/// A 64-bit linear congruential generator with Knuth's MMIX constants.
/// The sequence depends only on the seed, so grain is reproducible across
/// runs and platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrainRng {
    state: u64,
}

impl GrainRng {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    const INCREMENT: u64 = 1_442_695_040_888_963_407;

    /// Create a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: seed };
        rng.step();
        rng
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// Next 32 random bits (the high half of the state).
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.step();
        (self.state >> 32) as u32
    }

    /// Uniform value in `[0, bound)` by multiply-shift. Returns 0 for a zero
    /// bound.
    #[inline]
    pub fn below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }
}

/// Vignette darkening alpha for pixel `(x, y)` in a `width`×`height` buffer.
///
/// `round(180 · d^2.2)` where `d` is the distance to the centre
/// `(width/2, height/2)` divided by the centre-to-corner distance. Zero at
/// the centre, 180 at the origin corner.
#[must_use]
pub fn vignette_alpha(x: u32, y: u32, width: u32, height: u32) -> u8 {
    let (cx, cy) = (f64::from(width / 2), f64::from(height / 2));
    let max_dist = cx.hypot(cy);
    if max_dist == 0.0 {
        return 0;
    }

    let d = (f64::from(x) - cx).hypot(f64::from(y) - cy) / max_dist;
    (VIGNETTE_MAX_ALPHA * d.powf(VIGNETTE_EXPONENT))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Darken the frame radially by blending black towards the edges.
pub fn vignette(fb: &mut Framebuffer) {
    let (w, h) = (fb.width(), fb.height());
    for y in 0..h {
        for x in 0..w {
            let a = vignette_alpha(x, y, w, h);
            if a > 0 {
                blend(fb, x as i32, y as i32, Rgba::BLACK.with_alpha(a));
            }
        }
    }
}

/// Add film grain: `W*H/strength` random samples, each adding a delta in
/// `[-10, 10]` to the color channels of an existing pixel.
///
/// The add is direct (not blended) and clamps each channel; alpha is left
/// untouched. Sampling is with replacement, so a pixel may be hit several
/// times or not at all.
pub fn film_grain(fb: &mut Framebuffer, strength: NonZeroU32, seed: u64) {
    let (w, h) = (fb.width(), fb.height());
    let samples = fb.pixel_count() / strength.get() as usize;
    let span = (2 * GRAIN_AMPLITUDE + 1) as u32;
    let mut rng = GrainRng::new(seed);

    for _ in 0..samples {
        let x = rng.below(w);
        let y = rng.below(h);
        let k = rng.below(span) as i32 - GRAIN_AMPLITUDE;

        if let Some(c) = fb.get_pixel(x, y) {
            let noisy = Rgba::new(
                clamp_channel(i32::from(c.r) + k),
                clamp_channel(i32::from(c.g) + k),
                clamp_channel(i32::from(c.b) + k),
                c.a,
            );
            fb.set_pixel(x, y, noisy);
        }
    }
}
