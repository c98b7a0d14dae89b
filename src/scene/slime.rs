//! Slime phase: a breathing, shaded creature with orbiting droplets.

use std::f64::consts::PI;

use crate::color::{clamp_channel, Rgba};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, QuadraticBezier};
use crate::render::{blend, draw_ellipse, ellipse_half_width, fill_circle, fill_ellipse, Drawable};

use super::easing::{ease_in_out_sine, ease_out_quad};
use super::filter::{LowPass, SMOOTHING_FACTOR};
use super::layout::Layout;
use super::vertical_gradient;

const SEA_TOP: Rgba = Rgba::rgb(5, 15, 10);
const SEA_BOTTOM: Rgba = Rgba::rgb(20, 80, 60);
const RIM: Rgba = Rgba::new(180, 255, 220, 180);
const EYE: Rgba = Rgba::rgb(30, 40, 45);
const HIGHLIGHT: Rgba = Rgba::new(255, 255, 255, 200);
const MOUTH: Rgba = Rgba::rgb(40, 70, 45);

const BODY_ALPHA: u8 = 230;

/// Resting horizontal radius in design units.
pub const BASE_RX: f64 = 130.0;
/// Resting vertical radius in design units.
pub const BASE_RY: f64 = 110.0;

/// Droplets orbiting the body.
pub const DROPLETS: usize = 16;

/// Unsmoothed body radii at progress `u`, for base radii `(rx0, ry0)`.
#[must_use]
pub fn target_radii(u: f64, rx0: f64, ry0: f64) -> (f64, f64) {
    let pulse = 0.08 * (u * PI * 6.0).sin();
    (
        rx0 * (1.0 + pulse + 0.25 * ease_in_out_sine(u)),
        ry0 * (1.0 - pulse + 0.12 * ease_out_quad(u)),
    )
}

/// Shaded body color at normalized offset `(nx, ny)` from the centre,
/// including the off-centre inner light.
#[must_use]
pub fn body_shade(nx: f64, ny: f64) -> Rgba {
    let fall = 1.0 - nx.hypot(ny);
    let base = |inner: f64, outer: f64| (outer + (inner - outer) * fall) as i32;

    let lx = (nx - 0.2) / 1.2;
    let ly = (ny - 0.3) / 1.2;
    let light = (-(lx * lx + ly * ly) * 2.5).exp();
    let lit = |v: i32, gain: f64| clamp_channel(v + (gain * light) as i32);

    Rgba::new(
        lit(base(70.0, 20.0), 30.0),
        lit(base(180.0, 50.0), 40.0),
        lit(base(140.0, 30.0), 35.0),
        BODY_ALPHA,
    )
}

/// Slime phase state. The radii filters persist across frames and loops.
#[derive(Debug, Clone, PartialEq)]
pub struct Slime {
    base: (f64, f64),
    rx: LowPass,
    ry: LowPass,
}

impl Slime {
    /// Seed the radii at the resting size, which equals the first frame's
    /// target.
    #[must_use]
    pub fn new(layout: &Layout) -> Self {
        let base = (layout.len_f(BASE_RX), layout.len_f(BASE_RY));
        Self {
            base,
            rx: LowPass::new(base.0, SMOOTHING_FACTOR),
            ry: LowPass::new(base.1, SMOOTHING_FACTOR),
        }
    }

    /// Current smoothed radii.
    #[must_use]
    pub fn radii(&self) -> (f64, f64) {
        (self.rx.value(), self.ry.value())
    }

    /// Advance the filters and draw the phase at progress `u`.
    pub fn draw(&mut self, fb: &mut Framebuffer, layout: &Layout, u: f64) {
        vertical_gradient(fb, SEA_TOP, SEA_BOTTOM);

        let center = Point::new(
            layout.width() / 2,
            layout.height() / 2 + layout.y(30),
        );

        let (rx_target, ry_target) = target_radii(u, self.base.0, self.base.1);
        let rx = self.rx.update(rx_target).round() as i32;
        let ry = self.ry.update(ry_target).round() as i32;

        draw_body(fb, center, rx, ry);
        draw_face(fb, layout, center, rx, ry, u);
        draw_droplets(fb, layout, center, rx, ry, u);
    }
}

fn draw_body(fb: &mut Framebuffer, c: Point, rx: i32, ry: i32) {
    if rx > 0 && ry > 0 {
        for yy in -ry..=ry {
            let Some(xx) = ellipse_half_width(rx, ry, yy) else {
                continue;
            };
            let ny = f64::from(yy) / f64::from(ry);
            for xp in -xx..=xx {
                let nx = f64::from(xp) / f64::from(rx);
                blend(fb, c.x + xp, c.y + yy, body_shade(nx, ny));
            }
        }
    }

    draw_ellipse(fb, c.x, c.y, rx, ry, RIM);
}

fn draw_face(fb: &mut Framebuffer, layout: &Layout, c: Point, rx: i32, ry: i32, u: f64) {
    let (frx, fry) = (f64::from(rx), f64::from(ry));

    let ex = (frx * 0.40) as i32;
    let eye_y = c.y + (-fry * 0.18) as i32;
    let erx = (frx * 0.26) as i32;
    let ery = (fry * 0.20) as i32;
    fill_ellipse(fb, c.x - ex, eye_y, erx, ery, EYE);
    fill_ellipse(fb, c.x + ex, eye_y, erx, ery, EYE);

    let hx = (f64::from(c.x - ex) - f64::from(erx) * 0.15) as i32;
    let hy = (f64::from(eye_y) - f64::from(ery) * 0.15) as i32;
    let hr = layout.len(9) + (layout.len_f(3.0) * (u * 15.0).sin()) as i32;
    fill_circle(fb, hx, hy, hr, HIGHLIGHT);
    fill_circle(fb, hx + 2 * ex, hy, hr, HIGHLIGHT);

    let mw = (frx * (0.5 + 0.15 * (u * 4.0 * PI).sin())) as i32;
    let mh = (fry * 0.18) as i32;
    let mouth_y = c.y + (fry * 0.3) as i32;
    QuadraticBezier::new(
        Point::new(c.x - mw / 2, mouth_y),
        Point::new(c.x, mouth_y + mh),
        Point::new(c.x + mw / 2, mouth_y),
    )
    .draw(fb, MOUTH);
}

/// Alpha of droplet `i` at progress `u`.
#[must_use]
pub fn droplet_alpha(u: f64, i: usize) -> u8 {
    clamp_channel(110 + (110.0 * (u * 15.0 + i as f64).sin()) as i32)
}

fn draw_droplets(fb: &mut Framebuffer, layout: &Layout, c: Point, rx: i32, ry: i32, u: f64) {
    let gap = layout.len(18);
    for i in 0..DROPLETS {
        let phase = u * 15.0 + i as f64;
        let angle = i as f64 * (2.0 * PI / DROPLETS as f64) + u * 6.0;
        let px = c.x + (f64::from(rx + gap) * angle.cos()) as i32;
        let py = c.y + (f64::from(ry + gap) * angle.sin()) as i32;
        let pr = layout.len(6) + (layout.len_f(3.0) * phase.sin()) as i32;
        fill_circle(fb, px, py, pr, Rgba::new(180, 250, 200, droplet_alpha(u, i)));
    }
}
