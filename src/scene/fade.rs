//! Fade phase: the frame goes to black.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::render::draw_hspan;

/// Alpha of the black overlay at progress `u`.
#[must_use]
pub fn fade_alpha(u: f64) -> u8 {
    (255.0 * u.clamp(0.0, 1.0)) as u8
}

/// Clear to opaque black, then blend a black overlay of alpha `255·u` over
/// every pixel.
pub fn draw(fb: &mut Framebuffer, u: f64) {
    fb.clear(Rgba::BLACK);

    let overlay = Rgba::BLACK.with_alpha(fade_alpha(u));
    let right = fb.width() as i32 - 1;
    for y in 0..fb.height() as i32 {
        draw_hspan(fb, 0, right, y, overlay);
    }
}
