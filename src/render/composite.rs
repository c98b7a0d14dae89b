//! Premultiplied alpha compositing.
//!
//! Implements the Porter-Duff "over" operator in 0..255 integer space. Every
//! primitive in [`super::primitives`] writes pixels through [`blend`].
//!
//! # References
//!
//! - Porter, T., & Duff, T. (1984). "Compositing Digital Images." SIGGRAPH '84.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Composite `src` (color plus coverage in `src.a`) over `dst`.
///
/// ```text
/// outA = a + dA*(255-a)/255
/// outC = (c*a + dC*(255-a))/255
/// ```
///
/// Division truncates toward zero. Inputs are `u8`, so every output channel
/// stays within `[0, 255]`.
#[inline]
#[must_use]
pub fn over(src: Rgba, dst: Rgba) -> Rgba {
    let a = u32::from(src.a);
    let inv = 255 - a;
    let channel = |s: u8, d: u8| ((u32::from(s) * a + u32::from(d) * inv) / 255) as u8;

    Rgba::new(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (a + u32::from(dst.a) * inv / 255) as u8,
    )
}

/// Blend `color` onto the pixel at `(x, y)`.
///
/// Does nothing when the coordinate is outside the buffer or `color.a == 0`.
#[inline]
pub fn blend(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba) {
    if color.a == 0 || !fb.contains(x, y) {
        return;
    }

    let (x, y) = (x as u32, y as u32);
    if let Some(dst) = fb.get_pixel(x, y) {
        fb.set_pixel(x, y, over(color, dst));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_replaces_destination() {
        let dst = Rgba::new(10, 200, 30, 77);
        assert_eq!(over(Rgba::new(1, 2, 3, 255), dst), Rgba::new(1, 2, 3, 255));
    }

    #[test]
    fn test_zero_alpha_is_identity() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(1, 1, Rgba::new(9, 8, 7, 6));
        blend(&mut fb, 1, 1, Rgba::new(255, 255, 255, 0));
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::new(9, 8, 7, 6)));
    }

    #[test]
    fn test_half_alpha_over_black() {
        let out = over(Rgba::new(255, 255, 255, 128), Rgba::BLACK);
        // (255*128 + 0*127)/255 = 128
        assert_eq!(out.r, 128);
        // 128 + 255*127/255 = 255
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_alpha_accumulates_on_transparent() {
        let out = over(Rgba::new(200, 100, 50, 100), Rgba::TRANSPARENT);
        assert_eq!(out.a, 100);
        // Premultiplied: 200*100/255 = 78
        assert_eq!(out.r, 78);
        assert_eq!(out.g, 39);
        assert_eq!(out.b, 19);
    }

    #[test]
    fn test_blend_out_of_bounds_is_noop() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        let before = fb.clone();
        blend(&mut fb, -1, 0, Rgba::RED);
        blend(&mut fb, 0, -1, Rgba::RED);
        blend(&mut fb, 4, 0, Rgba::RED);
        blend(&mut fb, 0, 4, Rgba::RED);
        assert_eq!(fb, before);
    }

    #[test]
    fn test_blend_writes_inside() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        blend(&mut fb, 2, 3, Rgba::BLACK.with_alpha(255));
        assert_eq!(fb.get_pixel(2, 3), Some(Rgba::BLACK));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_rgba() -> impl Strategy<Value = Rgba> {
        any::<[u8; 4]>().prop_map(Rgba::from_array)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_opaque_source_wins(src in any_rgba(), dst in any_rgba()) {
            let src = src.with_alpha(255);
            prop_assert_eq!(over(src, dst), src);
        }

        #[test]
        fn prop_transparent_source_via_blend_is_identity(src in any_rgba(), dst in any_rgba()) {
            let mut fb = Framebuffer::new(1, 1).unwrap();
            fb.set_pixel(0, 0, dst);
            blend(&mut fb, 0, 0, src.with_alpha(0));
            prop_assert_eq!(fb.get_pixel(0, 0), Some(dst));
        }

        #[test]
        fn prop_coverage_never_decreases(src in any_rgba(), dst in any_rgba()) {
            let out = over(src, dst);
            prop_assert!(out.a >= src.a);
            prop_assert!(out.a >= dst.a);
        }

        #[test]
        fn prop_channels_stay_between_source_and_destination(src in any_rgba(), dst in any_rgba()) {
            let out = over(src, dst);
            for (o, s, d) in [(out.r, src.r, dst.r), (out.g, src.g, dst.g), (out.b, src.b, dst.b)] {
                prop_assert!(o >= s.min(d));
                prop_assert!(o <= s.max(d));
            }
        }
    }
}
