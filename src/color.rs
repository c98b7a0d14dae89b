//! Color samples and packing.
//!
//! A sample holds four 8-bit channels. Once a sample has been written by the
//! compositor its color channels are premultiplied by coverage.

/// RGBA color with 8-bit components.
///
/// When used as a draw request, `a` is the source coverage handed to the
/// compositor rather than a stored opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Pack into a 32-bit `A<<24 | R<<16 | G<<8 | B` value.
    ///
    /// ```
    /// use pixelscene::color::Rgba;
    ///
    /// assert_eq!(Rgba::new(0x11, 0x22, 0x33, 0x44).to_argb(), 0x4411_2233);
    /// ```
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack a 32-bit `A<<24 | R<<16 | G<<8 | B` value.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }

    /// Scale the alpha channel by `factor` (clamped to `[0, 1]`), truncating.
    #[must_use]
    pub fn fade(self, factor: f64) -> Self {
        let a = (f64::from(self.a) * factor.clamp(0.0, 1.0)) as u8;
        self.with_alpha(a)
    }
}

/// Clamp an integer channel value into `[0, 255]`.
#[inline]
#[must_use]
pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_argb_packing() {
        let c = Rgba::new(10, 20, 30, 40);
        let packed = c.to_argb();
        assert_eq!(packed >> 24, 40);
        assert_eq!((packed >> 16) & 0xFF, 10);
        assert_eq!((packed >> 8) & 0xFF, 20);
        assert_eq!(packed & 0xFF, 30);
        assert_eq!(Rgba::from_argb(packed), c);
    }

    #[test]
    fn test_opaque_black_packs_to_alpha_only() {
        assert_eq!(Rgba::BLACK.to_argb(), 0xFF00_0000);
    }

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_lerp_boundaries() {
        let black = Rgba::BLACK;
        let white = Rgba::WHITE;

        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, -0.5), black);
        assert_eq!(black.lerp(white, 1.5), white);
    }

    #[test]
    fn test_fade() {
        assert_eq!(Rgba::WHITE.fade(0.7).a, 178);
        assert_eq!(Rgba::WHITE.fade(2.0).a, 255);
        assert_eq!(Rgba::WHITE.fade(-1.0).a, 0);
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-5), 0);
        assert_eq!(clamp_channel(128), 128);
        assert_eq!(clamp_channel(300), 255);
    }

    #[test]
    fn test_rgba_default() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }
}
