//! Animated scene sequencing.
//!
//! A [`SceneSequencer`] owns a fixed-size [`Framebuffer`] and, for each
//! elapsed time it is given, selects a [`Phase`] from its [`Timeline`],
//! redraws the whole frame for that phase and runs the phase's
//! post-processing.
//!
//! | Phase  | Content                                  | Post-processing      |
//! |--------|------------------------------------------|----------------------|
//! | Street | skyline, road, walking figure, truck     | vignette, film grain |
//! | Fade   | black overlay                            | vignette             |
//! | Slime  | shaded creature, eyes, smile, droplets   | none                 |
//!
//! # Example
//!
//! ```
//! use pixelscene::prelude::*;
//!
//! let mut scene = SceneSequencer::builder()
//!     .dimensions(64, 48)
//!     .build()
//!     .unwrap();
//!
//! let frame = scene.render_frame(0.5);
//! assert_eq!(frame.width(), 64);
//! assert_eq!(scene.phase_at(0.5).name(), "street");
//! ```

pub mod easing;
pub mod fade;
pub mod filter;
pub mod layout;
pub mod slime;
pub mod street;
mod timeline;

use std::num::NonZeroU32;

use batuta_common::display::WithDimensions;
use log::{debug, trace};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::render::{film_grain, vignette, GRAIN_SEED};

pub use filter::LowPass;
pub use layout::Layout;
pub use slime::Slime;
pub use timeline::{Phase, Timeline};

/// Default frame width and height.
pub const DEFAULT_SIZE: u32 = 600;

/// Default film grain strength (one sample per this many pixels).
pub const DEFAULT_GRAIN_STRENGTH: u32 = 10;

/// Overwrite every row with an opaque vertical gradient from `top` to
/// `bottom`.
pub(crate) fn vertical_gradient(fb: &mut Framebuffer, top: Rgba, bottom: Rgba) {
    let height = fb.height();
    for y in 0..height {
        let k = y as f32 / height as f32;
        let [r, g, b, _] = top.lerp(bottom, k).to_array();
        if let Some(row) = fb.row_mut(y) {
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&[r, g, b, 255]);
            }
        }
    }
}

/// Resolved scene configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Phase boundaries.
    pub timeline: Timeline,
    /// Film grain strength for the street phase.
    pub grain_strength: NonZeroU32,
    /// Film grain seed.
    pub grain_seed: u64,
    /// Whether the street and fade phases are vignetted.
    pub vignette: bool,
}

/// Builder for [`SceneSequencer`].
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    width: u32,
    height: u32,
    timeline: Timeline,
    grain_strength: u32,
    grain_seed: u64,
    vignette: bool,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            timeline: Timeline::default(),
            grain_strength: DEFAULT_GRAIN_STRENGTH,
            grain_seed: GRAIN_SEED,
            vignette: true,
        }
    }
}

impl SceneBuilder {
    /// Create a builder with the default 600×600 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phase boundaries.
    #[must_use]
    pub fn timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    /// Set the film grain strength. Larger values mean fewer samples.
    #[must_use]
    pub fn grain_strength(mut self, strength: u32) -> Self {
        self.grain_strength = strength;
        self
    }

    /// Set the film grain seed.
    #[must_use]
    pub fn grain_seed(mut self, seed: u64) -> Self {
        self.grain_seed = seed;
        self
    }

    /// Enable or disable the vignette pass.
    #[must_use]
    pub fn vignette(mut self, enabled: bool) -> Self {
        self.vignette = enabled;
        self
    }

    /// Validate the configuration and allocate the frame buffer.
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions, an unordered timeline, or a zero
    /// grain strength.
    pub fn build(self) -> Result<SceneSequencer> {
        self.timeline.validate()?;
        let grain_strength = NonZeroU32::new(self.grain_strength)
            .ok_or(Error::InvalidGrainStrength(self.grain_strength))?;

        let config = SceneConfig {
            width: self.width,
            height: self.height,
            timeline: self.timeline,
            grain_strength,
            grain_seed: self.grain_seed,
            vignette: self.vignette,
        };
        debug!("scene config: {config:?}");

        SceneSequencer::with_config(config)
    }
}

impl WithDimensions for SceneBuilder {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

/// Frame-by-frame scene engine.
#[derive(Debug, Clone)]
pub struct SceneSequencer {
    config: SceneConfig,
    layout: Layout,
    fb: Framebuffer,
    slime: Slime,
    current: Option<Phase>,
}

impl SceneSequencer {
    /// Start building a sequencer.
    #[must_use]
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// Create a sequencer with the default configuration.
    ///
    /// # Errors
    ///
    /// Never fails for the default configuration; the `Result` mirrors
    /// [`SceneBuilder::build`].
    pub fn new() -> Result<Self> {
        SceneBuilder::new().build()
    }

    fn with_config(config: SceneConfig) -> Result<Self> {
        let fb = Framebuffer::new(config.width, config.height)?;
        let layout = Layout::new(config.width, config.height);
        Ok(Self {
            config,
            layout,
            fb,
            slime: Slime::new(&layout),
            current: None,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Last rendered frame.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Phase for an elapsed time, without rendering.
    #[must_use]
    pub fn phase_at(&self, elapsed: f64) -> Phase {
        self.config.timeline.phase_at(elapsed)
    }

    /// Phase of the last rendered frame.
    #[must_use]
    pub const fn current_phase(&self) -> Option<Phase> {
        self.current
    }

    /// Smoothed slime radii `(rx, ry)` in pixels.
    #[must_use]
    pub fn slime_radii(&self) -> (f64, f64) {
        self.slime.radii()
    }

    /// Render the frame for `elapsed` seconds since the animation started.
    ///
    /// Every pixel is redrawn. The result depends only on `elapsed` and the
    /// slime filter history, which advances once per slime frame.
    pub fn render_frame(&mut self, elapsed: f64) -> &Framebuffer {
        let phase = self.phase_at(elapsed);
        if !self.current.is_some_and(|p| p.same_kind(&phase)) {
            debug!("entering {} phase at t={elapsed:.3}s", phase.name());
        }
        trace!("frame t={elapsed:.3}s phase={} u={:.3}", phase.name(), phase.progress());

        match phase {
            Phase::Street(u) => {
                street::draw(&mut self.fb, &self.layout, u);
                if self.config.vignette {
                    vignette(&mut self.fb);
                }
                film_grain(&mut self.fb, self.config.grain_strength, self.config.grain_seed);
            }
            Phase::Fade(u) => {
                fade::draw(&mut self.fb, u);
                if self.config.vignette {
                    vignette(&mut self.fb);
                }
            }
            Phase::Slime(u) => self.slime.draw(&mut self.fb, &self.layout, u),
        }

        self.current = Some(phase);
        &self.fb
    }
}
