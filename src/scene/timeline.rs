//! Looping three-phase timeline.

use crate::error::{Error, Result};

/// Phase boundaries in seconds: street until `street_end`, fade until
/// `fade_end`, slime until `loop_end`, then the loop restarts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    /// End of the street phase (T1).
    pub street_end: f64,
    /// End of the fade phase (T2).
    pub fade_end: f64,
    /// Loop length (T3).
    pub loop_end: f64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            street_end: 2.0,
            fade_end: 3.0,
            loop_end: 8.0,
        }
    }
}

impl Timeline {
    /// Create a validated timeline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeline`] unless `0 < street_end < fade_end < loop_end`
    /// and all three are finite.
    pub fn new(street_end: f64, fade_end: f64, loop_end: f64) -> Result<Self> {
        let timeline = Self {
            street_end,
            fade_end,
            loop_end,
        };
        timeline.validate()?;
        Ok(timeline)
    }

    /// Check the ordering of the boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeline`] for non-finite or unordered boundaries.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.street_end, self.fade_end, self.loop_end]
            .iter()
            .all(|v| v.is_finite());

        if finite
            && 0.0 < self.street_end
            && self.street_end < self.fade_end
            && self.fade_end < self.loop_end
        {
            Ok(())
        } else {
            Err(Error::InvalidTimeline {
                street_end: self.street_end,
                fade_end: self.fade_end,
                loop_end: self.loop_end,
            })
        }
    }

    /// Position inside the loop, in `[0, loop_end)`.
    ///
    /// Negative or non-finite clocks map to the loop start.
    #[must_use]
    pub fn wrap(&self, elapsed: f64) -> f64 {
        if elapsed.is_finite() && elapsed > 0.0 {
            elapsed.rem_euclid(self.loop_end)
        } else {
            0.0
        }
    }

    /// Select the phase for an elapsed time.
    #[must_use]
    pub fn phase_at(&self, elapsed: f64) -> Phase {
        Phase::at(self, elapsed)
    }
}

/// The active phase together with its normalized progress in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Night street with the approaching truck.
    Street(f64),
    /// Fade to black.
    Fade(f64),
    /// Breathing slime creature.
    Slime(f64),
}

impl Phase {
    /// Map an elapsed time onto the timeline.
    #[must_use]
    pub fn at(timeline: &Timeline, elapsed: f64) -> Self {
        let t = timeline.wrap(elapsed);
        let Timeline {
            street_end,
            fade_end,
            loop_end,
        } = *timeline;

        if t <= street_end {
            Self::Street(t / street_end)
        } else if t <= fade_end {
            Self::Fade((t - street_end) / (fade_end - street_end))
        } else {
            Self::Slime(((t - fade_end) / (loop_end - fade_end)).min(1.0))
        }
    }

    /// Normalized progress through the phase.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        match *self {
            Self::Street(u) | Self::Fade(u) | Self::Slime(u) => u,
        }
    }

    /// Phase name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Street(_) => "street",
            Self::Fade(_) => "fade",
            Self::Slime(_) => "slime",
        }
    }

    /// Whether two phases are the same variant, ignoring progress.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
