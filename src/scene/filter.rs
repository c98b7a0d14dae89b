//! First-order low-pass filter for frame-to-frame smoothing.

/// Smoothing factor the scene engine uses for the slime radii.
pub const SMOOTHING_FACTOR: f64 = 0.25;

/// Exponential moving average: each update moves `factor` of the way from
/// the current value towards the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPass {
    value: f64,
    factor: f64,
}

impl LowPass {
    /// Create a filter seeded at `initial`.
    #[must_use]
    pub const fn new(initial: f64, factor: f64) -> Self {
        Self {
            value: initial,
            factor,
        }
    }

    /// Current filtered value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Feed a new target and return the filtered value.
    pub fn update(&mut self, target: f64) -> f64 {
        self.value += self.factor * (target - self.value);
        self.value
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_update_moves_towards_target(start in -1e3f64..1e3, target in -1e3f64..1e3) {
            let mut lp = LowPass::new(start, SMOOTHING_FACTOR);
            let next = lp.update(target);
            prop_assert!((target - next).abs() <= (target - start).abs() + 1e-9);
        }
    }
}
