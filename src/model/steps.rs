//! Step bounds (minutes added per attempt)

use rand::Rng;

/// Default lower step bound used by the console mode
pub const DEFAULT_MIN_STEP_MINUTES: u32 = 100;

/// Default upper step bound used by the console mode
pub const DEFAULT_MAX_STEP_MINUTES: u32 = 3000;

/// Closed interval `[min, max]` of minutes a single step may take
///
/// Construction through [`StepBounds::new`] guarantees `min <= max`.
/// A minimum of 0 is allowed and yields same-timestamp commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBounds {
    min: u32,
    max: u32,
}

impl Default for StepBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_STEP_MINUTES,
            max: DEFAULT_MAX_STEP_MINUTES,
        }
    }
}

impl StepBounds {
    /// Create bounds, returning None when `min > max`
    pub fn new(min: u32, max: u32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Check whether `step` lies inside the bounds
    pub fn contains(&self, step: u32) -> bool {
        (self.min..=self.max).contains(&step)
    }

    /// Draw a step uniformly from `[min, max]`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}
