use serde::Serialize;

use crate::constants::PROGRESS_STEP;

/// Progress values this close to 1 count as finished, so that fifty 0.02 steps
/// land exactly on 1 despite rounding in the running sum.
const COMPLETION_TOLERANCE: f64 = 1e-9;

/// Linear progress from an initial to a final state.
///
/// The animator only knows how far along it is; the states it interpolates
/// between are owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Animator {
    progress: f64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction completed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// The animator one step later. A non-finite `increment` leaves it where it is.
    pub fn advanced(self, increment: f64) -> Self {
        let increment = if increment.is_finite() { increment } else { 0.0 };
        let next = (self.progress + increment).clamp(0.0, 1.0);
        let progress = if 1.0 - next < COMPLETION_TOLERANCE {
            1.0
        } else {
            next
        };
        Self { progress }
    }

    /// Advance by the standard per-frame step and return the new progress.
    pub fn tick(&mut self) -> f64 {
        *self = self.advanced(PROGRESS_STEP);
        self.progress
    }

    /// `initial + progress·(final − initial)`, with NaN shown as 0.
    pub fn interpolate(&self, initial: f64, target: f64) -> f64 {
        let value = initial + self.progress * (target - initial);
        if value.is_nan() { 0.0 } else { value }
    }
}
