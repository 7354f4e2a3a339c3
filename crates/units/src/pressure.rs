use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Pascals in one bar.
pub const PASCALS_PER_BAR: f64 = 1.0e5;

/// Pressure, stored in Pascals (N/m²).
///
/// The mixing demo takes its inputs in bar; all gas law arithmetic is done in
/// Pascals so that `P·V/(R·T)` yields moles directly.
///
/// ```rust
/// use units::Pressure;
///
/// let p = Pressure::from_bar(0.5);
/// assert_eq!(p.to_pascals(), 50_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pressure(f64);

impl Pressure {
    pub fn from_pascals(value: f64) -> Self {
        Self(value)
    }

    pub fn from_bar(value: f64) -> Self {
        Self(value * PASCALS_PER_BAR)
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn to_pascals(&self) -> f64 {
        self.0
    }

    pub fn to_bar(&self) -> f64 {
        self.0 / PASCALS_PER_BAR
    }

    /// Ratio `self / other`, with 0/0 defined as 0.
    ///
    /// An empty chamber has zero pressure before and after mixing; the ratio
    /// of the two must not poison downstream logs with NaN.
    pub fn ratio_to(&self, other: Pressure) -> f64 {
        if other.0 == 0.0 {
            0.0
        } else {
            self.0 / other.0
        }
    }
}

impl Add for Pressure {
    type Output = Pressure;

    fn add(self, rhs: Pressure) -> Pressure {
        Pressure(self.0 + rhs.0)
    }
}

impl Sub for Pressure {
    type Output = Pressure;

    fn sub(self, rhs: Pressure) -> Pressure {
        Pressure(self.0 - rhs.0)
    }
}

impl Mul<f64> for Pressure {
    type Output = Pressure;

    fn mul(self, rhs: f64) -> Pressure {
        Pressure(self.0 * rhs)
    }
}
