use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Sub};

/// Volume in cubic metres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn from_cubic_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn to_cubic_meters(&self) -> f64 {
        self.0
    }

    /// Splits `self` into two parts in the proportion `ratio : 1`.
    ///
    /// Returns `(first, second)` with `first = V·r/(1+r)` and
    /// `second = V - first`, so the parts always sum back to `self`.
    ///
    /// ```rust
    /// use units::Volume;
    ///
    /// let (a, b) = Volume::from_cubic_meters(2.0).split(3.0);
    /// assert_eq!(a.to_cubic_meters(), 1.5);
    /// assert_eq!(b.to_cubic_meters(), 0.5);
    /// ```
    pub fn split(&self, ratio: f64) -> (Volume, Volume) {
        let first = Volume(self.0 * (ratio / (1.0 + ratio)));
        (first, *self - first)
    }
}

impl Sub for Volume {
    type Output = Volume;

    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0 - rhs.0)
    }
}

impl Mul<f64> for Volume {
    type Output = Volume;

    fn mul(self, rhs: f64) -> Volume {
        Volume(self.0 * rhs)
    }
}

impl Div for Volume {
    type Output = f64;

    /// Dimensionless volume ratio.
    fn div(self, rhs: Volume) -> f64 {
        self.0 / rhs.0
    }
}
