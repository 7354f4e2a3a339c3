use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Entropy (or an entropy change) in J/K.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Entropy(f64);

impl Entropy {
    pub fn from_joules_per_kelvin(value: f64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn to_joules_per_kelvin(&self) -> f64 {
        self.0
    }

    /// Nearest whole J/K, halves rounded towards positive infinity.
    ///
    /// Matches the way readouts in the browser round (`-2.5` becomes `-2`).
    pub fn rounded(&self) -> i64 {
        (self.0 + 0.5).floor() as i64
    }
}

impl Add for Entropy {
    type Output = Entropy;

    fn add(self, rhs: Entropy) -> Entropy {
        Entropy(self.0 + rhs.0)
    }
}

impl Mul<f64> for Entropy {
    type Output = Entropy;

    fn mul(self, rhs: f64) -> Entropy {
        Entropy(self.0 * rhs)
    }
}
