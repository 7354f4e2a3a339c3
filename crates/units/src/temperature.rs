use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// An absolute temperature using f64 precision.
///
/// Kelvin is the base unit. Both simulations work on the absolute scale: the
/// Arrhenius terms of the reactor model divide by `T`, and the ideal gas law
/// needs `T` in Kelvin.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let feed = Temperature::from_kelvin(265.0);
/// let coolant = Temperature::from_celsius(36.85); // ~310 K
///
/// assert!(coolant > feed);
/// assert!((coolant.to_kelvin() - 310.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius (K = °C + 273.15).
    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Returns the temperature in Celsius.
    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// Standard ambient temperature used for the gas mixing demo (298 K).
    pub fn ambient() -> Self {
        Self::from_kelvin(298.0)
    }

    /// True for temperatures above absolute zero.
    ///
    /// Arrhenius rate expressions are only defined on this domain.
    pub fn is_absolute_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl Add<f64> for Temperature {
    type Output = Temperature;

    /// Shift by a temperature difference in Kelvin.
    fn add(self, rhs: f64) -> Temperature {
        Temperature(self.0 + rhs)
    }
}

impl Sub for Temperature {
    type Output = f64;

    /// Difference of two temperatures, in Kelvin.
    fn sub(self, rhs: Temperature) -> f64 {
        self.0 - rhs.0
    }
}
