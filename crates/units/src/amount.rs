use serde::{Deserialize, Serialize};

use crate::{Pressure, Temperature, Volume};

/// Molar gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

/// Amount of substance in moles.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(f64);

impl Amount {
    pub fn from_moles(value: f64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn to_moles(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Moles of an ideal gas, `n = P·V/(R·T)`.
    ///
    /// ```rust
    /// use units::{Amount, Pressure, Temperature, Volume};
    ///
    /// let n = Amount::ideal_gas(
    ///     Pressure::from_bar(1.0),
    ///     Volume::from_cubic_meters(1.0),
    ///     Temperature::from_kelvin(298.0),
    /// );
    /// assert!((n.to_moles() - 40.36).abs() < 0.01);
    /// ```
    pub fn ideal_gas(pressure: Pressure, volume: Volume, temperature: Temperature) -> Self {
        Self(
            pressure.to_pascals() * volume.to_cubic_meters()
                / (GAS_CONSTANT * temperature.to_kelvin()),
        )
    }

    /// Pressure exerted by this amount in `volume` at `temperature`, `P = n·R·T/V`.
    pub fn ideal_gas_pressure(&self, volume: Volume, temperature: Temperature) -> Pressure {
        Pressure::from_pascals(
            self.0 * GAS_CONSTANT * temperature.to_kelvin() / volume.to_cubic_meters(),
        )
    }
}
