//! Inputs of the mixing demo.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::{Pressure, Temperature, Volume};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::constants::{MIXING_TEMPERATURE_K, TOTAL_VOLUME_M3};

/// Values outside the physical domain of a gas state field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// How the two gases are brought together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "kebab-case")]
pub enum MixingMode {
    /// The divider is pulled out; both gases spread over the whole container.
    #[default]
    RemoveBarrier,
    /// Gas A is pushed into chamber B, whose volume stays the same.
    CompressRight,
}

/// Initial conditions of the two chambers.
///
/// # Fields
/// * `pressure_a` - Pressure of gas A in the left chamber (bar)
/// * `pressure_b` - Pressure of gas B in the right chamber (bar)
/// * `volume_ratio` - Volume of chamber A divided by volume of chamber B
/// * `mode` - How the gases are mixed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", default)]
pub struct GasState {
    pub pressure_a: f64,
    pub pressure_b: f64,
    pub volume_ratio: f64,
    pub mode: MixingMode,
}

impl Default for GasState {
    fn default() -> Self {
        Self {
            pressure_a: 0.5,
            pressure_b: 0.5,
            volume_ratio: 1.0,
            mode: MixingMode::RemoveBarrier,
        }
    }
}

impl GasState {
    pub fn new(pressure_a: f64, pressure_b: f64, volume_ratio: f64, mode: MixingMode) -> Self {
        Self {
            pressure_a,
            pressure_b,
            volume_ratio,
            mode,
        }
    }

    pub fn pressure_a(&self) -> Pressure {
        Pressure::from_bar(self.pressure_a)
    }

    pub fn pressure_b(&self) -> Pressure {
        Pressure::from_bar(self.pressure_b)
    }

    /// `(chamber A, chamber B)`; they always add up to the container volume.
    pub fn chamber_volumes(&self) -> (Volume, Volume) {
        total_volume().split(self.volume_ratio)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        let fields = [
            ("pressure of gas A", self.pressure_a),
            ("pressure of gas B", self.pressure_b),
            ("volume ratio", self.volume_ratio),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name, value });
            }
        }
        for &(name, value) in &fields[..2] {
            if value < 0.0 {
                return Err(ParameterError::Negative { name, value });
            }
        }
        if self.volume_ratio <= 0.0 {
            return Err(ParameterError::NotPositive {
                name: "volume ratio",
                value: self.volume_ratio,
            });
        }

        Ok(())
    }
}

pub fn total_volume() -> Volume {
    Volume::from_cubic_meters(TOTAL_VOLUME_M3)
}

pub fn mixing_temperature() -> Temperature {
    Temperature::from_kelvin(MIXING_TEMPERATURE_K)
}
