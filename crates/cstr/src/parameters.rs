//! Adjustable reactor parameters and the store that holds the current set.
//!
//! A [`ReactorParameters`] value is an immutable snapshot: every redraw reads
//! one snapshot, and user input replaces the whole set at once.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::Temperature;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Values outside the physical domain of a parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
}

/// One user-adjustable reactor parameter.
///
/// Serialized with the short symbols used on the slider labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Parameter {
    #[serde(rename = "U")]
    HeatTransferCoeff,
    #[serde(rename = "kr")]
    ReverseRateFactor,
    #[serde(rename = "Tf")]
    FeedTemp,
    #[serde(rename = "tau")]
    ResidenceTime,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::HeatTransferCoeff,
        Parameter::ReverseRateFactor,
        Parameter::FeedTemp,
        Parameter::ResidenceTime,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::HeatTransferCoeff => "heat transfer coefficient",
            Parameter::ReverseRateFactor => "reverse rate factor",
            Parameter::FeedTemp => "feed temperature",
            Parameter::ResidenceTime => "residence time",
        }
    }
}

/// Parameter set for one steady-state diagram.
///
/// # Fields
/// * `heat_transfer_coeff` - U, cal/(dm²·s·K), ≥ 0
/// * `reverse_rate_factor` - kr, pre-exponential factor of the reverse reaction (1/s), ≥ 0
/// * `feed_temp` - Tf, temperature of the feed stream
/// * `residence_time` - τ, seconds; zero is allowed and gives a flat mass balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", default)]
pub struct ReactorParameters {
    pub heat_transfer_coeff: f64,
    pub reverse_rate_factor: f64,
    #[cfg_attr(feature = "tsify", tsify(type = "number"))]
    pub feed_temp: Temperature,
    pub residence_time: f64,
}

impl Default for ReactorParameters {
    fn default() -> Self {
        Self {
            heat_transfer_coeff: 0.0,
            reverse_rate_factor: 0.0,
            feed_temp: Temperature::from_kelvin(265.0),
            residence_time: 400.0,
        }
    }
}

impl ReactorParameters {
    /// Raw numeric value of one parameter (Kelvin for the feed temperature).
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::HeatTransferCoeff => self.heat_transfer_coeff,
            Parameter::ReverseRateFactor => self.reverse_rate_factor,
            Parameter::FeedTemp => self.feed_temp.to_kelvin(),
            Parameter::ResidenceTime => self.residence_time,
        }
    }

    /// Copy of `self` with one parameter replaced.
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        match parameter {
            Parameter::HeatTransferCoeff => self.heat_transfer_coeff = value,
            Parameter::ReverseRateFactor => self.reverse_rate_factor = value,
            Parameter::FeedTemp => self.feed_temp = Temperature::from_kelvin(value),
            Parameter::ResidenceTime => self.residence_time = value,
        }
        self
    }

    /// Check every value against its physical domain.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(ParameterError::NotFinite {
                    name: parameter.name(),
                    value,
                });
            }
        }

        for parameter in [
            Parameter::HeatTransferCoeff,
            Parameter::ReverseRateFactor,
            Parameter::ResidenceTime,
        ] {
            let value = self.get(parameter);
            if value < 0.0 {
                return Err(ParameterError::Negative {
                    name: parameter.name(),
                    value,
                });
            }
        }

        Ok(())
    }
}

/// Range and increment of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderSpec {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Value one step above `value`, snapped to the step grid and clamped to `max`.
    ///
    /// Behaves like an HTML range input's `stepUp()`: a value that sits between
    /// two grid points moves to the next one.
    pub fn step_up(&self, value: f64) -> f64 {
        if self.step <= 0.0 {
            return value.clamp(self.min, self.max);
        }
        let steps = ((value - self.min) / self.step + 1e-9).floor() + 1.0;
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Slider configuration for the four reactor parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", default)]
pub struct ReactorSliders {
    pub heat_transfer_coeff: SliderSpec,
    pub reverse_rate_factor: SliderSpec,
    pub feed_temp: SliderSpec,
    pub residence_time: SliderSpec,
}

impl Default for ReactorSliders {
    fn default() -> Self {
        Self {
            heat_transfer_coeff: SliderSpec::new(0.0, 50.0, 0.5),
            reverse_rate_factor: SliderSpec::new(0.0, 1.0e14, 1.0e12),
            feed_temp: SliderSpec::new(250.0, 300.0, 1.0),
            residence_time: SliderSpec::new(50.0, 1000.0, 10.0),
        }
    }
}

impl ReactorSliders {
    pub fn get(&self, parameter: Parameter) -> &SliderSpec {
        match parameter {
            Parameter::HeatTransferCoeff => &self.heat_transfer_coeff,
            Parameter::ReverseRateFactor => &self.reverse_rate_factor,
            Parameter::FeedTemp => &self.feed_temp,
            Parameter::ResidenceTime => &self.residence_time,
        }
    }
}

/// Holds the parameter set currently shown on the diagram.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    current: ReactorParameters,
    sliders: ReactorSliders,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sliders(sliders: ReactorSliders) -> Self {
        Self {
            current: ReactorParameters::default(),
            sliders,
        }
    }

    pub fn current(&self) -> ReactorParameters {
        self.current
    }

    pub fn sliders(&self) -> &ReactorSliders {
        &self.sliders
    }

    /// Replace the whole parameter set.
    ///
    /// The stored set is left untouched when `parameters` fails validation.
    pub fn replace(&mut self, parameters: ReactorParameters) -> Result<(), ParameterError> {
        parameters.validate()?;
        debug!("reactor parameters replaced: {:?}", parameters);
        self.current = parameters;
        Ok(())
    }

    /// Restore the default parameter set.
    pub fn reset(&mut self) {
        debug!("reactor parameters reset to defaults");
        self.current = ReactorParameters::default();
    }

    /// Advance one parameter by a single slider step (the "+" button next to each slider).
    pub fn step_up(&mut self, parameter: Parameter) -> ReactorParameters {
        let value = self.sliders.get(parameter).step_up(self.current.get(parameter));
        self.current = self.current.with(parameter, value);
        debug!("{} stepped up to {}", parameter.name(), value);
        self.current
    }
}
