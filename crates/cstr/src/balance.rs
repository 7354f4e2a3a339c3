//! Energy and mass balance of a CSTR running the reversible exothermic
//! reaction A ⇌ B.
//!
//! Each balance gives the product concentration (mmol/dm³) the reactor would
//! need at temperature `T` to satisfy that balance. A steady state is a
//! temperature where both curves agree, so the diagram shows steady states as
//! curve intersections.

use units::Temperature;

use crate::constants::{
    COOLANT_TEMP, DENSITY, FEED_CONCENTRATION, FLOW_RATE, FORWARD_ACTIVATION_ENERGY,
    FORWARD_PREEXPONENTIAL, GAS_CONSTANT_CAL, HEAT_CAPACITY, HEAT_OF_REACTION,
    HEAT_TRANSFER_AREA, MILLIMOLAR, REVERSE_ACTIVATION_ENERGY,
};
use crate::parameters::ReactorParameters;

/// Product concentration required by the energy balance.
///
/// `-(v·ρ·Cp·(T − Tf) + U·A·(T − Tc)) / (v·ΔH) · 1000`
///
/// Linear in `temperature` and defined for every input.
///
/// # Arguments
/// * `temperature` - Reactor temperature
/// * `heat_transfer_coeff` - U, cal/(dm²·s·K)
/// * `feed_temp` - Feed stream temperature
pub fn energy_balance(
    temperature: Temperature,
    heat_transfer_coeff: f64,
    feed_temp: Temperature,
) -> f64 {
    let t = temperature.to_kelvin();
    let sensible = FLOW_RATE * DENSITY * HEAT_CAPACITY * (temperature - feed_temp);
    let removed = heat_transfer_coeff * HEAT_TRANSFER_AREA * (t - COOLANT_TEMP);

    -((sensible + removed) / (FLOW_RATE * HEAT_OF_REACTION)) * MILLIMOLAR
}

/// Product concentration required by the mass balance.
///
/// With `kf = kf0·exp(−Ef/(Rg·T))` and `kr' = kr·exp(−Er/(Rg·T))`:
///
/// `(τ·kf·cA0) / (1 + τ·kf + τ·kr') · 1000`
///
/// The result lies in `[0, cA0·1000]`. At and below absolute zero the
/// Arrhenius terms vanish and the function returns their limit, 0.
///
/// # Arguments
/// * `temperature` - Reactor temperature
/// * `residence_time` - τ, seconds
/// * `reverse_rate_factor` - kr, 1/s
pub fn mass_balance(
    temperature: Temperature,
    residence_time: f64,
    reverse_rate_factor: f64,
) -> f64 {
    if !temperature.is_absolute_positive() {
        return 0.0;
    }

    let rt = GAS_CONSTANT_CAL * temperature.to_kelvin();
    let kf = FORWARD_PREEXPONENTIAL * (-FORWARD_ACTIVATION_ENERGY / rt).exp();
    let kr = reverse_rate_factor * (-REVERSE_ACTIVATION_ENERGY / rt).exp();

    let converted = ((residence_time * kf * FEED_CONCENTRATION)
        / (1.0 + residence_time * kf + residence_time * kr))
        * MILLIMOLAR;

    if converted.is_finite() { converted } else { 0.0 }
}

/// The two curves drawn on the steady-state diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceCurve {
    Energy,
    Mass,
}

impl BalanceCurve {
    /// Evaluate this curve at `temperature` for one parameter set.
    pub fn evaluate(&self, temperature: Temperature, parameters: &ReactorParameters) -> f64 {
        match self {
            BalanceCurve::Energy => energy_balance(
                temperature,
                parameters.heat_transfer_coeff,
                parameters.feed_temp,
            ),
            BalanceCurve::Mass => mass_balance(
                temperature,
                parameters.residence_time,
                parameters.reverse_rate_factor,
            ),
        }
    }

    /// Legend and annotation text.
    pub fn label(&self) -> &'static str {
        match self {
            BalanceCurve::Energy => "energy balance",
            BalanceCurve::Mass => "mass balance",
        }
    }
}
