//! End state of an isothermal ideal-gas mixing process.
//!
//! For an ideal gas at constant temperature only the change in its own
//! partial pressure (equivalently, its own accessible volume) matters:
//!
//! ΔS = n·R·ln(V_F / V_I) = −n·R·ln(P_F / P_I)
//!
//! The presence of the other gas does not enter. A gas whose partial pressure
//! is unchanged has ΔS = 0 even though it ends up mixed.

use log::debug;
use serde::Serialize;
use units::{Amount, Entropy, GAS_CONSTANT, Pressure, Volume};

use crate::state::{GasState, MixingMode, mixing_temperature, total_volume};

/// Everything that is known once mixing has finished.
///
/// Entropies keep full precision; round only for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixingOutcome {
    pub mode: MixingMode,
    pub moles_a: Amount,
    pub moles_b: Amount,
    pub initial_pressure_a: Pressure,
    pub initial_pressure_b: Pressure,
    pub final_pressure_a: Pressure,
    pub final_pressure_b: Pressure,
    pub entropy_a: Entropy,
    pub entropy_b: Entropy,
    pub entropy_total: Entropy,
}

/// Entropy change of `moles` expanding isothermally from `initial` to `final_volume`.
pub fn expansion_entropy(moles: Amount, initial: Volume, final_volume: Volume) -> Entropy {
    if moles.is_zero() {
        return Entropy::zero();
    }
    Entropy::from_joules_per_kelvin(moles.to_moles() * GAS_CONSTANT * (final_volume / initial).ln())
}

/// Entropy change of `moles` going isothermally from `initial` to `final_pressure`.
///
/// Zero when there is no gas, so an empty chamber never yields `0·ln(0/0)`.
pub fn compression_entropy(moles: Amount, initial: Pressure, final_pressure: Pressure) -> Entropy {
    if moles.is_zero() {
        return Entropy::zero();
    }
    Entropy::from_joules_per_kelvin(
        -moles.to_moles() * GAS_CONSTANT * final_pressure.ratio_to(initial).ln(),
    )
}

/// Compute the end state of mixing `state`.
///
/// Deterministic and side-effect free; called once when mixing starts.
pub fn mix(state: &GasState) -> MixingOutcome {
    let temperature = mixing_temperature();
    let total = total_volume();
    let (volume_a, volume_b) = state.chamber_volumes();

    let initial_pressure_a = state.pressure_a();
    let initial_pressure_b = state.pressure_b();
    let moles_a = Amount::ideal_gas(initial_pressure_a, volume_a, temperature);
    let moles_b = Amount::ideal_gas(initial_pressure_b, volume_b, temperature);

    let (final_pressure_a, final_pressure_b, entropy_a, entropy_b) = match state.mode {
        MixingMode::RemoveBarrier => (
            moles_a.ideal_gas_pressure(total, temperature),
            moles_b.ideal_gas_pressure(total, temperature),
            expansion_entropy(moles_a, volume_a, total),
            expansion_entropy(moles_b, volume_b, total),
        ),
        MixingMode::CompressRight => {
            let compressed = moles_a.ideal_gas_pressure(volume_b, temperature);
            (
                compressed,
                initial_pressure_b,
                compression_entropy(moles_a, initial_pressure_a, compressed),
                Entropy::zero(),
            )
        }
    };

    let outcome = MixingOutcome {
        mode: state.mode,
        moles_a,
        moles_b,
        initial_pressure_a,
        initial_pressure_b,
        final_pressure_a,
        final_pressure_b,
        entropy_a,
        entropy_b,
        entropy_total: entropy_a + entropy_b,
    };

    debug!("mixing outcome for {:?}: {:?}", state, outcome);
    outcome
}
