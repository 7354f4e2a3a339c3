use approx::assert_relative_eq;
use units::{Amount, GAS_CONSTANT, Pressure, Volume};

use crate::mixing::{compression_entropy, expansion_entropy, mix};
use crate::state::{GasState, MixingMode};

/// Moles of gas at `bar` in `m3` at 298 K.
fn moles(bar: f64, m3: f64) -> f64 {
    bar * 1.0e5 * m3 / (GAS_CONSTANT * 298.0)
}

#[test]
fn remove_barrier_single_gas_doubles_its_volume() {
    let outcome = mix(&GasState::new(1.0, 0.0, 1.0, MixingMode::RemoveBarrier));
    let n_a = 1.0e5 / (8.314 * 298.0);

    assert_relative_eq!(outcome.moles_a.to_moles(), n_a, max_relative = 1e-12);
    assert!(outcome.moles_b.is_zero());
    assert_eq!(outcome.entropy_b.to_joules_per_kelvin(), 0.0);
    assert_relative_eq!(
        outcome.entropy_a.to_joules_per_kelvin(),
        n_a * 8.314 * 2f64.ln(),
        max_relative = 1e-12
    );
    assert_relative_eq!(outcome.final_pressure_a.to_bar(), 0.5, epsilon = 1e-12);
    assert_eq!(outcome.final_pressure_b.to_bar(), 0.0);
}

#[test]
fn remove_barrier_equal_pressures_is_ideal_mixing() {
    let outcome = mix(&GasState::new(1.0, 1.0, 1.0, MixingMode::RemoveBarrier));
    let n = moles(1.0, 1.0);

    assert_relative_eq!(
        outcome.entropy_total.to_joules_per_kelvin(),
        2.0 * n * GAS_CONSTANT * 2f64.ln(),
        max_relative = 1e-12
    );
    assert_relative_eq!(outcome.entropy_total.to_joules_per_kelvin(), 465.2, epsilon = 0.1);
}

#[test]
fn remove_barrier_default_state_increases_entropy() {
    let outcome = mix(&GasState::default());
    assert!(outcome.entropy_total.to_joules_per_kelvin() > 0.0);
    assert_relative_eq!(
        outcome.entropy_a.to_joules_per_kelvin(),
        outcome.entropy_b.to_joules_per_kelvin(),
        max_relative = 1e-12
    );
}

#[test]
fn remove_barrier_unequal_chambers() {
    // Chamber A holds 1.5 m³, chamber B 0.5 m³
    let outcome = mix(&GasState::new(0.8, 0.4, 3.0, MixingMode::RemoveBarrier));

    assert_relative_eq!(
        outcome.entropy_a.to_joules_per_kelvin(),
        moles(0.8, 1.5) * GAS_CONSTANT * (2.0f64 / 1.5).ln(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        outcome.entropy_b.to_joules_per_kelvin(),
        moles(0.4, 0.5) * GAS_CONSTANT * 4f64.ln(),
        max_relative = 1e-12
    );
    assert_relative_eq!(outcome.final_pressure_a.to_bar(), 0.6, epsilon = 1e-12);
    assert_relative_eq!(outcome.final_pressure_b.to_bar(), 0.1, epsilon = 1e-12);
}

#[test]
fn compress_right_leaves_gas_b_unchanged() {
    for (pa, pb, ratio) in [(0.5, 0.5, 1.0), (1.2, 0.3, 2.5), (0.0, 1.0, 0.4), (0.7, 0.0, 1.0)] {
        let outcome = mix(&GasState::new(pa, pb, ratio, MixingMode::CompressRight));
        assert_eq!(outcome.entropy_b.to_joules_per_kelvin(), 0.0);
        assert_eq!(outcome.final_pressure_b, outcome.initial_pressure_b);
    }
}

#[test]
fn compress_right_equal_chambers_keeps_pressure() {
    let outcome = mix(&GasState::new(0.5, 0.5, 1.0, MixingMode::CompressRight));
    assert_relative_eq!(outcome.final_pressure_a.to_bar(), 0.5, epsilon = 1e-12);
    assert!(outcome.entropy_a.to_joules_per_kelvin().abs() < 1e-9);
}

#[test]
fn compress_right_into_smaller_chamber_lowers_entropy() {
    // 1.5 m³ of A squeezed into 0.5 m³: pressure triples
    let outcome = mix(&GasState::new(0.5, 0.5, 3.0, MixingMode::CompressRight));

    assert_relative_eq!(outcome.final_pressure_a.to_bar(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(
        outcome.entropy_a.to_joules_per_kelvin(),
        -moles(0.5, 1.5) * GAS_CONSTANT * 3f64.ln(),
        max_relative = 1e-12
    );
    assert!(outcome.entropy_total.to_joules_per_kelvin() < 0.0);
}

#[test]
fn compress_right_without_gas_a_is_not_nan() {
    let outcome = mix(&GasState::new(0.0, 0.6, 1.0, MixingMode::CompressRight));
    assert_eq!(outcome.entropy_a.to_joules_per_kelvin(), 0.0);
    assert_eq!(outcome.final_pressure_a.to_bar(), 0.0);
    assert_eq!(outcome.entropy_total.to_joules_per_kelvin(), 0.0);
}

#[test]
fn empty_gas_contributes_no_entropy() {
    let v = Volume::from_cubic_meters(1.0);
    assert_eq!(
        expansion_entropy(Amount::zero(), v, Volume::from_cubic_meters(2.0)).to_joules_per_kelvin(),
        0.0
    );
    assert_eq!(
        compression_entropy(Amount::zero(), Pressure::zero(), Pressure::zero())
            .to_joules_per_kelvin(),
        0.0
    );
}

#[test]
fn total_is_sum_of_parts() {
    let outcome = mix(&GasState::new(0.9, 0.2, 0.7, MixingMode::RemoveBarrier));
    assert_eq!(
        outcome.entropy_total.to_joules_per_kelvin(),
        outcome.entropy_a.to_joules_per_kelvin() + outcome.entropy_b.to_joules_per_kelvin()
    );
}
