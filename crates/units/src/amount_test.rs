use approx::assert_relative_eq;

use crate::amount::{Amount, GAS_CONSTANT};
use crate::{Pressure, Temperature, Volume};

#[test]
fn test_ideal_gas_moles() {
    let n = Amount::ideal_gas(
        Pressure::from_bar(1.0),
        Volume::from_cubic_meters(1.0),
        Temperature::from_kelvin(298.0),
    );
    assert_relative_eq!(n.to_moles(), 1.0e5 / (GAS_CONSTANT * 298.0));
}

#[test]
fn test_ideal_gas_round_trip_pressure() {
    let t = Temperature::ambient();
    let v = Volume::from_cubic_meters(0.8);
    let p = Pressure::from_bar(0.65);

    let n = Amount::ideal_gas(p, v, t);
    let back = n.ideal_gas_pressure(v, t);
    assert_relative_eq!(back.to_bar(), 0.65, epsilon = 1e-12);
}

#[test]
fn test_expansion_lowers_pressure() {
    let t = Temperature::ambient();
    let n = Amount::ideal_gas(Pressure::from_bar(1.0), Volume::from_cubic_meters(1.0), t);
    let expanded = n.ideal_gas_pressure(Volume::from_cubic_meters(2.0), t);
    assert_relative_eq!(expanded.to_bar(), 0.5, epsilon = 1e-12);
}

#[test]
fn test_zero_amount() {
    let n = Amount::ideal_gas(
        Pressure::zero(),
        Volume::from_cubic_meters(1.0),
        Temperature::ambient(),
    );
    assert!(n.is_zero());
    assert_eq!(Amount::zero().to_moles(), 0.0);
}
