use units::Temperature;

use crate::parameters::ReactorParameters;
use crate::readout::{ReactorReadouts, ScientificNotation, format_fixed, format_scientific};

#[test]
fn scientific_zero_is_plain() {
    assert_eq!(format_scientific(0.0), "0");
    assert!(ScientificNotation::new(0.0).is_none());
}

#[test]
fn scientific_html() {
    assert_eq!(format_scientific(1.5e13), "1.5×10<sup>13</sup>");
    assert_eq!(format_scientific(1.0e12), "1.0×10<sup>12</sup>");
    assert_eq!(format_scientific(4.2e-3), "4.2×10<sup>-3</sup>");
}

#[test]
fn scientific_mantissa_carry() {
    let s = ScientificNotation::new(9.96e13).unwrap();
    assert_eq!(s.exponent, 14);
    assert_eq!(s.mantissa, 1.0);
    assert_eq!(s.to_string(), "1.0×10^14");
}

#[test]
fn scientific_non_finite_is_zero() {
    assert_eq!(format_scientific(f64::NAN), "0");
    assert_eq!(format_scientific(f64::INFINITY), "0");
}

#[test]
fn fixed_decimals() {
    assert_eq!(format_fixed(7.5, 1), "7.5");
    assert_eq!(format_fixed(0.0, 1), "0.0");
    assert_eq!(format_fixed(0.457, 2), "0.46");
    assert_eq!(format_fixed(f64::NAN, 2), "0.00");
}

#[test]
fn default_readouts() {
    let readouts = ReactorReadouts::from(&ReactorParameters::default());
    assert_eq!(readouts.heat_transfer_coeff, "0.0");
    assert_eq!(readouts.reverse_rate_factor, "0");
    assert_eq!(readouts.feed_temp, "265");
    assert_eq!(readouts.residence_time, "400");
}

#[test]
fn adjusted_readouts() {
    let params = ReactorParameters {
        heat_transfer_coeff: 12.5,
        reverse_rate_factor: 3.0e13,
        feed_temp: Temperature::from_kelvin(281.0),
        residence_time: 750.0,
    };
    let readouts = ReactorReadouts::from(&params);
    assert_eq!(readouts.heat_transfer_coeff, "12.5");
    assert_eq!(readouts.reverse_rate_factor, "3.0×10<sup>13</sup>");
    assert_eq!(readouts.feed_temp, "281");
    assert_eq!(readouts.residence_time, "750");
}
