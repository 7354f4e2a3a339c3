//! Print both balance curves for a few operating points.
//!
//! Sign changes in the last column bracket the steady states.
//!
//! Run with: cargo run --package cstr --example steady_state_table

use cstr::{Parameter, ReactorParameters, TemperatureGrid, sample_curves_on};
use units::Temperature;

fn main() {
    let grid = TemperatureGrid::new(
        Temperature::from_kelvin(250.0),
        Temperature::from_kelvin(400.0),
        16,
    );

    let cases = [
        ("defaults", ReactorParameters::default()),
        (
            "cooled",
            ReactorParameters::default().with(Parameter::HeatTransferCoeff, 10.0),
        ),
        (
            "reversible",
            ReactorParameters::default().with(Parameter::ReverseRateFactor, 3.0e13),
        ),
        (
            "warm feed",
            ReactorParameters::default().with(Parameter::FeedTemp, 285.0),
        ),
    ];

    for (name, params) in cases {
        println!("\n{} ({:?})", name, params);
        println!("{}", "=".repeat(60));
        println!("{:>8} {:>14} {:>14} {:>14}", "T (K)", "energy", "mass", "diff");

        let curves = sample_curves_on(&grid, &params);
        for ((t, e), (_, m)) in curves.energy.points().zip(curves.mass.points()) {
            println!("{:>8.1} {:>14.4} {:>14.4} {:>14.4}", t, e, m, e - m);
        }
    }
}
