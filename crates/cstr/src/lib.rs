//! Steady states of a jacketed continuous stirred-tank reactor.
//!
//! The reactor runs the reversible, exothermic reaction A ⇌ B. For a given
//! set of operating parameters the crate evaluates the energy balance (a
//! straight line in temperature) and the mass balance (an S-shaped curve) on a
//! fixed temperature grid. Intersections of the two curves are the reactor's
//! steady states; they are read off the chart, not solved for.
//!
//! # Example
//!
//! ```rust
//! use cstr::{ReactorParameters, sample_curves};
//!
//! let curves = sample_curves(&ReactorParameters::default());
//! assert_eq!(curves.energy.len(), 151);
//! assert_eq!(curves.mass.temperatures[0], 250.0);
//! ```

pub mod balance;
pub mod constants;
pub mod figure;
pub mod parameters;
pub mod readout;
pub mod render;
pub mod sampling;

#[cfg(test)]
mod parameters_test;
#[cfg(test)]
mod readout_test;

pub use balance::{BalanceCurve, energy_balance, mass_balance};
pub use figure::ChartFigure;
pub use parameters::{
    Parameter, ParameterError, ParameterStore, ReactorParameters, ReactorSliders, SliderSpec,
};
pub use readout::{ReactorReadouts, ScientificNotation, format_fixed, format_scientific};
pub use render::{ChartSurface, ReactorView, redraw, render};
pub use sampling::{
    CurveSample, LabelAnchor, SteadyStateCurves, TemperatureGrid, energy_label_anchor,
    mass_label_anchor, sample_curve, sample_curves, sample_curves_on,
};
