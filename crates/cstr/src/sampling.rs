//! Discretization of the temperature axis and evaluation of both balance
//! curves on it.

use log::debug;
use serde::{Deserialize, Serialize};
use units::Temperature;

use crate::balance::{BalanceCurve, energy_balance, mass_balance};
use crate::parameters::ReactorParameters;

/// Feed temperatures at or below this put the energy-balance label on the left.
const LABEL_FEED_THRESHOLD_K: f64 = 270.0;
const ENERGY_LABEL_COOL_FEED_K: f64 = 290.0;
const ENERGY_LABEL_WARM_FEED_K: f64 = 330.0;
const MASS_LABEL_K: f64 = 375.0;

/// Uniform grid over the temperature axis, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureGrid {
    pub start: Temperature,
    pub end: Temperature,
    pub points: usize,
}

impl Default for TemperatureGrid {
    /// 151 points over 250–400 K, i.e. one point per Kelvin.
    fn default() -> Self {
        Self {
            start: Temperature::from_kelvin(250.0),
            end: Temperature::from_kelvin(400.0),
            points: 151,
        }
    }
}

impl TemperatureGrid {
    pub fn new(start: Temperature, end: Temperature, points: usize) -> Self {
        Self { start, end, points }
    }

    /// Spacing between neighbouring grid points in Kelvin.
    pub fn step(&self) -> f64 {
        match self.points {
            0 | 1 => 0.0,
            n => (self.end - self.start) / (n - 1) as f64,
        }
    }

    /// Grid temperatures in increasing order.
    ///
    /// Point `i` is `start + (end − start)·(i / (n − 1))`; computing each point
    /// from its index keeps the last point exactly on `end`.
    pub fn temperatures(&self) -> impl Iterator<Item = Temperature> + '_ {
        let span = self.end - self.start;
        let intervals = self.points.saturating_sub(1);
        (0..self.points).map(move |i| {
            if intervals == 0 {
                self.start
            } else {
                self.start + span * (i as f64 / intervals as f64)
            }
        })
    }
}

/// One curve sampled on a [`TemperatureGrid`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSample {
    /// Kelvin, increasing
    pub temperatures: Vec<f64>,
    /// mmol/dm³, aligned with `temperatures`
    pub concentrations: Vec<f64>,
}

impl CurveSample {
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// (temperature, concentration) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperatures
            .iter()
            .copied()
            .zip(self.concentrations.iter().copied())
    }
}

/// Where a curve's text label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelAnchor {
    pub temperature: f64,
    pub concentration: f64,
}

/// Everything the diagram needs for one redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteadyStateCurves {
    pub energy: CurveSample,
    pub mass: CurveSample,
    pub energy_label: LabelAnchor,
    pub mass_label: LabelAnchor,
}

/// Sample one curve on `grid`.
pub fn sample_curve(
    curve: BalanceCurve,
    grid: &TemperatureGrid,
    parameters: &ReactorParameters,
) -> CurveSample {
    let (temperatures, concentrations): (Vec<f64>, Vec<f64>) = grid
        .temperatures()
        .map(|t| (t.to_kelvin(), curve.evaluate(t, parameters)))
        .unzip();

    CurveSample {
        temperatures,
        concentrations,
    }
}

/// Sample both curves on the default 250–400 K grid.
pub fn sample_curves(parameters: &ReactorParameters) -> SteadyStateCurves {
    sample_curves_on(&TemperatureGrid::default(), parameters)
}

/// Sample both curves on `grid` and place their labels.
pub fn sample_curves_on(
    grid: &TemperatureGrid,
    parameters: &ReactorParameters,
) -> SteadyStateCurves {
    debug!(
        "sampling balance curves on {} points for {:?}",
        grid.points, parameters
    );

    SteadyStateCurves {
        energy: sample_curve(BalanceCurve::Energy, grid, parameters),
        mass: sample_curve(BalanceCurve::Mass, grid, parameters),
        energy_label: energy_label_anchor(parameters),
        mass_label: mass_label_anchor(parameters),
    }
}

/// Energy-balance label: left of the typical intersections for cold feeds,
/// right of them otherwise.
pub fn energy_label_anchor(parameters: &ReactorParameters) -> LabelAnchor {
    let x = if parameters.feed_temp.to_kelvin() <= LABEL_FEED_THRESHOLD_K {
        ENERGY_LABEL_COOL_FEED_K
    } else {
        ENERGY_LABEL_WARM_FEED_K
    };

    LabelAnchor {
        temperature: x,
        concentration: energy_balance(
            Temperature::from_kelvin(x),
            parameters.heat_transfer_coeff,
            parameters.feed_temp,
        ),
    }
}

/// Mass-balance label, always on the high-temperature plateau.
pub fn mass_label_anchor(parameters: &ReactorParameters) -> LabelAnchor {
    LabelAnchor {
        temperature: MASS_LABEL_K,
        concentration: mass_balance(
            Temperature::from_kelvin(MASS_LABEL_K),
            parameters.residence_time,
            parameters.reverse_rate_factor,
        ),
    }
}
