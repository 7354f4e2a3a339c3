//! Text shown next to each slider.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parameters::ReactorParameters;

/// A number as `m.m × 10^e` with one decimal in the mantissa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScientificNotation {
    /// Rounded to one decimal; `1.0 <= |mantissa| < 10.0`
    pub mantissa: f64,
    pub exponent: i32,
}

impl ScientificNotation {
    /// `None` for zero and for non-finite values, which have no normalized form.
    pub fn new(value: f64) -> Option<Self> {
        if value == 0.0 || !value.is_finite() {
            return None;
        }

        let mut exponent = value.abs().log10().floor() as i32;
        let mut mantissa = round_to_tenths(value / 10f64.powi(exponent));

        // 9.96 rounds to 10.0; carry into the exponent.
        if mantissa.abs() >= 10.0 {
            exponent += 1;
            mantissa = round_to_tenths(value / 10f64.powi(exponent));
        }

        Some(Self { mantissa, exponent })
    }

    /// HTML form, e.g. `1.5×10<sup>13</sup>`.
    pub fn to_html(&self) -> String {
        format!("{:.1}×10<sup>{}</sup>", self.mantissa, self.exponent)
    }
}

impl fmt::Display for ScientificNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}×10^{}", self.mantissa, self.exponent)
    }
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scientific notation as HTML, `"0"` when the value has no normalized form.
pub fn format_scientific(value: f64) -> String {
    ScientificNotation::new(value)
        .map(|s| s.to_html())
        .unwrap_or_else(|| "0".to_string())
}

/// Fixed number of decimals; NaN and infinities display as zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.*}", decimals, value)
}

/// Slider readouts for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactorReadouts {
    pub heat_transfer_coeff: String,
    /// HTML (contains `<sup>`)
    pub reverse_rate_factor: String,
    pub feed_temp: String,
    pub residence_time: String,
}

impl From<&ReactorParameters> for ReactorReadouts {
    fn from(parameters: &ReactorParameters) -> Self {
        Self {
            heat_transfer_coeff: format_fixed(parameters.heat_transfer_coeff, 1),
            reverse_rate_factor: format_scientific(parameters.reverse_rate_factor),
            feed_temp: parameters.feed_temp.to_kelvin().to_string(),
            residence_time: parameters.residence_time.to_string(),
        }
    }
}
