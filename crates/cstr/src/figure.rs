//! Plotly-shaped description of the steady-state diagram.
//!
//! Field names follow Plotly's trace/layout schema so the serialized value can
//! be handed to `Plotly.react` unchanged.

use serde::Serialize;

use crate::balance::BalanceCurve;
use crate::sampling::{CurveSample, LabelAnchor, SteadyStateCurves};

const ENERGY_COLOR: &str = "blue";
const MASS_COLOR: &str = "green";
const CURVE_WIDTH: f64 = 3.0;
const LABEL_FONT_SIZE: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers+text")]
    MarkersText,
}

/// One Plotly scatter trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: TraceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Trace {
    fn curve(curve: BalanceCurve, sample: &CurveSample) -> Self {
        Self {
            x: sample.temperatures.clone(),
            y: sample.concentrations.clone(),
            mode: TraceMode::Lines,
            name: Some(curve.label()),
            line: Some(LineStyle {
                color: curve_color(curve),
                width: CURVE_WIDTH,
            }),
            text: None,
            textposition: None,
            textfont: None,
            showlegend: None,
        }
    }

    fn label(curve: BalanceCurve, anchor: &LabelAnchor) -> Self {
        Self {
            x: vec![anchor.temperature],
            y: vec![anchor.concentration],
            mode: TraceMode::MarkersText,
            name: None,
            line: None,
            text: Some(vec![curve.label()]),
            textposition: Some("top center"),
            textfont: Some(Font {
                color: curve_color(curve),
                size: LABEL_FONT_SIZE,
            }),
            showlegend: Some(false),
        }
    }
}

fn curve_color(curve: BalanceCurve) -> &'static str {
    match curve {
        BalanceCurve::Energy => ENERGY_COLOR,
        BalanceCurve::Mass => MASS_COLOR,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: f64,
    pub l: f64,
    pub r: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    pub dtick: f64,
    pub title: &'static str,
    pub mirror: bool,
    pub ticks: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub x: f64,
    pub xanchor: &'static str,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            margin: Margin {
                t: 20.0,
                l: 60.0,
                r: 20.0,
                b: 60.0,
            },
            xaxis: Axis {
                range: [250.0, 400.0],
                dtick: 20.0,
                title: "temperature (K)",
                mirror: true,
                ticks: "outside",
            },
            yaxis: Axis {
                range: [0.0, 12.0],
                dtick: 2.0,
                title: "product concentration (mmol/dm³)",
                mirror: true,
                ticks: "outside",
            },
            legend: Legend {
                orientation: "h",
                x: 0.5,
                xanchor: "center",
                y: 1.05,
            },
            plot_bgcolor: "white",
            paper_bgcolor: "white",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotConfig {
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
}

/// Traces, layout and config for one `Plotly.react` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

impl ChartFigure {
    /// Both balance curves followed by their label markers.
    pub fn steady_state(curves: &SteadyStateCurves) -> Self {
        Self {
            data: vec![
                Trace::curve(BalanceCurve::Energy, &curves.energy),
                Trace::curve(BalanceCurve::Mass, &curves.mass),
                Trace::label(BalanceCurve::Energy, &curves.energy_label),
                Trace::label(BalanceCurve::Mass, &curves.mass_label),
            ],
            layout: Layout::default(),
            config: PlotConfig {
                display_mode_bar: false,
            },
        }
    }
}
