//! Display state of the two-chamber container.
//!
//! A [`MixingFrame`] is plain data: the page applies it to its DOM nodes
//! without doing any arithmetic of its own.

use serde::Serialize;

use crate::animator::Animator;
use crate::color::{Color, blended_container, compressed_chamber, gas_shade};
use crate::constants::{HUE_A, HUE_B};
use crate::mixing::MixingOutcome;
use crate::state::{GasState, MixingMode};

/// Which stage of the demo a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Idle,
    Mixing,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChamberView {
    /// Relative width (CSS flex-grow)
    pub flex: f64,
    pub background: Color,
}

/// Slider value labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderReadouts {
    pub pressure_a: String,
    pub pressure_b: String,
    pub volume_ratio: String,
}

impl From<&GasState> for SliderReadouts {
    fn from(state: &GasState) -> Self {
        Self {
            pressure_a: format!("{:.2} bar", state.pressure_a),
            pressure_b: format!("{:.2} bar", state.pressure_b),
            volume_ratio: format!("{:.2}", state.volume_ratio),
        }
    }
}

/// Entropy readouts in whole J/K.
///
/// The total is the sum of the two displayed values, so the readouts always add up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntropyReadouts {
    pub gas_a: i64,
    pub gas_b: i64,
    pub total: i64,
}

impl EntropyReadouts {
    pub fn new(gas_a: i64, gas_b: i64) -> Self {
        Self {
            gas_a,
            gas_b,
            total: gas_a + gas_b,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixingFrame {
    pub stage: Stage,
    pub progress: f64,
    pub controls_enabled: bool,
    pub sliders: SliderReadouts,
    /// Partial pressure of A, bar, two decimals
    pub pressure_a: String,
    /// Partial pressure of B, bar, two decimals
    pub pressure_b: String,
    /// Hidden (`None`) until mixing starts
    pub entropy: Option<EntropyReadouts>,
    pub left: ChamberView,
    pub right: ChamberView,
    pub divider_visible: bool,
    pub card_background: Color,
    /// After compress-right, gas A's readouts belong to the right chamber
    pub gas_a_in_right_chamber: bool,
}

fn pressure_text(bar: f64) -> String {
    let bar = if bar.is_nan() { 0.0 } else { bar };
    format!("{:.2}", bar)
}

impl MixingFrame {
    /// Pre-mix view: sliders live, each chamber shaded by its own pressure.
    pub fn idle(state: &GasState) -> Self {
        Self {
            stage: Stage::Idle,
            progress: 0.0,
            controls_enabled: true,
            sliders: SliderReadouts::from(state),
            pressure_a: pressure_text(state.pressure_a),
            pressure_b: pressure_text(state.pressure_b),
            entropy: None,
            left: ChamberView {
                flex: state.volume_ratio,
                background: gas_shade(state.pressure_a, HUE_A),
            },
            right: ChamberView {
                flex: 1.0,
                background: gas_shade(state.pressure_b, HUE_B),
            },
            divider_visible: true,
            card_background: Color::White,
            gas_a_in_right_chamber: false,
        }
    }

    /// View at the animator's current progress.
    ///
    /// Pressures and entropies are interpolated; the final color commit is
    /// applied only once the animator is complete.
    pub fn mixing(state: &GasState, outcome: &MixingOutcome, animator: &Animator) -> Self {
        let done = animator.is_complete();
        let current_a = animator.interpolate(
            outcome.initial_pressure_a.to_bar(),
            outcome.final_pressure_a.to_bar(),
        );
        let current_b = animator.interpolate(
            outcome.initial_pressure_b.to_bar(),
            outcome.final_pressure_b.to_bar(),
        );

        let entropy = EntropyReadouts::new(
            (outcome.entropy_a * animator.progress()).rounded(),
            (outcome.entropy_b * animator.progress()).rounded(),
        );

        let mut frame = Self {
            stage: if done { Stage::Settled } else { Stage::Mixing },
            progress: animator.progress(),
            controls_enabled: false,
            sliders: SliderReadouts::from(state),
            pressure_a: pressure_text(current_a),
            pressure_b: pressure_text(current_b),
            entropy: Some(entropy),
            left: ChamberView {
                flex: state.volume_ratio,
                background: Color::Transparent,
            },
            right: ChamberView {
                flex: 1.0,
                background: Color::Transparent,
            },
            divider_visible: true,
            card_background: Color::White,
            gas_a_in_right_chamber: false,
        };

        match outcome.mode {
            MixingMode::RemoveBarrier if done => {
                frame.divider_visible = false;
                frame.card_background = blended_container(
                    state.pressure_a,
                    HUE_A,
                    state.pressure_b,
                    HUE_B,
                    state.volume_ratio,
                );
            }
            MixingMode::RemoveBarrier => {
                frame.left.background = gas_shade(current_a, HUE_A);
                frame.right.background = gas_shade(current_b, HUE_B);
            }
            MixingMode::CompressRight if done => {
                frame.right.background = compressed_chamber(
                    outcome.final_pressure_a.to_bar(),
                    outcome.final_pressure_b.to_bar(),
                );
                frame.gas_a_in_right_chamber = true;
            }
            MixingMode::CompressRight => {}
        }

        frame
    }
}
