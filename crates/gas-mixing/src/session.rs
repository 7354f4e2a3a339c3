//! The demo's state machine: Idle → Mixing → Settled, back to Idle on reset.
//!
//! While the gases mix and after they have settled the inputs are frozen;
//! only [`MixingSession::reset`] unlocks them again.

use log::{info, warn};
use thiserror::Error;

use crate::animator::Animator;
use crate::frame::{MixingFrame, Stage};
use crate::mixing::{MixingOutcome, mix};
use crate::state::{GasState, ParameterError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("inputs are locked until the demo is reset")]
    Locked,

    #[error("mixing has already started")]
    AlreadyStarted,

    #[error("no mixing in progress")]
    NotMixing,

    #[error("invalid gas state: {0}")]
    InvalidState(#[from] ParameterError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Mixing {
        outcome: MixingOutcome,
        animator: Animator,
    },
    Settled {
        outcome: MixingOutcome,
    },
}

/// One mixing demo: the frozen-or-editable gas state plus where the animation is.
#[derive(Debug, Clone, PartialEq)]
pub struct MixingSession {
    state: GasState,
    phase: Phase,
    run: u64,
}

impl Default for MixingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MixingSession {
    pub fn new() -> Self {
        Self {
            state: GasState::default(),
            phase: Phase::Idle,
            run: 0,
        }
    }

    pub fn state(&self) -> &GasState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        match self.phase {
            Phase::Idle => Stage::Idle,
            Phase::Mixing { .. } => Stage::Mixing,
            Phase::Settled { .. } => Stage::Settled,
        }
    }

    /// Changes whenever a mix starts or the session is reset.
    ///
    /// Animation drivers stop once this no longer matches the run they started for.
    pub fn run(&self) -> u64 {
        self.run
    }

    pub fn controls_enabled(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// End state of the current run, once mixing has started.
    pub fn outcome(&self) -> Option<&MixingOutcome> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Mixing { outcome, .. } | Phase::Settled { outcome } => Some(outcome),
        }
    }

    /// Replace the gas state wholesale (slider or mode change).
    pub fn set_state(&mut self, state: GasState) -> Result<MixingFrame, SessionError> {
        if !self.controls_enabled() {
            warn!("gas state change rejected while {:?}", self.stage());
            return Err(SessionError::Locked);
        }
        state.validate()?;
        self.state = state;
        Ok(self.frame())
    }

    /// Freeze the inputs, compute the end state and start the animation.
    pub fn start_mix(&mut self) -> Result<MixingFrame, SessionError> {
        if !self.controls_enabled() {
            warn!("mix requested while {:?}", self.stage());
            return Err(SessionError::AlreadyStarted);
        }
        Ok(self.begin())
    }

    fn begin(&mut self) -> MixingFrame {
        let outcome = mix(&self.state);
        info!(
            "mixing started ({:?}): dS_A={:.3} J/K, dS_B={:.3} J/K",
            outcome.mode,
            outcome.entropy_a.to_joules_per_kelvin(),
            outcome.entropy_b.to_joules_per_kelvin()
        );
        self.run += 1;
        self.phase = Phase::Mixing {
            outcome,
            animator: Animator::new(),
        };
        self.frame()
    }

    /// Advance the animation by one frame.
    ///
    /// The tick that reaches full progress moves the session to Settled.
    pub fn tick(&mut self) -> Result<MixingFrame, SessionError> {
        let Phase::Mixing {
            outcome,
            mut animator,
        } = self.phase
        else {
            return Err(SessionError::NotMixing);
        };

        animator.tick();
        self.phase = if animator.is_complete() {
            info!(
                "mixing settled: dS_total={:.3} J/K",
                outcome.entropy_total.to_joules_per_kelvin()
            );
            Phase::Settled { outcome }
        } else {
            Phase::Mixing { outcome, animator }
        };

        Ok(self.frame())
    }

    /// Back to the default gas state with the controls unlocked.
    pub fn reset(&mut self) -> MixingFrame {
        info!("mixing demo reset");
        self.state = GasState::default();
        self.phase = Phase::Idle;
        self.run += 1;
        self.frame()
    }

    /// What the page should currently show.
    pub fn frame(&self) -> MixingFrame {
        match &self.phase {
            Phase::Idle => MixingFrame::idle(&self.state),
            Phase::Mixing { outcome, animator } => {
                MixingFrame::mixing(&self.state, outcome, animator)
            }
            Phase::Settled { outcome } => {
                let finished = Animator::new().advanced(1.0);
                MixingFrame::mixing(&self.state, outcome, &finished)
            }
        }
    }
}

/// Anything that displays mixing frames: DOM bindings, a terminal, a test recorder.
pub trait MixingSurface {
    type Error;

    fn present(&mut self, frame: &MixingFrame) -> Result<(), Self::Error>;
}

/// Run a whole mix on `surface`, one frame per tick.
///
/// Starts the mix if the session is idle. Returns the number of ticks played.
pub fn play<S: MixingSurface>(
    session: &mut MixingSession,
    surface: &mut S,
) -> Result<usize, S::Error> {
    if session.controls_enabled() {
        surface.present(&session.begin())?;
    }

    let mut ticks = 0;
    while let Ok(frame) = session.tick() {
        surface.present(&frame)?;
        ticks += 1;
    }
    Ok(ticks)
}
