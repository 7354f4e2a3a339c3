//! Entropy changes on mixing two ideal gases.
//!
//! Gas A (red) and gas B (blue) start in two chambers of a 2 m³ container at
//! 298 K. They are mixed isothermally either by removing the barrier between
//! the chambers or by pushing gas A into chamber B. [`mix`] computes the end
//! state once; an [`Animator`] then walks the display from the initial to the
//! final state while a [`MixingSession`] keeps the inputs locked.
//!
//! # Example
//!
//! ```rust
//! use gas_mixing::{GasState, MixingMode, mix};
//!
//! let outcome = mix(&GasState::new(1.0, 1.0, 1.0, MixingMode::RemoveBarrier));
//! assert!(outcome.entropy_total.to_joules_per_kelvin() > 0.0);
//! ```

pub mod animator;
pub mod color;
pub mod constants;
pub mod frame;
pub mod mixing;
pub mod session;
pub mod state;

#[cfg(test)]
mod mixing_test;
#[cfg(test)]
mod session_test;

pub use animator::Animator;
pub use color::{Color, Rgb};
pub use frame::{ChamberView, EntropyReadouts, MixingFrame, SliderReadouts, Stage};
pub use mixing::{MixingOutcome, compression_entropy, expansion_entropy, mix};
pub use session::{MixingSession, MixingSurface, SessionError, play};
pub use state::{GasState, MixingMode, ParameterError};
