//! Bindings for the entropy-of-mixing demo.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use gas_mixing::{
    GasState, MixingFrame, MixingMode, MixingOutcome, MixingSession, MixingSurface, Stage, play,
};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::{from_js, js_error, to_js};

thread_local! {
    static SESSIONS: RefCell<HashMap<u32, MixingSession>> = RefCell::new(HashMap::new());
    static NEXT_SESSION_ID: RefCell<u32> = const { RefCell::new(0) };
    // Session id -> run currently driven by an animation loop
    static ANIMATING: RefCell<HashMap<u32, u64>> = RefCell::new(HashMap::new());
}

/// Register a loop for `run` of a session.
///
/// Fails when a loop already drives that run; a newer run takes the slot over.
fn claim_animation(session_id: u32, run: u64) -> bool {
    ANIMATING.with(|animating| {
        let mut animating = animating.borrow_mut();
        if animating.get(&session_id) == Some(&run) {
            return false;
        }
        animating.insert(session_id, run);
        true
    })
}

fn is_animating(session_id: u32, run: u64) -> bool {
    ANIMATING.with(|animating| animating.borrow().get(&session_id) == Some(&run))
}

/// Free the slot, unless a newer run has taken it over.
fn release_animation(session_id: u32, run: u64) {
    ANIMATING.with(|animating| {
        let mut animating = animating.borrow_mut();
        if animating.get(&session_id) == Some(&run) {
            animating.remove(&session_id);
        }
    });
}

/// Mixing result in display units.
#[derive(Clone, Debug, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub struct OutcomeSnapshot {
    pub mode: MixingMode,
    /// Moles of gas A
    pub moles_a: f64,
    /// Moles of gas B
    pub moles_b: f64,
    /// Partial pressures before mixing in bar
    pub initial_pressure_a: f64,
    pub initial_pressure_b: f64,
    /// Partial pressures after mixing in bar
    pub final_pressure_a: f64,
    pub final_pressure_b: f64,
    /// Entropy changes in J/K, unrounded
    pub entropy_a: f64,
    pub entropy_b: f64,
    pub entropy_total: f64,
}

impl From<&MixingOutcome> for OutcomeSnapshot {
    fn from(outcome: &MixingOutcome) -> Self {
        Self {
            mode: outcome.mode,
            moles_a: outcome.moles_a.to_moles(),
            moles_b: outcome.moles_b.to_moles(),
            initial_pressure_a: outcome.initial_pressure_a.to_bar(),
            initial_pressure_b: outcome.initial_pressure_b.to_bar(),
            final_pressure_a: outcome.final_pressure_a.to_bar(),
            final_pressure_b: outcome.final_pressure_b.to_bar(),
            entropy_a: outcome.entropy_a.to_joules_per_kelvin(),
            entropy_b: outcome.entropy_b.to_joules_per_kelvin(),
            entropy_total: outcome.entropy_total.to_joules_per_kelvin(),
        }
    }
}

/// Hands every frame to a JS function.
struct CallbackSurface {
    callback: js_sys::Function,
}

impl MixingSurface for CallbackSurface {
    type Error = JsValue;

    fn present(&mut self, frame: &MixingFrame) -> Result<(), JsValue> {
        let value = serde_wasm_bindgen::to_value(frame)?;
        self.callback.call1(&JsValue::NULL, &value)?;
        Ok(())
    }
}

fn with_session<T>(
    session_id: u32,
    f: impl FnOnce(&mut MixingSession) -> Result<T, JsError>,
) -> Result<T, JsError> {
    SESSIONS.with(|sessions| {
        let mut sessions = sessions.borrow_mut();
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| JsError::new(&format!("Mixing session {} not found", session_id)))?;
        f(session)
    })
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(f.as_ref().unchecked_ref())
}

/// Create a mixing demo with the default gas state.
///
/// Returns an id for use with the other `mixing_*` functions.
#[wasm_bindgen]
pub fn mixing_create() -> u32 {
    let id = NEXT_SESSION_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SESSIONS.with(|sessions| {
        sessions.borrow_mut().insert(id, MixingSession::new());
    });

    id
}

/// Delete a mixing demo. A running animation stops at its next frame.
#[wasm_bindgen]
pub fn mixing_delete(session_id: u32) {
    SESSIONS.with(|sessions| {
        sessions.borrow_mut().remove(&session_id);
    });
    ANIMATING.with(|animating| {
        animating.borrow_mut().remove(&session_id);
    });
}

/// Replace the gas state (slider or mode change).
///
/// # Arguments
/// * `session_id` - Demo ID
/// * `state` - Object with `pressureA`, `pressureB` (bar), `volumeRatio` and
///   `mode` ("remove-barrier" or "compress-right"); missing fields take defaults
///
/// # Returns
/// The new frame. Fails while the inputs are locked.
#[wasm_bindgen]
pub fn mixing_set_state(session_id: u32, state: JsValue) -> Result<JsValue, JsError> {
    let state: GasState = from_js(state)?;
    with_session(session_id, |session| {
        let frame = session.set_state(state).map_err(js_error)?;
        to_js(&frame)
    })
}

/// Lock the inputs and start mixing; advance with [`mixing_tick`].
#[wasm_bindgen]
pub fn mixing_start(session_id: u32) -> Result<JsValue, JsError> {
    with_session(session_id, |session| {
        let frame = session.start_mix().map_err(js_error)?;
        to_js(&frame)
    })
}

/// Advance a running mix by one frame.
#[wasm_bindgen]
pub fn mixing_tick(session_id: u32) -> Result<JsValue, JsError> {
    with_session(session_id, |session| {
        let frame = session.tick().map_err(js_error)?;
        to_js(&frame)
    })
}

/// Back to the default gas state with the inputs unlocked.
#[wasm_bindgen]
pub fn mixing_reset(session_id: u32) -> Result<JsValue, JsError> {
    with_session(session_id, |session| to_js(&session.reset()))
}

/// Current frame without changing anything.
#[wasm_bindgen]
pub fn mixing_frame(session_id: u32) -> Result<JsValue, JsError> {
    with_session(session_id, |session| to_js(&session.frame()))
}

/// End state of the current mix, or `null` before mixing has started.
#[wasm_bindgen]
pub fn mixing_outcome(session_id: u32) -> Result<JsValue, JsError> {
    with_session(session_id, |session| match session.outcome() {
        Some(outcome) => to_js(&OutcomeSnapshot::from(outcome)),
        None => Ok(JsValue::NULL),
    })
}

/// Run a whole mix at once, calling `callback` with each of its frames.
///
/// # Returns
/// Number of ticks played
#[wasm_bindgen]
pub fn mixing_play(session_id: u32, callback: js_sys::Function) -> Result<usize, JsError> {
    // Frames are collected first so the callback may call back into this module
    let mut frames = Recorder::default();
    let ticks = with_session(session_id, |session| {
        play(session, &mut frames).map_err(|_| JsError::new("recording failed"))
    })?;

    let mut surface = CallbackSurface { callback };
    for frame in &frames.0 {
        surface
            .present(frame)
            .map_err(|e| JsError::new(&format!("frame callback failed: {:?}", e)))?;
    }
    Ok(ticks)
}

#[derive(Default)]
struct Recorder(Vec<MixingFrame>);

impl MixingSurface for Recorder {
    type Error = std::convert::Infallible;

    fn present(&mut self, frame: &MixingFrame) -> Result<(), Self::Error> {
        self.0.push(frame.clone());
        Ok(())
    }
}

/// Animate a mix, one tick per animation frame.
///
/// Starts the mix if the demo is idle and calls `callback` with every frame
/// until the gases have settled. Resetting or deleting the demo ends the loop.
/// While a loop is already animating the current mix this does nothing.
#[wasm_bindgen]
pub fn mixing_animate(session_id: u32, callback: js_sys::Function) -> Result<(), JsError> {
    let (first, run) = with_session(session_id, |session| {
        let frame = if session.controls_enabled() {
            session.start_mix().map_err(js_error)?
        } else {
            session.frame()
        };
        Ok((frame, session.run()))
    })?;

    if first.stage == Stage::Mixing && !claim_animation(session_id, run) {
        debug!("mixing session {} is already animating", session_id);
        return Ok(());
    }

    let mut surface = CallbackSurface { callback };
    if let Err(e) = surface.present(&first) {
        release_animation(session_id, run);
        return Err(JsError::new(&format!("frame callback failed: {:?}", e)));
    }
    if first.stage != Stage::Mixing {
        return Ok(());
    }

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let stop = || {
            release_animation(session_id, run);
            let _ = f.borrow_mut().take();
        };

        let next = SESSIONS.with(|sessions| {
            sessions
                .borrow_mut()
                .get_mut(&session_id)
                .filter(|session| session.run() == run && is_animating(session_id, run))
                .map(|session| session.tick())
        });

        let Some(Ok(frame)) = next else {
            // Deleted, reset or restarted since the last frame
            stop();
            return;
        };

        if let Err(e) = surface.present(&frame) {
            warn!("mixing session {}: frame callback failed: {:?}", session_id, e);
            stop();
            return;
        }

        if frame.stage == Stage::Settled {
            stop();
            return;
        }

        if let Some(closure) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(closure) {
                warn!("mixing session {}: requestAnimationFrame failed: {:?}", session_id, e);
                release_animation(session_id, run);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(closure) = g.borrow().as_ref() {
        if let Err(e) = request_animation_frame(closure) {
            release_animation(session_id, run);
            return Err(JsError::new(&format!("requestAnimationFrame failed: {:?}", e)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_bar_and_joules_per_kelvin() {
        let outcome = gas_mixing::mix(&GasState::new(1.0, 0.0, 1.0, MixingMode::RemoveBarrier));
        let snapshot = OutcomeSnapshot::from(&outcome);

        assert_eq!(snapshot.initial_pressure_a, 1.0);
        assert!((snapshot.final_pressure_a - 0.5).abs() < 1e-12);
        assert_eq!(snapshot.entropy_b, 0.0);
        assert!((snapshot.entropy_a - 1.0e5 / 298.0 * 2f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn recorder_keeps_every_frame() {
        let mut session = MixingSession::new();
        let mut recorder = Recorder::default();
        let Ok(ticks) = play(&mut session, &mut recorder);
        assert_eq!(recorder.0.len(), ticks + 1);
    }

    #[test]
    fn one_animation_loop_per_run() {
        assert!(claim_animation(7, 1));
        assert!(!claim_animation(7, 1));
        assert!(is_animating(7, 1));

        // Restarted mix: the old loop loses its slot
        assert!(claim_animation(7, 2));
        assert!(!is_animating(7, 1));
        release_animation(7, 1);
        assert!(is_animating(7, 2));

        release_animation(7, 2);
        assert!(!is_animating(7, 2));
        assert!(claim_animation(7, 2));
        release_animation(7, 2);
    }

    #[test]
    fn restart_moves_the_run_on() {
        let mut session = MixingSession::new();
        session.start_mix().unwrap();
        let stale = session.run();
        assert!(claim_animation(8, stale));

        session.reset();
        session.start_mix().unwrap();
        assert_ne!(session.run(), stale);
        assert!(claim_animation(8, session.run()));
        assert!(!is_animating(8, stale));
        release_animation(8, session.run());
    }
}
