use crate::frame::{MixingFrame, Stage};
use crate::session::{MixingSession, MixingSurface, SessionError, play};
use crate::state::{GasState, MixingMode, ParameterError};

#[derive(Default)]
struct RecordingSurface {
    frames: Vec<MixingFrame>,
}

impl MixingSurface for RecordingSurface {
    type Error = ();

    fn present(&mut self, frame: &MixingFrame) -> Result<(), ()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Accepts a few frames, then fails.
struct FlakySurface {
    remaining: usize,
}

impl MixingSurface for FlakySurface {
    type Error = &'static str;

    fn present(&mut self, _frame: &MixingFrame) -> Result<(), Self::Error> {
        if self.remaining == 0 {
            return Err("surface gone");
        }
        self.remaining -= 1;
        Ok(())
    }
}

#[test]
fn new_session_is_idle() {
    let session = MixingSession::new();
    assert_eq!(session.stage(), Stage::Idle);
    assert!(session.controls_enabled());
    assert!(session.outcome().is_none());
    assert_eq!(*session.state(), GasState::default());
}

#[test]
fn set_state_while_idle() {
    let mut session = MixingSession::new();
    let state = GasState::new(1.0, 0.2, 2.0, MixingMode::CompressRight);

    let frame = session.set_state(state).unwrap();
    assert_eq!(*session.state(), state);
    assert_eq!(frame.sliders.pressure_a, "1.00 bar");
}

#[test]
fn invalid_state_is_rejected_and_kept_out() {
    let mut session = MixingSession::new();
    let err = session
        .set_state(GasState::new(0.5, -1.0, 1.0, MixingMode::RemoveBarrier))
        .unwrap_err();

    assert_eq!(
        err,
        SessionError::InvalidState(ParameterError::Negative {
            name: "pressure of gas B",
            value: -1.0
        })
    );
    assert_eq!(*session.state(), GasState::default());
}

#[test]
fn mixing_locks_inputs() {
    let mut session = MixingSession::new();
    let frame = session.start_mix().unwrap();

    assert_eq!(frame.stage, Stage::Mixing);
    assert!(!session.controls_enabled());
    assert!(session.outcome().is_some());
    assert_eq!(
        session.set_state(GasState::default()),
        Err(SessionError::Locked)
    );
    assert_eq!(session.start_mix(), Err(SessionError::AlreadyStarted));
}

#[test]
fn settles_after_fifty_ticks() {
    let mut session = MixingSession::new();
    session.start_mix().unwrap();

    for _ in 0..49 {
        assert_eq!(session.tick().unwrap().stage, Stage::Mixing);
    }
    let last = session.tick().unwrap();
    assert_eq!(last.stage, Stage::Settled);
    assert_eq!(last.progress, 1.0);
    assert_eq!(session.stage(), Stage::Settled);
    assert_eq!(session.tick(), Err(SessionError::NotMixing));
}

#[test]
fn settled_stays_locked_until_reset() {
    let mut session = MixingSession::new();
    session.start_mix().unwrap();
    while session.tick().is_ok() {}

    assert!(!session.controls_enabled());
    assert_eq!(
        session.set_state(GasState::default()),
        Err(SessionError::Locked)
    );

    let frame = session.reset();
    assert_eq!(frame.stage, Stage::Idle);
    assert!(session.controls_enabled());
    assert!(session.outcome().is_none());
}

#[test]
fn reset_restores_defaults() {
    let mut session = MixingSession::new();
    session
        .set_state(GasState::new(1.5, 0.1, 0.5, MixingMode::CompressRight))
        .unwrap();
    session.reset();
    assert_eq!(*session.state(), GasState::default());
}

#[test]
fn tick_while_idle() {
    let mut session = MixingSession::new();
    assert_eq!(session.tick(), Err(SessionError::NotMixing));
}

#[test]
fn settled_frame_shows_final_entropy() {
    let mut session = MixingSession::new();
    session
        .set_state(GasState::new(1.0, 1.0, 1.0, MixingMode::RemoveBarrier))
        .unwrap();
    session.start_mix().unwrap();
    while session.tick().is_ok() {}

    let outcome = *session.outcome().unwrap();
    let entropy = session.frame().entropy.unwrap();
    assert_eq!(entropy.gas_a, outcome.entropy_a.rounded());
    assert_eq!(entropy.gas_b, 233);
    assert_eq!(entropy.total, 466);
}

#[test]
fn run_changes_on_start_and_reset_only() {
    let mut session = MixingSession::new();
    let idle = session.run();

    session.set_state(GasState::default()).unwrap();
    assert_eq!(session.run(), idle);

    session.start_mix().unwrap();
    let first = session.run();
    assert_ne!(first, idle);

    session.tick().unwrap();
    assert_eq!(session.run(), first);
    assert_eq!(session.start_mix(), Err(SessionError::AlreadyStarted));
    assert_eq!(session.run(), first);

    // Reset and restart between two frames
    session.reset();
    let after_reset = session.run();
    assert_ne!(after_reset, first);
    session.start_mix().unwrap();
    assert_ne!(session.run(), first);
    assert_ne!(session.run(), after_reset);
}

#[test]
fn play_runs_the_whole_animation() {
    let mut session = MixingSession::new();
    let mut surface = RecordingSurface::default();

    let ticks = play(&mut session, &mut surface).unwrap();

    assert_eq!(ticks, 50);
    assert_eq!(surface.frames.len(), 51);
    assert_eq!(surface.frames[0].progress, 0.0);
    assert_eq!(surface.frames.last().map(|f| f.stage), Some(Stage::Settled));
    assert!(
        surface
            .frames
            .windows(2)
            .all(|pair| pair[0].progress < pair[1].progress)
    );
}

#[test]
fn play_after_settling_does_nothing() {
    let mut session = MixingSession::new();
    play(&mut session, &mut RecordingSurface::default()).unwrap();

    let mut surface = RecordingSurface::default();
    assert_eq!(play(&mut session, &mut surface), Ok(0));
    assert!(surface.frames.is_empty());
}

#[test]
fn play_stops_on_surface_error() {
    let mut session = MixingSession::new();
    let mut surface = FlakySurface { remaining: 3 };

    assert_eq!(play(&mut session, &mut surface), Err("surface gone"));
    assert_eq!(session.stage(), Stage::Mixing);
}
