//! Mix two gases in both modes and print the animation in text form.
//!
//! Run with: cargo run --package gas-mixing --example mix_gases

use gas_mixing::{GasState, MixingFrame, MixingMode, MixingSession, MixingSurface, play};

/// Prints every tenth frame.
struct Terminal {
    seen: usize,
}

impl MixingSurface for Terminal {
    type Error = std::convert::Infallible;

    fn present(&mut self, frame: &MixingFrame) -> Result<(), Self::Error> {
        if self.seen % 10 == 0 || frame.progress >= 1.0 {
            let entropy = frame
                .entropy
                .map(|e| format!("dS_A={:>5} dS_B={:>5} dS={:>5}", e.gas_a, e.gas_b, e.total))
                .unwrap_or_default();
            println!(
                "  {:>4.0}%  P_A={} bar  P_B={} bar  {}  left={} right={} card={}",
                frame.progress * 100.0,
                frame.pressure_a,
                frame.pressure_b,
                entropy,
                frame.left.background,
                frame.right.background,
                frame.card_background,
            );
        }
        self.seen += 1;
        Ok(())
    }
}

fn main() {
    let cases = [
        GasState::new(1.0, 1.0, 1.0, MixingMode::RemoveBarrier),
        GasState::new(1.2, 0.4, 3.0, MixingMode::RemoveBarrier),
        GasState::new(0.5, 0.5, 1.0, MixingMode::CompressRight),
        GasState::new(0.5, 0.8, 3.0, MixingMode::CompressRight),
    ];

    for state in cases {
        println!(
            "{:?}: P_A={} bar, P_B={} bar, V_A/V_B={}",
            state.mode, state.pressure_a, state.pressure_b, state.volume_ratio
        );

        let mut session = MixingSession::new();
        if let Err(e) = session.set_state(state) {
            println!("  skipped: {}", e);
            continue;
        }

        let Ok(ticks) = play(&mut session, &mut Terminal { seen: 0 });
        println!("  settled after {} frames\n", ticks);
    }
}
