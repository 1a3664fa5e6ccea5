//! Fixed-step frame driver
//!
//! Converts variable wall-clock frame times into zero or more fixed
//! simulation ticks. Rendering can run at whatever rate the platform
//! manages; physics and control only ever advance in `SIM_DT` increments,
//! so trajectories are reproducible from the delta stream alone.

use serde::{Deserialize, Serialize};

use super::state::SimState;
use super::tick::tick;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates real frame time and drains it in fixed increments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's real elapsed time and run catch-up ticks.
    ///
    /// The frame delta is clamped to `MAX_FRAME_DT` and at most
    /// `MAX_SUBSTEPS` ticks run per call; any backlog beyond that is
    /// discarded, so a stall slows the simulation down instead of producing
    /// an ever-growing catch-up burst. After every call the residual
    /// accumulator is below `SIM_DT`.
    ///
    /// Returns the number of ticks executed.
    pub fn advance(&mut self, state: &mut SimState, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if self.accumulator >= SIM_DT {
            // Substep cap hit: drop whole ticks of backlog, keep the phase
            log::warn!(
                "dropping {:.3}s of backlog after {} substeps",
                self.accumulator - self.accumulator % SIM_DT,
                substeps
            );
            self.accumulator %= SIM_DT;
        }

        substeps
    }

    /// Residual unconsumed real time, for diagnostics and tests
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }
}
