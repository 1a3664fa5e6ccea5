//! Simulation state and input application
//!
//! `SimState` is the whole world: controller, ball, target, tick counter.
//! The frame loop owns exactly one of these and mutates it synchronously,
//! events first, then physics ticks.

use serde::{Deserialize, Serialize};

use super::body::Ball;
use super::pid::Pid;
use crate::consts::{CANVAS_HEIGHT, KD_STEP, KI_STEP, KP_STEP};
use crate::input::{InputEvent, TuneKey};

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// The compensator driving the ball toward the target
    pub pid: Pid,
    /// The controlled body
    pub ball: Ball,
    /// Setpoint the controller drives the ball's center toward
    pub target: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimState {
    pub fn new() -> Self {
        Self {
            pid: Pid::default(),
            ball: Ball::default(),
            target: CANVAS_HEIGHT / 2.0,
            time_ticks: 0,
        }
    }

    /// Replace the setpoint.
    ///
    /// Also zeroes the integral accumulator: windup built against the old
    /// target would otherwise bias the approach to the new one.
    pub fn set_target(&mut self, target: f32) {
        log::debug!("target {} -> {}", self.target, target);
        self.target = target;
        self.pid.clear_integral();
    }

    /// Apply one input event. `Quit` is the frame loop's concern, not ours.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Quit => {}
            InputEvent::PointerDown(pos) => self.set_target(pos.y),
            InputEvent::Key(key) => self.tune(*key),
        }
    }

    /// Adjust a gain by its keypress step, flooring at zero
    fn tune(&mut self, key: TuneKey) {
        let pid = &mut self.pid;
        match key {
            TuneKey::KpUp => pid.kp += KP_STEP,
            TuneKey::KpDown => pid.kp = (pid.kp - KP_STEP).max(0.0),
            TuneKey::KiUp => pid.ki += KI_STEP,
            TuneKey::KiDown => pid.ki = (pid.ki - KI_STEP).max(0.0),
            TuneKey::KdUp => pid.kd += KD_STEP,
            TuneKey::KdDown => pid.kd = (pid.kd - KD_STEP).max(0.0),
            TuneKey::Reset => {
                log::info!("controller reset");
                pid.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_KP, SIM_DT};
    use glam::Vec2;

    #[test]
    fn test_retarget_clears_integral() {
        let mut state = SimState::new();
        state.pid.ki = 1.0;
        // Build up some windup
        for _ in 0..10 {
            state.pid.calculate(state.target, 0.0, SIM_DT);
        }
        assert!(state.pid.integral() > 0.0);

        state.apply(&InputEvent::PointerDown(Vec2::new(120.0, 650.0)));
        assert_eq!(state.target, 650.0);
        assert_eq!(state.pid.integral(), 0.0);
    }

    #[test]
    fn test_gain_steps_and_floors() {
        let mut state = SimState::new();
        state.apply(&InputEvent::Key(TuneKey::KpUp));
        assert_eq!(state.pid.kp, DEFAULT_KP + KP_STEP);

        // Ki starts at zero; stepping down must not go negative
        state.apply(&InputEvent::Key(TuneKey::KiDown));
        assert_eq!(state.pid.ki, 0.0);
        state.apply(&InputEvent::Key(TuneKey::KiUp));
        assert_eq!(state.pid.ki, KI_STEP);

        state.apply(&InputEvent::Key(TuneKey::KdUp));
        state.apply(&InputEvent::Key(TuneKey::KdDown));
        state.apply(&InputEvent::Key(TuneKey::KdDown));
        assert_eq!(state.pid.kd, 0.0);
    }

    #[test]
    fn test_reset_key_keeps_gains() {
        let mut state = SimState::new();
        state.pid.calculate(0.0, 500.0, SIM_DT);
        state.apply(&InputEvent::Key(TuneKey::Reset));
        assert_eq!(state.pid.integral(), 0.0);
        assert_eq!(state.pid.kp, DEFAULT_KP);
    }

    #[test]
    fn test_quit_is_inert_for_sim_state() {
        let mut state = SimState::new();
        let before = state.clone();
        state.apply(&InputEvent::Quit);
        assert_eq!(state.target, before.target);
        assert_eq!(state.time_ticks, before.time_ticks);
    }
}
