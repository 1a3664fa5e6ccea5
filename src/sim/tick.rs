//! Fixed timestep simulation tick
//!
//! One tick is one controller/body pair: compute the control force from the
//! current error, then integrate the body under it. Nothing else happens at
//! tick resolution; input mutation and rendering live at frame resolution.

use super::state::SimState;

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimState, dt: f32) {
    state.time_ticks += 1;
    let force = state.pid.calculate(state.target, state.ball.center(), dt);
    state.ball.update(force, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GRAVITY, SIM_DT};

    #[test]
    fn test_zero_error_tick_is_free_fall() {
        // Kp=80, Ki=Kd=0, target pinned to the starting center: the error is
        // zero, so the only acceleration is gravity.
        let mut state = SimState::new();
        state.target = state.ball.center();
        let start = state.ball.pos;

        tick(&mut state, SIM_DT);

        assert_eq!(state.ball.vel, -GRAVITY * SIM_DT);
        assert_eq!(state.ball.pos, start - GRAVITY * SIM_DT * SIM_DT);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_controller_pushes_toward_target() {
        let mut state = SimState::new();
        state.target = state.ball.center() + 100.0;

        tick(&mut state, SIM_DT);

        // Positive error with Kp=80 overwhelms gravity (8000 vs 98)
        assert!(state.ball.vel > 0.0);
    }

    #[test]
    fn test_tick_counter_advances() {
        let mut state = SimState::new();
        for _ in 0..5 {
            tick(&mut state, SIM_DT);
        }
        assert_eq!(state.time_ticks, 5);
    }
}
