//! PID compensator
//!
//! Classic PID-on-error with a clamped integral (anti-windup). The
//! derivative term differentiates the error signal directly, so a setpoint
//! step produces a one-tick derivative kick; that transient is part of the
//! observable behavior, not smoothed away.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_KD, DEFAULT_KI, DEFAULT_KP, INTEGRAL_LIMIT};

/// Stateful PID controller for a single axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pid {
    /// Proportional gain
    pub kp: f32,
    /// Integral gain
    pub ki: f32,
    /// Derivative gain
    pub kd: f32,
    integral: f32,
    prev_error: f32,
}

impl Default for Pid {
    fn default() -> Self {
        Self::new(DEFAULT_KP, DEFAULT_KI, DEFAULT_KD)
    }
}

impl Pid {
    pub fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral: 0.0,
            prev_error: 0.0,
        }
    }

    /// Advance the compensator one step and return the control force.
    ///
    /// `dt` must be positive: the derivative estimate divides by it, and a
    /// zero step yields an infinite or NaN output. The fixed-step driver
    /// guarantees this by construction, so it is a caller contract rather
    /// than a runtime check.
    ///
    /// Not idempotent: every call consumes the step, moving the integral
    /// accumulator and the stored error.
    pub fn calculate(&mut self, setpoint: f32, measured: f32, dt: f32) -> f32 {
        let error = setpoint - measured;
        self.integral += error * dt;
        // Anti-windup: clamp the accumulated sum, not the increment
        self.integral = self.integral.clamp(-INTEGRAL_LIMIT, INTEGRAL_LIMIT);
        let derivative = (error - self.prev_error) / dt;
        self.prev_error = error;
        // Output is deliberately unclamped; the body saturates physically
        self.kp * error + self.ki * self.integral + self.kd * derivative
    }

    /// Clear integral and derivative memory, keeping the gains.
    ///
    /// Recovers from instability without losing the current tuning.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }

    /// Zero only the integral accumulator (used when the target moves)
    pub fn clear_integral(&mut self) {
        self.integral = 0.0;
    }

    /// Current integral accumulator, for diagnostics and tests
    pub fn integral(&self) -> f32 {
        self.integral
    }
}
