//! PID Hover - a feedback-control ball simulator
//!
//! A PID compensator drives a gravity-loaded point mass toward an
//! operator-settable target line. Physics runs at a fixed timestep,
//! decoupled from rendering frame rate.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (controller, body, fixed-step driver)
//! - `input`: Event boundary between the platform layer and the simulation
//! - `render`: Frame snapshots and render sinks

pub mod input;
pub mod render;
pub mod sim;

pub use sim::{Ball, FixedStep, Pid, SimState};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz physics)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted from the platform clock; anything above
    /// this (a stall, a debugger pause) is discarded rather than simulated
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 800.0;
    /// Ball edge length (the ball renders as a filled square)
    pub const BALL_SIZE: f32 = 30.0;

    /// Gravity acceleration along the controlled axis (pixels/s²)
    pub const GRAVITY: f32 = 98.0;
    /// Anti-windup clamp on the controller's integral accumulator
    pub const INTEGRAL_LIMIT: f32 = 1000.0;
    /// Fraction of velocity retained (sign-reversed) on boundary impact
    pub const RESTITUTION: f32 = 0.3;

    /// Initial gains
    pub const DEFAULT_KP: f32 = 80.0;
    pub const DEFAULT_KI: f32 = 0.0;
    pub const DEFAULT_KD: f32 = 0.0;
    /// Per-keypress tuning increments
    pub const KP_STEP: f32 = 5.0;
    pub const KI_STEP: f32 = 0.1;
    pub const KD_STEP: f32 = 5.0;
}

/// Top of the ball's travel range along the controlled axis
#[inline]
pub const fn travel_limit() -> f32 {
    consts::CANVAS_HEIGHT - consts::BALL_SIZE
}
