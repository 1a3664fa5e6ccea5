//! Deterministic simulation module
//!
//! All control and physics logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Stable update order (controller, then body)
//! - No rendering or platform dependencies

pub mod body;
pub mod driver;
pub mod pid;
pub mod state;
pub mod tick;

pub use body::{Ball, CanvasRect};
pub use driver::FixedStep;
pub use pid::Pid;
pub use state::SimState;
pub use tick::tick;
