//! Point-mass ball constrained to one axis
//!
//! Semi-implicit Euler under gravity plus the controller force, with a
//! damped bounce where the travel range ends. Position and velocity are the
//! authoritative state; the canvas rectangle is a quantized projection for
//! display only and never feeds back into physics.

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_SIZE, CANVAS_WIDTH, GRAVITY, RESTITUTION};
use crate::travel_limit;

/// Integer pixel rectangle in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// The controlled body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Position of the ball's top edge along the controlled axis (sub-pixel)
    pub pos: f32,
    /// Velocity along the controlled axis
    pub vel: f32,
    /// Quantized display rectangle, recomputed every update
    pub rect: CanvasRect,
}

impl Default for Ball {
    fn default() -> Self {
        let pos = crate::consts::CANVAS_HEIGHT / 2.0;
        Self {
            pos,
            vel: 0.0,
            rect: CanvasRect {
                x: (CANVAS_WIDTH / 2.0 - BALL_SIZE / 2.0) as i32,
                y: pos as i32,
                w: BALL_SIZE as u32,
                h: BALL_SIZE as u32,
            },
        }
    }
}

impl Ball {
    /// Measured value fed back to the controller: the ball's center
    #[inline]
    pub fn center(&self) -> f32 {
        self.pos + BALL_SIZE / 2.0
    }

    /// Advance one fixed step under the applied control force.
    ///
    /// Unit mass, so the force is an acceleration. Velocity integrates
    /// before position (semi-implicit Euler). Always succeeds; the boundary
    /// bounce keeps `pos` inside the travel range.
    pub fn update(&mut self, force: f32, dt: f32) {
        let acceleration = force - GRAVITY;
        self.vel += acceleration * dt;
        self.pos += self.vel * dt;
        self.constrain();
        self.rect.y = self.pos as i32;
    }

    /// Clamp to the travel range, reversing velocity with restitution
    fn constrain(&mut self) {
        if self.pos < 0.0 {
            self.pos = 0.0;
            self.vel *= -RESTITUTION;
        } else if self.pos > travel_limit() {
            self.pos = travel_limit();
            self.vel *= -RESTITUTION;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    #[test]
    fn test_free_fall_tick() {
        let mut ball = Ball::default();
        let start = ball.pos;
        ball.update(0.0, SIM_DT);
        // One semi-implicit Euler step with zero force
        let expected_vel = -GRAVITY * SIM_DT;
        assert_eq!(ball.vel, expected_vel);
        assert_eq!(ball.pos, start + expected_vel * SIM_DT);
    }

    #[test]
    fn test_force_balances_gravity() {
        let mut ball = Ball::default();
        let start = ball.pos;
        ball.update(GRAVITY, SIM_DT);
        assert_eq!(ball.vel, 0.0);
        assert_eq!(ball.pos, start);
    }

    #[test]
    fn test_lower_boundary_bounce() {
        let mut ball = Ball::default();
        ball.pos = 0.0;
        ball.vel = -120.0;
        ball.update(0.0, SIM_DT);
        assert_eq!(ball.pos, 0.0);
        assert!(ball.vel >= 0.0, "velocity must reverse, got {}", ball.vel);
    }

    #[test]
    fn test_upper_boundary_bounce() {
        let mut ball = Ball::default();
        ball.pos = travel_limit();
        ball.vel = 500.0;
        ball.update(GRAVITY * 2.0, SIM_DT);
        assert_eq!(ball.pos, travel_limit());
        assert!(ball.vel <= 0.0, "velocity must reverse, got {}", ball.vel);
    }

    #[test]
    fn test_rect_tracks_position() {
        let mut ball = Ball::default();
        ball.update(0.0, SIM_DT);
        assert_eq!(ball.rect.y, ball.pos as i32);
        assert_eq!(ball.rect.w, BALL_SIZE as u32);
    }

    proptest! {
        #[test]
        fn test_containment_under_any_forces(
            forces in prop::collection::vec(-5000.0f32..5000.0, 0..500),
        ) {
            let mut ball = Ball::default();
            for force in forces {
                ball.update(force, SIM_DT);
                prop_assert!(ball.pos >= 0.0);
                prop_assert!(ball.pos <= travel_limit());
            }
        }
    }
}
