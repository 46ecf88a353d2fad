//! Physics tuning
//!
//! Fixed at startup. Defaults mirror [`crate::consts`]; tests build their own
//! values to pin down determinism (for example a rally speed cap).

use glam::Vec2;

use crate::consts::*;
use crate::sim::Side;

/// Physics parameters shared by the simulation and the input mapper
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Paddle speed while a key is held (pixels/s)
    pub paddle_speed: f32,
    /// Paddle width and height
    pub paddle_size: Vec2,
    /// Distance from each paddle center to its screen edge
    pub paddle_margin: f32,
    pub ball_radius: f32,
    /// Serve velocity; x sign is chosen by the scoring side
    pub ball_init_velocity: Vec2,
    /// Frames between two resolved paddle collisions
    pub cooldown_frames: u32,
    /// Multiplier applied to the ball's x velocity on every paddle hit
    pub paddle_boost: f32,
    /// Fraction of paddle velocity transferred to the ball
    pub spin_transfer: f32,
    /// Optional cap on |velocity.x|; `None` lets rallies speed up forever
    pub max_ball_speed_x: Option<f32>,
    /// Longest accepted step (seconds)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: PADDLE_SPEED,
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_init_velocity: BALL_INIT_VELOCITY,
            cooldown_frames: COLLISION_COOLDOWN_FRAMES,
            paddle_boost: PADDLE_BOOST,
            spin_transfer: SPIN_TRANSFER,
            max_ball_speed_x: None,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    #[inline]
    pub fn half_paddle(&self) -> Vec2 {
        self.paddle_size / 2.0
    }

    /// Closest a paddle center may get to the top or bottom edge
    #[inline]
    pub fn paddle_boundary(&self) -> f32 {
        self.half_paddle().y + self.ball_radius
    }

    /// Lowest and highest legal paddle center for a screen height
    ///
    /// A screen too short to fit the paddle collapses the range to its middle.
    pub fn paddle_range(&self, height: f32) -> (f32, f32) {
        let low = self.paddle_boundary();
        let high = height - low;
        if low > high {
            let mid = height / 2.0;
            (mid, mid)
        } else {
            (low, high)
        }
    }

    /// Clamp paddle Y to the screen bounds
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        let (low, high) = self.paddle_range(height);
        y.clamp(low, high)
    }

    /// X anchor of a paddle for a screen width
    pub fn paddle_x(&self, side: Side, width: f32) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => width - self.paddle_margin,
        }
    }

    /// Apply the paddle boost (and the cap, if any) to a horizontal velocity
    pub fn boost(&self, vel_x: f32) -> f32 {
        let boosted = vel_x * self.paddle_boost;
        match self.max_ball_speed_x {
            Some(cap) => boosted.clamp(-cap, cap),
            None => boosted,
        }
    }
}
