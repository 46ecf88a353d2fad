//! Classic Pong - two paddles, one ball
//!
//! Core modules:
//! - `sim`: Frame-synchronous simulation (kinematics, collisions, scoring)
//! - `tuning`: Physics constants gathered into one configuration object
//! - `input`: Key state to paddle intents, pause and quit
//! - `platform`: Frame clock and window-system key translation
//! - `renderer`: wgpu rendering pipeline
//! - `settings`: Presentation settings loaded at startup

pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Initial window size
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "Pong";

    /// Paddle defaults
    pub const PADDLE_SPEED: f32 = 175.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Distance from the paddle center to its screen edge
    pub const PADDLE_MARGIN: f32 = 35.0;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 16.0;
    pub const BALL_RADIUS: f32 = BALL_DIAMETER / 2.0;
    pub const BALL_INIT_VELOCITY: Vec2 = Vec2::new(150.0, 150.0);

    /// Frames to wait after a paddle hit before checking paddles again
    pub const COLLISION_COOLDOWN_FRAMES: u32 = 10;
    /// Horizontal speed multiplier applied on every paddle hit
    pub const PADDLE_BOOST: f32 = 1.1;
    /// Fraction of paddle velocity added to the ball's vertical velocity
    pub const SPIN_TRANSFER: f32 = 0.5;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Longest step the simulation accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Triangles in the ball mesh
    pub const BALL_SEGMENTS: u32 = 50;
}
