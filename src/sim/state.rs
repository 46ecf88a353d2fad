//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`].

use std::fmt;

use glam::Vec2;

use super::collision::PaddleContact;
use crate::tuning::Tuning;

/// Which half of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Playfield size in pixels, tracks the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Center of the paddle
    pub pos: Vec2,
    /// Vertical velocity set from input each frame (positive = up)
    pub vel_y: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self {
            side,
            pos,
            vel_y: 0.0,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Points per side; only ever incremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Console form: `L - R`
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

/// Debounce between paddle collisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cooldown {
    /// No paddle collision resolved yet
    #[default]
    Unset,
    /// Frames elapsed since the last resolved collision
    Armed(u32),
}

impl Cooldown {
    /// Count one frame if armed
    pub fn advance(&mut self) {
        if let Cooldown::Armed(frames) = self {
            *frames = frames.saturating_add(1);
        }
    }

    /// Start counting from a fresh collision
    pub fn rearm(&mut self) {
        *self = Cooldown::Armed(0);
    }

    /// Whether paddle collisions may be checked this frame
    pub fn is_ready(&self, threshold: u32) -> bool {
        match *self {
            Cooldown::Unset => true,
            Cooldown::Armed(frames) => frames >= threshold,
        }
    }
}

/// Pause flag and the integration multiplier derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PauseState {
    pub paused: bool,
    /// 0 while paused, 1 otherwise
    pub speed_multiplier: f32,
}

impl Default for PauseState {
    fn default() -> Self {
        Self {
            paused: false,
            speed_multiplier: 1.0,
        }
    }
}

impl PauseState {
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
        self.speed_multiplier = if self.paused { 0.0 } else { 1.0 };
    }
}

/// Things that happened during the last step
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// A point was scored; `score` is the total after it
    Scored { scorer: Side, score: Score },
    /// Ball reflected off a paddle
    PaddleHit { side: Side, contact: PaddleContact },
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub tuning: Tuning,
    /// Indexed by [`Side::index`]; use [`GameState::paddle`] to access
    paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    pub cooldown: Cooldown,
    pub pause: PauseState,
    /// Frames advanced so far
    pub frame: u64,
    /// Events of the most recent step
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Paddles centered vertically, ball at the center moving with the serve velocity
    pub fn new(width: f32, height: f32, tuning: Tuning) -> Self {
        let arena = Arena::new(width, height);
        let paddles = Side::ALL.map(|side| {
            let x = tuning.paddle_x(side, width);
            Paddle::new(side, Vec2::new(x, height / 2.0))
        });
        let ball = Ball {
            pos: arena.center(),
            vel: tuning.ball_init_velocity,
        };

        Self {
            arena,
            tuning,
            paddles,
            ball,
            score: Score::new(),
            cooldown: Cooldown::Unset,
            pause: PauseState::default(),
            frame: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    #[inline]
    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn paddles(&self) -> &[Paddle; 2] {
        &self.paddles
    }

    /// Recenter the ball and serve it toward the player who just scored
    pub fn serve(&mut self, scorer: Side) {
        let init = self.tuning.ball_init_velocity;
        let vel_x = match scorer {
            // Ball left through the left edge; serve toward the right
            Side::Right => init.x,
            Side::Left => -init.x,
        };
        self.ball.pos = self.arena.center();
        self.ball.vel = Vec2::new(vel_x, init.y);
    }

    /// Follow a viewport resize
    ///
    /// The right paddle's anchor moves with the new width and both paddles
    /// are pulled back inside the new height.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
        for side in Side::ALL {
            let x = self.tuning.paddle_x(side, width);
            let y = self.tuning.clamp_paddle_y(self.paddle(side).pos.y, height);
            self.paddle_mut(side).pos = Vec2::new(x, y);
        }
        log::debug!("Arena resized to {}x{}", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(800.0, 600.0, Tuning::default());
        assert_eq!(state.paddle(Side::Left).pos, Vec2::new(35.0, 300.0));
        assert_eq!(state.paddle(Side::Right).pos, Vec2::new(765.0, 300.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(150.0, 150.0));
        assert_eq!(state.score, Score::new());
        assert_eq!(state.cooldown, Cooldown::Unset);
        assert!(!state.pause.paused);
    }

    #[test]
    fn test_serve_direction() {
        let mut state = GameState::new(800.0, 600.0, Tuning::default());
        state.ball.pos = Vec2::new(3.0, 40.0);
        state.ball.vel = Vec2::new(-300.0, -20.0);

        state.serve(Side::Right);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(150.0, 150.0));

        state.serve(Side::Left);
        assert_eq!(state.ball.vel, Vec2::new(-150.0, 150.0));
    }

    #[test]
    fn test_resize_moves_right_paddle_and_reclamps() {
        let mut state = GameState::new(800.0, 600.0, Tuning::default());
        state.paddle_mut(Side::Left).pos.y = 542.0;

        state.resize(1024.0, 400.0);
        assert_eq!(state.paddle(Side::Right).pos.x, 989.0);
        assert_eq!(state.paddle(Side::Left).pos.x, 35.0);
        assert_eq!(state.paddle(Side::Left).pos.y, 342.0);
        assert_eq!(state.paddle(Side::Right).pos.y, 300.0);
        assert_eq!(state.arena.center(), Vec2::new(512.0, 200.0));
    }

    #[test]
    fn test_score_display_and_increment() {
        let mut score = Score::new();
        assert_eq!(score.to_string(), "0 - 0");
        score.increment(Side::Right);
        score.increment(Side::Right);
        score.increment(Side::Left);
        assert_eq!(score.to_string(), "1 - 2");
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_cooldown_counts_only_when_armed() {
        let mut cooldown = Cooldown::Unset;
        cooldown.advance();
        assert_eq!(cooldown, Cooldown::Unset);
        assert!(cooldown.is_ready(10));

        cooldown.rearm();
        assert_eq!(cooldown, Cooldown::Armed(0));
        for expected in 1..10 {
            cooldown.advance();
            assert_eq!(cooldown, Cooldown::Armed(expected));
            assert!(!cooldown.is_ready(10));
        }
        cooldown.advance();
        assert!(cooldown.is_ready(10));
    }

    #[test]
    fn test_cooldown_saturates() {
        let mut cooldown = Cooldown::Armed(u32::MAX);
        cooldown.advance();
        assert_eq!(cooldown, Cooldown::Armed(u32::MAX));
    }

    #[test]
    fn test_pause_toggle() {
        let mut pause = PauseState::default();
        assert_eq!(pause.speed_multiplier, 1.0);
        pause.toggle();
        assert!(pause.paused);
        assert_eq!(pause.speed_multiplier, 0.0);
        pause.toggle();
        assert!(!pause.paused);
        assert_eq!(pause.speed_multiplier, 1.0);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
        assert_eq!(Side::Right.as_str(), "right");
    }
}
