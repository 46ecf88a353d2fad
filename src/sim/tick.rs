//! Per-frame simulation step
//!
//! Advances the game state by one timestep in a fixed phase order:
//! cooldown, wall bounce, scoring, serve, paddle collision, integration.
//! Frame loops drive it through [`super::FixedStep`] so no single step is
//! long enough to carry the ball across a paddle face.

use std::fmt;

use super::collision::{candidate_paddle, goal_scorer, paddle_contact, reflect, touches_wall};
use super::state::{GameEvent, GameState, Side};

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left paddle velocity intent (positive = up)
    pub left: f32,
    /// Right paddle velocity intent
    pub right: f32,
    /// Pause toggle (edge-triggered by the caller)
    pub pause: bool,
}

impl TickInput {
    pub fn paddle_velocity(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A frame the simulation refuses to run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepError {
    /// Elapsed time was NaN or infinite
    NonFiniteDt(f32),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::NonFiniteDt(dt) => write!(f, "non-finite frame time: {dt}"),
        }
    }
}

impl std::error::Error for StepError {}

/// Sanitize a wall-clock frame time
///
/// Negative values become 0 and anything over `max_dt` is cut to `max_dt`.
/// A `max_dt` that is not a positive finite number imposes no limit.
pub fn clamp_dt(dt: f32, max_dt: f32) -> Result<f32, StepError> {
    if !dt.is_finite() {
        return Err(StepError::NonFiniteDt(dt));
    }
    let dt = dt.max(0.0);
    if max_dt.is_finite() && max_dt > 0.0 {
        Ok(dt.min(max_dt))
    } else {
        Ok(dt)
    }
}

/// Advance the game state by `dt` seconds
///
/// The events produced by this frame replace those of the previous one in
/// `state.events`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Result<(), StepError> {
    let raw_dt = dt;
    let dt = clamp_dt(raw_dt, state.tuning.max_frame_dt)?;
    if dt < raw_dt {
        log::debug!("Frame time {:.3}s clamped to {:.3}s", raw_dt, dt);
    }

    state.events.clear();

    if input.pause {
        state.pause.toggle();
        log::info!("{}", if state.pause.paused { "Paused" } else { "Resumed" });
    }

    for side in Side::ALL {
        state.paddle_mut(side).vel_y = input.paddle_velocity(side);
    }

    // No time passed, nothing moves
    if dt == 0.0 {
        return Ok(());
    }

    state.frame += 1;
    state.cooldown.advance();

    // Contacts are frozen while paused so a ball resting on a wall is not
    // reflected again every frame
    if !state.pause.paused {
        resolve_contacts(state);
    }

    integrate(state, dt);

    Ok(())
}

/// Walls, goals, serve and paddle collision for one frame
fn resolve_contacts(state: &mut GameState) {
    let radius = state.tuning.ball_radius;

    if touches_wall(state.ball.pos, radius, &state.arena) {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    if let Some(scorer) = goal_scorer(state.ball.pos, radius, &state.arena) {
        state.score.increment(scorer);
        state.serve(scorer);
        log::info!("Point to {} player: {}", scorer.as_str(), state.score);
        state.events.push(GameEvent::Scored {
            scorer,
            score: state.score,
        });
    }

    if state.cooldown.is_ready(state.tuning.cooldown_frames) {
        let side = candidate_paddle(state.ball.pos.x, &state.arena);
        let paddle = state.paddle(side);
        let half = state.tuning.half_paddle();

        if let Some(contact) = paddle_contact(state.ball.pos, radius, paddle, half) {
            let paddle_vel = paddle.vel_y;
            let mut vel = reflect(state.ball.vel, contact.axis);
            vel.x = state.tuning.boost(vel.x);
            vel.y += state.tuning.spin_transfer * paddle_vel;
            state.ball.vel = vel;
            state.cooldown.rearm();

            log::debug!(
                "Paddle hit ({}, {:?}), ball velocity now ({:.1}, {:.1})",
                side.as_str(),
                contact.kind,
                vel.x,
                vel.y
            );
            state.events.push(GameEvent::PaddleHit { side, contact });
        }
    }
}

/// Move paddles and ball, scaled by the pause multiplier
fn integrate(state: &mut GameState, dt: f32) {
    let step = dt * state.pause.speed_multiplier;
    let height = state.arena.height;

    for side in Side::ALL {
        let paddle = state.paddle(side);
        let y = paddle.pos.y + paddle.vel_y * step;
        let y = state.tuning.clamp_paddle_y(y, height);
        state.paddle_mut(side).pos.y = y;
    }

    state.ball.pos += state.ball.vel * step;
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::collision::{Axis, ContactKind};
    use crate::sim::state::Cooldown;
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::new(800.0, 600.0, Tuning::default())
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_ball_moves_with_velocity() {
        let mut state = new_state();
        tick(&mut state, &idle(), 0.1).unwrap();
        assert!((state.ball.pos - Vec2::new(415.0, 315.0)).length() < 1e-3);
        assert_eq!(state.frame, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_wall_bounce_top_and_bottom() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 592.0);
        state.ball.vel = Vec2::new(150.0, 150.0);
        tick(&mut state, &idle(), DT).unwrap();
        assert_eq!(state.ball.vel, Vec2::new(150.0, -150.0));
        assert_eq!(state.events, vec![GameEvent::WallBounce]);

        state.ball.pos = Vec2::new(400.0, 5.0);
        state.ball.vel = Vec2::new(-150.0, -150.0);
        tick(&mut state, &idle(), DT).unwrap();
        assert_eq!(state.ball.vel, Vec2::new(-150.0, 150.0));
    }

    #[test]
    fn test_right_player_scores_on_left_edge() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(8.0, 200.0);
        state.ball.vel = Vec2::new(-181.5, 40.0);
        tick(&mut state, &idle(), 0.0001).unwrap();

        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.vel, Vec2::new(150.0, 150.0));
        assert!((state.ball.pos - Vec2::new(400.0, 300.0)).length() < 0.1);
        assert!(state.events.contains(&GameEvent::Scored {
            scorer: Side::Right,
            score: state.score,
        }));
    }

    #[test]
    fn test_left_player_scores_on_right_edge() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(795.0, 400.0);
        state.ball.vel = Vec2::new(300.0, -10.0);
        tick(&mut state, &idle(), 0.0001).unwrap();

        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.vel, Vec2::new(-150.0, 150.0));
    }

    #[test]
    fn test_left_paddle_face_hit() {
        let mut state = new_state();
        // Ball center on the left paddle's face, moving into it
        state.ball.pos = Vec2::new(40.0, 300.0);
        state.ball.vel = Vec2::new(-150.0, 0.0);
        tick(&mut state, &idle(), DT).unwrap();

        assert!((state.ball.vel.x - 165.0).abs() < 1e-3);
        assert_eq!(state.ball.vel.y, 0.0);
        assert_eq!(state.cooldown, Cooldown::Armed(0));
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::PaddleHit {
                side: Side::Left,
                contact,
            }] if contact.kind == ContactKind::SideFace && contact.axis == Axis::X
        ));
    }

    #[test]
    fn test_ball_travels_into_paddle_face() {
        let mut state = new_state();
        // 0.1s at -150px/s puts the ball center just inside the face
        state.ball.pos = Vec2::new(54.0, 300.0);
        state.ball.vel = Vec2::new(-150.0, 0.0);

        tick(&mut state, &idle(), 0.1).unwrap();
        assert!(state.events.is_empty());
        assert!((state.ball.pos.x - 39.0).abs() < 1e-3);

        tick(&mut state, &idle(), DT).unwrap();
        assert!(state.ball.vel.x > 0.0);
        assert_eq!(state.cooldown, Cooldown::Armed(0));
    }

    #[test]
    fn test_right_paddle_hit_with_spin() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(760.0, 300.0);
        state.ball.vel = Vec2::new(200.0, 10.0);
        let input = TickInput {
            right: 175.0,
            ..Default::default()
        };
        tick(&mut state, &input, DT).unwrap();

        assert!((state.ball.vel.x - (-220.0)).abs() < 1e-3);
        assert!((state.ball.vel.y - 97.5).abs() < 1e-3);
    }

    #[test]
    fn test_cooldown_blocks_repeat_hits() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(40.0, 300.0);
        state.ball.vel = Vec2::new(-150.0, 0.0);
        tick(&mut state, &idle(), DT).unwrap();
        let after_hit = state.ball.vel;

        // Keep the ball pinned on the face for the next frames
        for frame in 1..10 {
            state.ball.pos = Vec2::new(40.0, 300.0);
            tick(&mut state, &idle(), DT).unwrap();
            assert_eq!(state.cooldown, Cooldown::Armed(frame));
            assert_eq!(state.ball.vel, after_hit);
        }

        // Tenth frame after the hit: paddles are checked again
        state.ball.pos = Vec2::new(40.0, 300.0);
        tick(&mut state, &idle(), DT).unwrap();
        assert_eq!(state.cooldown, Cooldown::Armed(0));
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_paddles_follow_intents_and_clamp() {
        let mut state = new_state();
        let input = TickInput {
            left: 175.0,
            right: -175.0,
            ..Default::default()
        };
        tick(&mut state, &input, 0.1).unwrap();
        assert!((state.paddle(Side::Left).pos.y - 317.5).abs() < 1e-3);
        assert!((state.paddle(Side::Right).pos.y - 282.5).abs() < 1e-3);

        for _ in 0..40 {
            tick(&mut state, &input, 0.1).unwrap();
        }
        assert_eq!(state.paddle(Side::Left).pos.y, 542.0);
        assert_eq!(state.paddle(Side::Right).pos.y, 58.0);
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 5.0);
        let before = state.clone();
        let input = TickInput {
            left: 175.0,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0).unwrap();

        assert_eq!(state.ball, before.ball);
        assert_eq!(state.score, before.score);
        assert_eq!(state.paddle(Side::Left).pos, before.paddle(Side::Left).pos);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_pause_freezes_positions() {
        let mut state = new_state();
        let pause = TickInput {
            pause: true,
            left: 175.0,
            ..Default::default()
        };
        tick(&mut state, &pause, DT).unwrap();
        assert!(state.pause.paused);
        assert_eq!(state.pause.speed_multiplier, 0.0);

        let ball = state.ball.clone();
        let left = state.paddle(Side::Left).pos;
        let moving = TickInput {
            left: 175.0,
            right: -175.0,
            ..Default::default()
        };
        for _ in 0..5 {
            tick(&mut state, &moving, 0.05).unwrap();
        }
        assert_eq!(state.ball, ball);
        assert_eq!(state.paddle(Side::Left).pos, left);

        let resume = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &resume, DT).unwrap();
        assert!(!state.pause.paused);
        assert_ne!(state.ball.pos, ball.pos);
    }

    #[test]
    fn test_pause_freezes_wall_contact() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 5.0);
        state.pause.toggle();
        let vel = state.ball.vel;
        for _ in 0..3 {
            tick(&mut state, &idle(), DT).unwrap();
        }
        assert_eq!(state.ball.vel, vel);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut state = new_state();
        tick(&mut state, &idle(), 5.0).unwrap();
        // 0.1s at (150, 150)
        assert!((state.ball.pos - Vec2::new(415.0, 315.0)).length() < 1e-3);
    }

    #[test]
    fn test_clamp_dt() {
        assert_eq!(clamp_dt(-1.0, 0.1), Ok(0.0));
        assert_eq!(clamp_dt(0.05, 0.1), Ok(0.05));
        assert_eq!(clamp_dt(3.0, 0.1), Ok(0.1));
        assert!(matches!(
            clamp_dt(f32::NAN, 0.1),
            Err(StepError::NonFiniteDt(_))
        ));
        assert_eq!(
            clamp_dt(f32::INFINITY, 0.1),
            Err(StepError::NonFiniteDt(f32::INFINITY))
        );
    }

    #[test]
    fn test_clamp_dt_ignores_unusable_limit() {
        assert_eq!(clamp_dt(0.05, -1.0), Ok(0.05));
        assert_eq!(clamp_dt(0.05, f32::NAN), Ok(0.05));
        assert_eq!(clamp_dt(-0.5, 0.0), Ok(0.0));

        let tuning = Tuning {
            max_frame_dt: -1.0,
            ..Tuning::default()
        };
        let mut state = GameState::new(800.0, 600.0, tuning);
        tick(&mut state, &idle(), 0.1).unwrap();
        assert!((state.ball.pos - Vec2::new(415.0, 315.0)).length() < 1e-3);
    }

    #[test]
    fn test_cooldown_keeps_counting_while_paused() {
        let mut state = new_state();
        state.cooldown = Cooldown::Armed(3);
        state.pause.toggle();
        for _ in 0..20 {
            tick(&mut state, &idle(), DT).unwrap();
        }
        assert_eq!(state.cooldown, Cooldown::Armed(23));

        // No time passed, no frame counted
        tick(&mut state, &idle(), 0.0).unwrap();
        assert_eq!(state.cooldown, Cooldown::Armed(23));
    }

    #[test]
    fn test_non_finite_dt_is_an_error() {
        let mut state = new_state();
        let before = state.ball.clone();
        let err = tick(&mut state, &idle(), f32::NAN).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
        assert_eq!(state.ball, before);
    }

    #[test]
    fn test_speed_cap() {
        let tuning = Tuning {
            max_ball_speed_x: Some(160.0),
            ..Tuning::default()
        };
        let mut state = GameState::new(800.0, 600.0, tuning);
        state.ball.pos = Vec2::new(40.0, 300.0);
        state.ball.vel = Vec2::new(-150.0, 0.0);
        tick(&mut state, &idle(), DT).unwrap();
        assert_eq!(state.ball.vel.x, 160.0);
    }
}
