//! Collision detection for the ball against the screen edges and paddles
//!
//! The tricky part is the paddle: a flat face hit reflects one velocity
//! component, and a hit on the rounded corner has to decide which one.

use glam::Vec2;

use super::geometry::{abs_delta, circle_overlaps_box, circle_touches_corner, within};
use super::state::{Arena, Paddle, Side};

/// Velocity component a contact reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Where on the paddle the ball landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Long face pointing at the court (or the back of the paddle)
    SideFace,
    /// Short face at the top or bottom
    EndFace,
    Corner,
}

/// Result of a resolved paddle contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleContact {
    pub kind: ContactKind,
    pub axis: Axis,
}

impl PaddleContact {
    fn new(kind: ContactKind, axis: Axis) -> Self {
        Self { kind, axis }
    }
}

/// Invert one component of a velocity
#[inline]
pub fn reflect(vel: Vec2, axis: Axis) -> Vec2 {
    match axis {
        Axis::X => Vec2::new(-vel.x, vel.y),
        Axis::Y => Vec2::new(vel.x, -vel.y),
    }
}

/// Ball touching the top or bottom edge (edge-exact)
pub fn touches_wall(pos: Vec2, radius: f32, arena: &Arena) -> bool {
    pos.y - radius <= 0.0 || pos.y + radius >= arena.height
}

/// Player who scores if the ball touches a side edge
///
/// The left edge is checked first, so only one side can score per frame.
pub fn goal_scorer(pos: Vec2, radius: f32, arena: &Arena) -> Option<Side> {
    if pos.x - radius <= 0.0 {
        Some(Side::Right)
    } else if pos.x + radius >= arena.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Paddle on the ball's half of the court
pub fn candidate_paddle(ball_x: f32, arena: &Arena) -> Side {
    if ball_x > arena.width / 2.0 {
        Side::Right
    } else {
        Side::Left
    }
}

/// Classify a ball/paddle contact
///
/// Faces are tested before the corner: a side face when the x distance is
/// within one radius inside the half width, then an end face the same way on
/// y. Anything else inside the broad phase is a corner hit if the ball center
/// is within one radius of the corner point.
pub fn paddle_contact(
    ball_pos: Vec2,
    ball_radius: f32,
    paddle: &Paddle,
    half_paddle: Vec2,
) -> Option<PaddleContact> {
    let distance = abs_delta(ball_pos, paddle.pos);

    if !circle_overlaps_box(distance, half_paddle, ball_radius) {
        return None;
    }

    if within(distance.x, half_paddle.x - ball_radius, half_paddle.x) {
        return Some(PaddleContact::new(ContactKind::SideFace, Axis::X));
    }

    if within(distance.y, half_paddle.y - ball_radius, half_paddle.y) {
        return Some(PaddleContact::new(ContactKind::EndFace, Axis::Y));
    }

    if circle_touches_corner(distance, half_paddle, ball_radius) {
        // Positive when the ball is on the court side of the paddle
        let toward_court = match paddle.side {
            Side::Left => ball_pos.x - paddle.pos.x,
            Side::Right => paddle.pos.x - ball_pos.x,
        };
        let axis = if distance.y - half_paddle.y <= toward_court - half_paddle.x {
            Axis::X
        } else {
            Axis::Y
        };
        return Some(PaddleContact::new(ContactKind::Corner, axis));
    }

    None
}
