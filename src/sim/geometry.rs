//! Circle versus axis-aligned box math
//!
//! Everything works on the absolute center-to-center distance, so a box is
//! described only by its half extents and the test is symmetric in all four
//! quadrants.

use glam::Vec2;

/// Componentwise |a - b|
#[inline]
pub fn abs_delta(a: Vec2, b: Vec2) -> Vec2 {
    (a - b).abs()
}

/// Inclusive range test
#[inline]
pub fn within(value: f32, low: f32, high: f32) -> bool {
    value >= low && value <= high
}

/// Broad phase: does the circle's bounding square touch the box?
#[inline]
pub fn circle_overlaps_box(distance: Vec2, half_extents: Vec2, radius: f32) -> bool {
    distance.x <= half_extents.x + radius && distance.y <= half_extents.y + radius
}

/// Is the circle center within `radius` of the box's nearest corner?
#[inline]
pub fn circle_touches_corner(distance: Vec2, half_extents: Vec2, radius: f32) -> bool {
    (distance - half_extents).length_squared() <= radius * radius
}
