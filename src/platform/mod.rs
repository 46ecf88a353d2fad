//! Platform abstraction layer
//!
//! Handles the pieces that touch the host rather than the game:
//! - Frame timing
//! - Window-system key codes

use std::time::Instant;

use winit::keyboard::KeyCode;

use crate::input::Key;

/// Wall-clock delta between frames
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since creation)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Translate a physical key into a game key
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::KeyP => Some(Key::P),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_is_monotonic() {
        let mut clock = FrameClock::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let dt = clock.tick();
        assert!(dt > 0.0);
        assert!(clock.tick() >= 0.0);
    }

    #[test]
    fn test_map_key_code() {
        assert_eq!(map_key_code(KeyCode::KeyW), Some(Key::W));
        assert_eq!(map_key_code(KeyCode::ArrowDown), Some(Key::Down));
        assert_eq!(map_key_code(KeyCode::Escape), Some(Key::Escape));
        assert_eq!(map_key_code(KeyCode::KeyQ), None);
    }
}
