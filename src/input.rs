//! Keyboard state to simulation input
//!
//! The window layer records which keys are held in a [`KeyState`]; once per
//! frame the [`InputMapper`] turns that into paddle intents, an edge-triggered
//! pause toggle and a quit request.

use std::collections::HashSet;

use crate::sim::{GameState, Side, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    P,
    Escape,
}

impl Key {
    /// Up and down keys driving a paddle
    pub fn paddle_keys(side: Side) -> (Key, Key) {
        match side {
            Side::Left => (Key::W, Key::S),
            Side::Right => (Key::Up, Key::Down),
        }
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Output of one mapping pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedInput {
    pub tick: TickInput,
    pub quit: bool,
}

/// Stateful key mapper; remembers whether P was already down
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    pause_key_down: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&mut self, keys: &KeyState, state: &GameState) -> MappedInput {
        let tick = TickInput {
            left: paddle_intent(keys, state, Side::Left),
            right: paddle_intent(keys, state, Side::Right),
            pause: self.pause_edge(keys.is_pressed(Key::P)),
        };

        MappedInput {
            tick,
            quit: keys.is_pressed(Key::Escape),
        }
    }

    /// True only on the frame P goes down
    fn pause_edge(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.pause_key_down = false;
            false
        } else if self.pause_key_down {
            false
        } else {
            self.pause_key_down = true;
            true
        }
    }
}

/// Velocity intent for one paddle
///
/// A key pushing against the boundary it already sits on contributes nothing.
/// With both keys held the down key overrides the up key unless it is blocked.
fn paddle_intent(keys: &KeyState, state: &GameState, side: Side) -> f32 {
    let tuning = &state.tuning;
    let (low, high) = tuning.paddle_range(state.arena.height);
    let y = state.paddle(side).pos.y;
    let (up_key, down_key) = Key::paddle_keys(side);

    let mut intent = 0.0;
    if keys.is_pressed(up_key) && y < high {
        intent = tuning.paddle_speed;
    }
    if keys.is_pressed(down_key) && y > low {
        intent = -tuning.paddle_speed;
    }
    intent
}
