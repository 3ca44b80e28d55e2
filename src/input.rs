//! Input controller
//!
//! Two logical keys map to two independent directional intents. Presses are
//! ignored while the game is paused; releases are always honored, so a key
//! held down through a pause keeps applying after resume until it is
//! physically released. Only explicit key-up events clear an intent - the
//! controller never resets itself on resume.

use crate::sim::TickInput;

/// The two keys the game understands; everything else stops at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

/// Held-key intents consumed by the tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    moving_left: bool,
    moving_right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key press; dropped entirely while paused
    pub fn key_down(&mut self, key: Key, paused: bool) {
        if paused {
            return;
        }
        match key {
            Key::Left => self.moving_left = true,
            Key::Right => self.moving_right = true,
        }
    }

    /// Key release; always processed, even while paused
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.moving_left = false,
            Key::Right => self.moving_right = false,
        }
    }

    /// Snapshot the intents for one tick
    pub fn tick_input(&self, interrupts_enabled: bool) -> TickInput {
        TickInput {
            moving_left: self.moving_left,
            moving_right: self.moving_right,
            interrupts_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut input = InputState::new();
        input.key_down(Key::Left, false);
        assert!(input.tick_input(false).moving_left);
        input.key_up(Key::Left);
        assert!(!input.tick_input(false).moving_left);
    }

    #[test]
    fn press_ignored_while_paused() {
        let mut input = InputState::new();
        input.key_down(Key::Right, true);
        assert!(!input.tick_input(false).moving_right);
    }

    #[test]
    fn held_key_sticks_through_pause() {
        let mut input = InputState::new();
        // Pressed before the pause, never released during it
        input.key_down(Key::Right, false);
        // Pause comes and goes; no key-up arrives
        assert!(input.tick_input(false).moving_right, "intent persists after resume");

        // Release during a pause still clears the intent
        input.key_up(Key::Right);
        assert!(!input.tick_input(false).moving_right);
    }

    #[test]
    fn intents_are_independent() {
        let mut input = InputState::new();
        input.key_down(Key::Left, false);
        input.key_down(Key::Right, false);
        let snapshot = input.tick_input(true);
        assert!(snapshot.moving_left && snapshot.moving_right);
        assert!(snapshot.interrupts_enabled);
    }
}
