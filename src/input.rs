use std::collections::HashSet;

use macroquad::input::{get_keys_down, KeyCode};

/// Keyboard state for the current and the previous frame. The entry point
/// owns the single instance and rotates it once per frame after render.
#[derive(Default)]
pub struct InputManager {
    current: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the keys held right now.
    pub fn poll(&mut self) {
        self.record(get_keys_down());
    }

    pub fn record(&mut self, keys: HashSet<KeyCode>) {
        self.current = keys;
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.current.contains(&key)
    }

    /// Edge test: down this frame, up the previous one.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }

    /// previous <- current; call once the frame has been rendered.
    pub fn end_frame(&mut self) {
        self.previous = self.current.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[KeyCode]) -> HashSet<KeyCode> {
        list.iter().copied().collect()
    }

    #[test]
    fn fresh_key_is_both_down_and_pressed() {
        let mut input = InputManager::new();
        input.record(keys(&[KeyCode::Space]));

        assert!(input.is_key_down(KeyCode::Space));
        assert!(input.is_key_pressed(KeyCode::Space));
        assert!(!input.is_key_down(KeyCode::Enter));
    }

    #[test]
    fn held_key_stops_reading_as_pressed_after_rotation() {
        let mut input = InputManager::new();
        input.record(keys(&[KeyCode::Space]));
        input.end_frame();
        input.record(keys(&[KeyCode::Space]));

        assert!(input.is_key_down(KeyCode::Space));
        assert!(!input.is_key_pressed(KeyCode::Space));
    }

    #[test]
    fn released_and_repressed_key_reads_as_pressed_again() {
        let mut input = InputManager::new();
        input.record(keys(&[KeyCode::Space]));
        input.end_frame();
        input.record(keys(&[]));
        input.end_frame();
        input.record(keys(&[KeyCode::Space]));

        assert!(input.is_key_pressed(KeyCode::Space));
    }
}
