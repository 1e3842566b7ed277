//! Keyboard input handling

use fronton_core::{Input, InputState, Key};

/// Map a DOM `KeyboardEvent.key` value to a game key
pub fn key_from_dom(key: &str) -> Option<Key> {
    match key {
        "Escape" | "Esc" => Some(Key::Quit),
        " " | "Spacebar" => Some(Key::Start),
        "ArrowLeft" | "Left" => Some(Key::Left),
        "ArrowRight" | "Right" => Some(Key::Right),
        _ => None,
    }
}

/// Held-key state fed by DOM key events and polled by the game each tick
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    state: InputState,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event; returns true if the key belongs to the game
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle key up event
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    /// Release everything, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        self.state = InputState::new();
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    fn set(&mut self, key: &str, down: bool) -> bool {
        match key_from_dom(key) {
            Some(key) => {
                self.state.set(key, down);
                true
            }
            None => false,
        }
    }
}

impl Input for Keyboard {
    fn is_pressed(&self, key: Key) -> bool {
        self.state.is_pressed(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_map() {
        assert_eq!(key_from_dom("Escape"), Some(Key::Quit));
        assert_eq!(key_from_dom(" "), Some(Key::Start));
        assert_eq!(key_from_dom("ArrowLeft"), Some(Key::Left));
        assert_eq!(key_from_dom("ArrowRight"), Some(Key::Right));
        assert_eq!(key_from_dom("ArrowUp"), None);
        assert_eq!(key_from_dom("a"), None);
    }

    #[test]
    fn test_key_held_until_released() {
        let mut keyboard = Keyboard::new();
        assert!(keyboard.handle_key_down("ArrowLeft"));
        assert!(keyboard.is_pressed(Key::Left));
        assert!(keyboard.is_pressed(Key::Left), "Still held on the next poll");
        assert!(keyboard.handle_key_up("ArrowLeft"));
        assert!(!keyboard.is_pressed(Key::Left));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut keyboard = Keyboard::new();
        assert!(!keyboard.handle_key_down("x"));
        assert_eq!(keyboard.state(), InputState::new());
    }

    #[test]
    fn test_release_all() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key_down(" ");
        keyboard.handle_key_down("ArrowRight");
        keyboard.release_all();
        assert!(!keyboard.is_pressed(Key::Start));
        assert!(!keyboard.is_pressed(Key::Right));
    }
}
