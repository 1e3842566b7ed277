//! Polled input

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Quit,
    Start,
    Left,
    Right,
}

/// Input source polled once per tick
pub trait Input {
    /// True while the key is held down this tick
    fn is_pressed(&self, key: Key) -> bool;
}

/// Snapshot of the held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub quit: bool,
    pub start: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly one key held
    pub fn pressed(key: Key) -> Self {
        let mut state = Self::new();
        state.set(key, true);
        state
    }

    pub fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Quit => self.quit = down,
            Key::Start => self.start = down,
            Key::Left => self.left = down,
            Key::Right => self.right = down,
        }
    }
}

impl Input for InputState {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Quit => self.quit,
            Key::Start => self.start,
            Key::Left => self.left,
            Key::Right => self.right,
        }
    }
}
