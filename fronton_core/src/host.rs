//! Contract between the game and whatever host drives it
//!
//! The host owns the frame timer, key polling and pixels. Each tick it calls
//! [`Game::update`] and then [`Game::render`].

use crate::draw::Surface;
use crate::input::Input;

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Shut down cleanly (exit code 0 on native hosts)
    Quit,
}

/// A game driven by an external frame loop
pub trait Game {
    /// Reset every field to its starting value
    fn initialize(&mut self);

    /// Advance one tick
    fn update(&mut self, input: &dyn Input) -> Flow;

    /// Draw the current state; must not mutate it
    fn render(&self, surface: &mut dyn Surface);

    /// Logical screen size for a given outside size
    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        (outside_width, outside_height)
    }
}
