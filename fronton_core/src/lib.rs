//! Fronton simulation core
//!
//! A single-player Pong: a ball bounces around a 400x600 field and a racket
//! at the bottom has to send it back up. Every hit is a point for the player,
//! every miss a point for the CPU, first to 8 wins.
//!
//! Nothing here knows about windows, keyboards or GPUs. A host drives a
//! [`Game`] once per tick through the traits in [`host`], [`input`] and
//! [`draw`].

pub mod clock;
pub mod components;
pub mod config;
pub mod draw;
pub mod fsm;
pub mod game;
pub mod host;
pub mod hud;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use draw::*;
pub use fsm::*;
pub use game::*;
pub use host::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use systems::{accelerate, accelerate_and_reverse};
