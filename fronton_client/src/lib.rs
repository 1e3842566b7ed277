//! WebGPU host for Fronton
//!
//! Engine-free rendering using wgpu for the WebGPU API. The simulation lives
//! in `fronton_core`; this crate polls keys, runs fixed ticks and draws.
//! Only the pure modules build on native targets (for tests).

pub mod camera;
pub mod input;
pub mod mesh;
pub mod renderer;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use app::*;
