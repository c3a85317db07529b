//! Simulation core for an animated aurora background: a smoothed pointer
//! tracker, a fixed field of drifting particles repelled by the pointer,
//! and undulating translucent band curves.
//!
//! Everything here is pure math over `glam::Vec2` so the whole frame cycle
//! can be driven headless in tests. Rendering lives in the `aurora-wasm`
//! crate, which reads this state and issues canvas draw calls.

pub mod aurora;
pub mod color;
pub mod config;
pub mod field;
pub mod forces;
pub mod particle;
pub mod pointer;
pub mod scene;
